//! Game engine tests.
//!
//! These tests drive `Game` through its public surface:
//! - Construction and the opening mulligan
//! - Turn structure and the mana curve
//! - `play_until` stopping rules and card effects

use ccg_montecarlo::cards::{catalog, Card};
use ccg_montecarlo::conditions::Condition;
use ccg_montecarlo::core::{GameConfig, GameRng, SimError};
use ccg_montecarlo::effects::Effect;
use ccg_montecarlo::game::{Game, GameBuilder};

fn names(cards: &[Card]) -> Vec<&str> {
    let mut names: Vec<&str> = cards.iter().map(Card::name).collect();
    names.sort_unstable();
    names
}

fn empty_game(seed: u64) -> Game {
    Game::new(Vec::new(), GameRng::new(seed))
}

/// Test the worked mulligan example.
#[test]
fn test_mulligan_example() {
    let mut game = empty_game(3);
    game.hand = vec![catalog::wisp(), catalog::wisp(), catalog::scavengers_ingenuity()];
    game.deck = vec![catalog::scavengers_ingenuity(), catalog::zixor(), catalog::wisp()];

    game.mulligan(&[catalog::scavengers_ingenuity(), catalog::zixor()]);

    assert_eq!(
        names(&game.hand),
        vec![
            catalog::SCAVENGERS_INGENUITY,
            catalog::SCAVENGERS_INGENUITY,
            catalog::ZIXOR,
        ]
    );
    // The remaining Wisp plus the two discarded ones
    assert_eq!(names(&game.deck), vec![catalog::WISP; 3]);
}

/// A hand with nothing to replace is left alone.
#[test]
fn test_mulligan_keeps_full_wishlist_hand() {
    let mut game = empty_game(3);
    game.hand = vec![catalog::zixor(), catalog::tracking([])];
    game.deck = vec![catalog::wisp(), catalog::wisp()];

    game.mulligan(&[catalog::tracking([]), catalog::zixor()]);

    assert_eq!(game.hand, vec![catalog::tracking([]), catalog::zixor()]);
    assert_eq!(game.deck, vec![catalog::wisp(), catalog::wisp()]);
}

/// Construction shuffles, draws three, and starts at turn zero.
#[test]
fn test_construct() {
    let deck = vec![catalog::angry_chicken(); 30];
    let game = Game::new(deck, GameRng::new(1));

    assert_eq!(game.hand.len(), 3);
    assert_eq!(game.deck.len(), 27);
    assert_eq!(game.health, 30);
    assert_eq!(game.turn, 0);
    assert_eq!(game.max_mana, 0);
    assert_eq!(game.mana, 0);
}

/// Mana grows by one per turn and stops at ten.
#[test]
fn test_mana_curve() {
    let mut game = Game::new(vec![catalog::wisp(); 5], GameRng::new(2));

    for turn in 1..=15 {
        game.next_turn();
        assert_eq!(game.turn, turn);
        assert_eq!(game.max_mana, (turn as i32).min(10));
        assert_eq!(game.mana, game.max_mana);
    }
    // Five cards, all drawn by now
    assert_eq!(game.hand.len(), 5);
    assert!(game.deck.is_empty());
}

/// Playing a card not in hand is an error and changes nothing.
#[test]
fn test_play_missing_card() {
    let mut game = empty_game(4);
    game.hand = vec![catalog::wisp()];
    game.mana = 5;

    let err = game.play_card(&catalog::zixor()).unwrap_err();
    assert_eq!(
        err,
        SimError::CardNotInHand {
            card: catalog::ZIXOR.to_string()
        }
    );
    assert_eq!(game.hand, vec![catalog::wisp()]);
    assert_eq!(game.mana, 5);
}

/// Playing Zixor puts Zixor Prime somewhere in the deck.
#[test]
fn test_zixor_shuffles_in_prime() {
    let mut game = empty_game(5);
    game.hand = vec![catalog::zixor()];
    game.deck = vec![catalog::wisp(); 10];
    game.mana = 3;

    game.play_card(&catalog::zixor()).unwrap();

    assert!(game.hand.is_empty());
    assert_eq!(game.mana, 0);
    assert_eq!(game.deck.len(), 11);
    assert!(game.deck.contains(&catalog::zixor_prime()));
}

/// Gryphon only fetches Rush minions.
#[test]
fn test_gryphon_fetches_rush_minion() {
    for seed in 0..20 {
        let mut game = empty_game(seed);
        game.hand = vec![catalog::diving_gryphon()];
        game.deck = vec![
            catalog::angry_chicken(),
            catalog::zixor(),
            catalog::wisp(),
            catalog::scavengers_ingenuity(),
        ];
        game.mana = 4;

        game.play_card(&catalog::diving_gryphon()).unwrap();

        assert_eq!(game.hand, vec![catalog::zixor()]);
        assert_eq!(game.deck.len(), 3);
    }
}

/// Scavenger's Ingenuity finds nothing in a deck without Beasts.
#[test]
fn test_tutor_without_match() {
    let mut game = empty_game(6);
    game.hand = vec![catalog::scavengers_ingenuity()];
    game.deck = vec![catalog::wisp(), catalog::angry_chicken()];
    game.mana = 2;

    game.play_card(&catalog::scavengers_ingenuity()).unwrap();

    assert!(game.hand.is_empty());
    assert_eq!(game.deck, vec![catalog::wisp(), catalog::angry_chicken()]);
}

/// Tracking keeps the wishlist card and discards the other two.
#[test]
fn test_tracking_prefers_wishlist() {
    let tracking = catalog::tracking([catalog::zixor()]);
    let mut game = empty_game(7);
    game.hand = vec![tracking.clone()];
    game.deck = vec![
        catalog::wisp(),
        catalog::zixor(),
        catalog::angry_chicken(),
        catalog::scalerider(),
    ];
    game.mana = 1;

    game.play_card(&tracking).unwrap();

    assert_eq!(game.hand, vec![catalog::zixor()]);
    assert_eq!(game.deck, vec![catalog::scalerider()]);
}

/// Stop as soon as the card is drawn.
#[test]
fn test_play_until_in_hand() {
    let mut game = empty_game(8);
    game.deck = vec![catalog::wisp(), catalog::wisp(), catalog::zixor()];

    game.play_until(&Condition::in_hand(catalog::zixor())).unwrap();

    assert_eq!(game.turn, 3);
    assert!(game.in_hand(&catalog::zixor()));
}

/// The condition is re-checked after every play, not once per turn.
#[test]
fn test_play_until_checks_after_each_play() {
    let mut game = GameBuilder::new(Vec::new())
        .playlist([catalog::wisp(), catalog::wisp(), catalog::wisp()])
        .build(GameRng::new(9));
    game.hand = vec![catalog::wisp(); 3];

    let stop = Condition::custom("two wisps left", |g: &Game| g.count_in_hand(&catalog::wisp()) == 2);
    game.play_until(&stop).unwrap();

    assert_eq!(game.turn, 1);
    assert_eq!(game.count_in_hand(&catalog::wisp()), 2);
}

/// Cards are played in playlist order while mana lasts.
#[test]
fn test_play_until_spends_mana_in_order() {
    let played = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = |name: &'static str| {
        let played = played.clone();
        Card::minion(name, 1).with_effect(Effect::custom(name, move |_| {
            played.lock().unwrap().push(name);
            Ok(())
        }))
    };
    let a = log("A");
    let b = log("B");

    let mut game = GameBuilder::new(Vec::new())
        .playlist([b.clone(), a.clone()])
        .build(GameRng::new(10));
    game.hand = vec![a, b];

    game.play_until(&Condition::TurnAtLeast(2)).unwrap();

    // Turn 1: one mana, so only B; turn 2 stops before playing
    assert_eq!(*played.lock().unwrap(), vec!["B"]);
}

/// A configured limit turns a hopeless search into an error.
#[test]
fn test_turn_limit() {
    let mut game = GameBuilder::new(vec![catalog::wisp(); 3])
        .config(GameConfig::default().with_turn_limit(12))
        .build(GameRng::new(11));

    let err = game.play_until(&Condition::in_hand(catalog::zixor())).unwrap_err();
    assert_eq!(err, SimError::TurnLimitExceeded { limit: 12 });
    assert_eq!(game.turn, 12);
}

/// Same seed, same game.
#[test]
fn test_seeded_games_repeat() {
    let tracking = || catalog::tracking([catalog::zixor(), catalog::zixor_prime()]);
    let deck = || {
        let mut deck = vec![catalog::angry_chicken(); 26];
        deck.extend([
            catalog::zixor(),
            catalog::diving_gryphon(),
            catalog::scavengers_ingenuity(),
            tracking(),
        ]);
        deck
    };
    let run = |seed| {
        let mut game = GameBuilder::new(deck())
            .wishlist([catalog::zixor()])
            .playlist([
                catalog::zixor(),
                catalog::diving_gryphon(),
                catalog::scavengers_ingenuity(),
                tracking(),
            ])
            .config(GameConfig::default().with_turn_limit(100))
            .build(GameRng::new(seed));
        game.play_until(&Condition::in_hand(catalog::zixor_prime())).unwrap();
        (game.turn, game.hand.clone())
    };

    assert_eq!(run(21), run(21));
}
