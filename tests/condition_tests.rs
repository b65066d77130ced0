//! Condition algebra tests.
//!
//! These tests verify:
//! - Atoms against a hand-built game
//! - Composition through the builder methods
//! - Short-circuit evaluation of `and` and `or`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ccg_montecarlo::cards::catalog;
use ccg_montecarlo::conditions::Condition;
use ccg_montecarlo::core::GameRng;
use ccg_montecarlo::game::Game;

fn game(mana: i32) -> Game {
    let mut game = Game::new(Vec::new(), GameRng::new(0));
    game.hand = vec![catalog::zixor(), catalog::wisp()];
    game.max_mana = mana;
    game.mana = mana;
    game
}

fn explode() -> Condition {
    Condition::custom("explode", |_| panic!("evaluated"))
}

#[test]
fn test_atoms() {
    let game = game(2);

    assert!(Condition::in_hand(catalog::zixor()).evaluate(&game));
    assert!(!Condition::in_hand(catalog::zixor_prime()).evaluate(&game));

    assert!(Condition::enough_mana(catalog::angry_chicken()).evaluate(&game));
    assert!(!Condition::enough_mana(catalog::zixor()).evaluate(&game));

    // Only mana is checked, not the hand
    assert!(Condition::enough_mana(catalog::scavengers_ingenuity()).evaluate(&game));
}

#[test]
fn test_playable_needs_both() {
    let playable = Condition::playable(catalog::zixor());
    assert!(!playable.evaluate(&game(2)));
    assert!(playable.evaluate(&game(3)));
    assert!(!Condition::playable(catalog::angry_chicken()).evaluate(&game(10)));
}

#[test]
fn test_composition() {
    let game = game(5);
    let has_zixor = Condition::in_hand(catalog::zixor());
    let has_prime = Condition::in_hand(catalog::zixor_prime());

    assert!(has_zixor.clone().or(has_prime.clone()).evaluate(&game));
    assert!(!has_zixor.clone().and(has_prime.clone()).evaluate(&game));
    assert!(has_prime.clone().negate().evaluate(&game));
    assert!(Condition::all([has_zixor.clone(), Condition::ManaAtLeast(5)]).evaluate(&game));
    assert!(!Condition::any([has_prime, Condition::TurnAtLeast(1)]).evaluate(&game));
}

#[test]
fn test_and_short_circuits() {
    let game = game(0);
    assert!(!Condition::Never.and(explode()).evaluate(&game));
    assert!(!Condition::in_hand(catalog::zixor_prime()).and(explode()).evaluate(&game));
}

#[test]
fn test_or_short_circuits() {
    let game = game(0);
    assert!(Condition::Always.or(explode()).evaluate(&game));
    assert!(Condition::in_hand(catalog::wisp()).or(explode()).evaluate(&game));
}

#[test]
fn test_nested_short_circuit() {
    let game = game(0);
    let deep = Condition::Never.and(explode().or(explode()).and(explode()));
    assert!(!deep.evaluate(&game));
    assert!(deep.negate().evaluate(&game));
}

#[test]
fn test_right_side_runs_when_needed() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = {
        let calls = calls.clone();
        Condition::custom("counted", move |_| {
            calls.fetch_add(1, Ordering::Relaxed);
            true
        })
    };
    let game = game(0);

    assert!(Condition::Always.and(counted.clone()).evaluate(&game));
    assert!(Condition::Never.or(counted).evaluate(&game));
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}
