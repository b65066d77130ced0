//! How fast does a Rush Hunter find Zixor?
//!
//! The deck holds one Zixor, the requested number of tutors, and Angry
//! Chickens up to thirty cards. Tutors are played as soon as they are
//! affordable.
//!
//! ## Parameters
//!
//! - `n_gryphons`: Diving Gryphons (draw a Rush minion)
//! - `n_scavengers`: Scavenger's Ingenuity (draw a Beast)
//! - `n_tracking`: Tracking (keep one of the top three)
//! - `mulligan`: Mulligan for Zixor and the spells, or keep any hand
//!
//! ## Example
//!
//! ```
//! use ccg_montecarlo::core::SimConfig;
//! use ccg_montecarlo::experiments::rush_hunter;
//! use ccg_montecarlo::sim::{Harness, ParamGrid};
//!
//! let grid = ParamGrid::new()
//!     .param("n_gryphons", [0, 2])
//!     .param("n_scavengers", [1])
//!     .param("n_tracking", [1])
//!     .param("mulligan", [true]);
//!
//! let report = Harness::new(SimConfig::new().with_trials(20).with_seed(1))
//!     .run(&grid, rush_hunter::zixor_playable_turn)
//!     .unwrap();
//!
//! assert_eq!(report.len(), 2);
//! println!("{}", report);
//! ```

use crate::cards::{catalog, Card};
use crate::conditions::Condition;
use crate::core::{GameConfig, GameRng, Result};
use crate::game::{Game, GameBuilder};
use crate::sim::{Combination, ParamGrid};

/// Cards in a constructed deck.
pub const DECK_SIZE: usize = 30;

/// Turns after which a trial is abandoned.
pub const TURN_LIMIT: u32 = 100;

/// One Zixor plus the tutors, topped up with Angry Chickens.
///
/// If the named cards already exceed `DECK_SIZE` no filler is added.
pub fn hunter_deck(n_gryphons: usize, n_scavengers: usize, n_tracking: usize) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    deck.push(catalog::zixor());
    deck.extend(std::iter::repeat(catalog::diving_gryphon()).take(n_gryphons));
    deck.extend(std::iter::repeat(catalog::scavengers_ingenuity()).take(n_scavengers));
    deck.extend(std::iter::repeat(tracking()).take(n_tracking));

    let filler = DECK_SIZE.saturating_sub(deck.len());
    deck.extend(std::iter::repeat(catalog::angry_chicken()).take(filler));
    deck
}

/// Tracking that keeps Zixor or Zixor Prime when it sees them.
fn tracking() -> Card {
    catalog::tracking([catalog::zixor(), catalog::zixor_prime()])
}

/// Default grid: zero to two of each tutor, with and without mulligan.
pub fn grid() -> ParamGrid {
    ParamGrid::new()
        .param("n_gryphons", [0, 1, 2])
        .param("n_scavengers", [0, 1, 2])
        .param("n_tracking", [0, 1, 2])
        .param("mulligan", [false, true])
}

fn setup(combo: &Combination, rng: &GameRng, playlist: Vec<Card>) -> Result<Game> {
    let deck = hunter_deck(
        combo.count("n_gryphons")?,
        combo.count("n_scavengers")?,
        combo.count("n_tracking")?,
    );

    let wishlist = if combo.bool("mulligan")? {
        vec![catalog::zixor(), catalog::scavengers_ingenuity(), tracking()]
    } else {
        Vec::new()
    };

    Ok(GameBuilder::new(deck)
        .wishlist(wishlist)
        .playlist(playlist)
        .config(GameConfig::default().with_turn_limit(TURN_LIMIT))
        .build(rng.clone()))
}

/// Turn on which Zixor Prime reaches the hand.
///
/// Zixor is played on curve to shuffle Prime in, then the tutors dig for
/// it.
pub fn zixor_prime_turn(combo: &Combination, rng: &mut GameRng) -> Result<u32> {
    let playlist = vec![
        catalog::zixor(),
        catalog::scavengers_ingenuity(),
        catalog::diving_gryphon(),
        tracking(),
    ];
    let mut game = setup(combo, rng, playlist)?;
    game.play_until(&Condition::in_hand(catalog::zixor_prime()))?;
    Ok(game.turn)
}

/// Turn on which Zixor is in hand with enough mana to play it.
pub fn zixor_playable_turn(combo: &Combination, rng: &mut GameRng) -> Result<u32> {
    let playlist = vec![
        catalog::scavengers_ingenuity(),
        catalog::diving_gryphon(),
        tracking(),
    ];
    let mut game = setup(combo, rng, playlist)?;
    game.play_until(&Condition::playable(catalog::zixor()))?;
    Ok(game.turn)
}
