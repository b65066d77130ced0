//! # ccg-montecarlo
//!
//! Monte Carlo estimates for collectible card game decks: how many turns
//! until a card is in hand, or playable, for a given deck list and play
//! pattern.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Values**: A card is an immutable, cheaply cloned handle
//!    identified by its name. Effects are bound to the card at
//!    construction.
//!
//! 2. **One Game Per Trial**: Every trial owns its `Game` and its RNG.
//!    Nothing mutable crosses trial boundaries, so trials can run on the
//!    rayon pool.
//!
//! 3. **Reproducible**: A seeded run derives one RNG stream per
//!    combination and trial, and gives the same report sequentially or in
//!    parallel.
//!
//! ## Example
//!
//! ```
//! use ccg_montecarlo::cards::catalog;
//! use ccg_montecarlo::conditions::Condition;
//! use ccg_montecarlo::core::{GameConfig, SimConfig};
//! use ccg_montecarlo::game::GameBuilder;
//! use ccg_montecarlo::sim::{Harness, ParamGrid};
//!
//! let grid = ParamGrid::new().param("hand_size", [3, 4]);
//! let harness = Harness::new(SimConfig::new().with_trials(20).with_seed(1));
//!
//! let report = harness
//!     .run(&grid, |combo, rng| {
//!         let mut deck = vec![catalog::angry_chicken(); 29];
//!         deck.push(catalog::zixor());
//!
//!         let config = GameConfig::default().with_starting_hand_size(combo.count("hand_size")?);
//!         let mut game = GameBuilder::new(deck).config(config).build(rng.clone());
//!
//!         game.play_until(&Condition::in_hand(catalog::zixor()))?;
//!         Ok(game.turn)
//!     })
//!     .unwrap();
//!
//! assert_eq!(report.len(), 2);
//! println!("{}", report);
//! ```
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, RNG
//! - `cards`: Card values, tags, registry and catalog
//! - `effects`: What a card does when played
//! - `conditions`: Boolean predicates over a game
//! - `game`: Game state, turn structure and the play-until driver
//! - `sim`: Parameter grids, the harness, statistics and reports
//! - `experiments`: Ready-made simulation functions

pub mod core;
pub mod cards;
pub mod effects;
pub mod conditions;
pub mod game;
pub mod sim;
pub mod experiments;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, MedianMethod, Result, SimConfig, SimError};

pub use crate::cards::{Ability, Card, CardKind, CardRegistry, Race};

pub use crate::effects::{CardFilter, Effect, EffectResolver};

pub use crate::conditions::Condition;

pub use crate::game::{Game, GameBuilder};

pub use crate::sim::{Combination, Harness, ParamGrid, ParamValue, Report, Summary, Table};
