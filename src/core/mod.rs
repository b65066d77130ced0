//! Core building blocks: RNG, configuration, errors.
//!
//! Nothing in here knows about cards; the engine and the harness both
//! build on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, MedianMethod, SimConfig};
pub use error::{Result, SimError};
pub use rng::GameRng;
