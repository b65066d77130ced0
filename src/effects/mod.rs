//! Effect system for card abilities.
//!
//! Effects are attached to cards and run when the card is played.
//! Built-in variants cover deck searches and deck manipulation;
//! `Effect::Custom` takes any closure over the game.

mod effect;
mod filter;
mod resolver;

pub use effect::{CustomEffect, Effect, EffectFn};
pub use filter::CardFilter;
pub use resolver::EffectResolver;
