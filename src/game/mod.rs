//! The game engine: deck, hand, mana and the play-until driver.

mod builder;
mod state;

pub use builder::GameBuilder;
pub use state::Game;
