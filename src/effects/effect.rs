//! Effect definitions.
//!
//! An effect is what a card does when played. Effects only rearrange the
//! deck and hand; they are data so catalog cards can be built without a
//! type per card.

use std::sync::Arc;

use crate::cards::Card;
use crate::core::Result;
use crate::game::Game;

use super::filter::CardFilter;
use super::resolver::EffectResolver;

/// Signature of a caller-supplied effect.
pub type EffectFn = dyn Fn(&mut Game) -> Result<()> + Send + Sync;

/// A named closure effect, for behaviour the built-in variants don't cover.
#[derive(Clone)]
pub struct CustomEffect {
    name: String,
    apply: Arc<EffectFn>,
}

impl CustomEffect {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for CustomEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CustomEffect").field(&self.name).finish()
    }
}

/// Something a card does when played.
///
/// ## Deck Search
///
/// - `Tutor`: Move a random deck card matching a filter into hand
/// - `Track`: Look at the top three cards and keep one
///
/// ## Deck Building
///
/// - `ShuffleIn`: Insert a card into the deck at a random position
///
/// ## Other
///
/// - `Draw`: Draw cards from the front of the deck
/// - `Batch`: Several effects in order
/// - `Custom`: Arbitrary closure over the game
#[derive(Clone, Debug)]
pub enum Effect {
    /// Move a uniformly random matching deck card into hand.
    /// Does nothing if no deck card matches.
    Tutor(CardFilter),

    /// Insert a card into the deck at a uniformly random position.
    ShuffleIn(Card),

    /// Take the top three deck cards. The first wishlist entry among them
    /// goes to hand, otherwise a random one of them. The rest are gone.
    Track { wishlist: Vec<Card> },

    /// Draw from the front of the deck.
    Draw(usize),

    /// Execute multiple effects in sequence.
    Batch(Vec<Effect>),

    Custom(CustomEffect),
}

impl Effect {
    /// Create a custom effect from a closure.
    pub fn custom<F>(name: impl Into<String>, apply: F) -> Self
    where
        F: Fn(&mut Game) -> Result<()> + Send + Sync + 'static,
    {
        Self::Custom(CustomEffect {
            name: name.into(),
            apply: Arc::new(apply),
        })
    }

    /// Create a batch of effects.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    /// Run the effect against a game.
    pub fn apply(&self, game: &mut Game) -> Result<()> {
        match self {
            Effect::Custom(custom) => (custom.apply)(game),
            _ => EffectResolver::resolve(self, game),
        }
    }
}
