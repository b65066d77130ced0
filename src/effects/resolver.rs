//! Effect resolution - executing effects on a game.

use tracing::trace;

use crate::cards::Card;
use crate::core::Result;
use crate::game::Game;

use super::{CardFilter, Effect};

/// Resolves built-in effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve an effect. `Custom` effects are handled by `Effect::apply`.
    pub fn resolve(effect: &Effect, game: &mut Game) -> Result<()> {
        match effect {
            Effect::Tutor(filter) => {
                Self::tutor(game, filter);
                Ok(())
            }
            Effect::ShuffleIn(card) => {
                Self::shuffle_in(game, card.clone());
                Ok(())
            }
            Effect::Track { wishlist } => {
                Self::track(game, wishlist);
                Ok(())
            }
            Effect::Draw(count) => {
                game.draw(*count);
                Ok(())
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    effect.apply(game)?;
                }
                Ok(())
            }
            Effect::Custom(_) => effect.apply(game),
        }
    }

    fn tutor(game: &mut Game, filter: &CardFilter) {
        let candidates: Vec<usize> = game
            .deck
            .iter()
            .enumerate()
            .filter(|(_, card)| filter.matches(card))
            .map(|(i, _)| i)
            .collect();

        if let Some(pick) = game.rng_mut().choose_index(candidates.len()) {
            let card = game.deck.remove(candidates[pick]);
            trace!(card = %card, "tutored");
            game.hand.push(card);
        }
    }

    fn shuffle_in(game: &mut Game, card: Card) {
        let len = game.deck.len();
        let position = game.rng_mut().gen_position(len);
        trace!(card = %card, position, "shuffled into deck");
        game.deck.insert(position, card);
    }

    fn track(game: &mut Game, wishlist: &[Card]) {
        let take = game.deck.len().min(3);
        let mut revealed: Vec<Card> = game.deck.drain(..take).collect();
        if revealed.is_empty() {
            return;
        }

        let wanted = wishlist
            .iter()
            .find_map(|wish| revealed.iter().position(|card| card == wish));

        let index = match wanted {
            Some(i) => i,
            None => game.rng_mut().gen_index(revealed.len()),
        };

        let kept = revealed.swap_remove(index);
        trace!(card = %kept, discarded = revealed.len(), "tracked");
        game.hand.push(kept);
    }
}
