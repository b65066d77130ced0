//! Builder for setting up a game.

use tracing::trace;

use crate::cards::Card;
use crate::core::{GameConfig, GameRng};

use super::Game;

/// Builder for creating a `Game`.
///
/// ## Example
///
/// ```
/// use ccg_montecarlo::cards::catalog;
/// use ccg_montecarlo::core::GameRng;
/// use ccg_montecarlo::game::GameBuilder;
///
/// let deck = vec![catalog::wisp(); 10];
/// let game = GameBuilder::new(deck)
///     .wishlist([catalog::zixor()])
///     .playlist([catalog::zixor()])
///     .build(GameRng::new(7));
///
/// assert_eq!(game.hand.len(), 3);
/// assert_eq!(game.deck.len(), 7);
/// ```
pub struct GameBuilder {
    deck: Vec<Card>,
    wishlist: Vec<Card>,
    playlist: Vec<Card>,
    config: GameConfig,
}

impl GameBuilder {
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            deck,
            wishlist: Vec::new(),
            playlist: Vec::new(),
            config: GameConfig::default(),
        }
    }

    /// Cards to keep during the opening mulligan.
    pub fn wishlist(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.wishlist = cards.into_iter().collect();
        self
    }

    /// Priority order for `play_until`.
    pub fn playlist(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.playlist = cards.into_iter().collect();
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle the deck, draw the opening hand, and mulligan if a
    /// wishlist was given.
    pub fn build(self, rng: GameRng) -> Game {
        let hand_size = self.config.starting_hand_size;
        let mut game = Game::blank(self.deck, self.wishlist, self.playlist, self.config, rng);

        game.shuffle_deck();
        game.draw(hand_size);

        if !game.wishlist.is_empty() {
            let wishlist = game.wishlist.clone();
            game.mulligan(&wishlist);
        }

        trace!(hand = ?game.hand, "opening hand");
        game
    }
}
