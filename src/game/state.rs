//! Per-trial game state.
//!
//! A `Game` is built once per trial, driven with `play_until`, read for
//! its result and dropped. Nothing in it is shared between trials.
//!
//! ## Turn Structure
//!
//! `next_turn` bumps the turn counter, raises `max_mana` by one (capped),
//! refills `mana` and draws a card. `play_until` alternates turns with a
//! greedy pass over the playlist until its condition holds.

use tracing::{debug, trace};

use crate::cards::Card;
use crate::conditions::Condition;
use crate::core::{GameConfig, GameRng, Result, SimError};

/// Mutable state of one simulated playthrough.
///
/// `deck` and `hand` are public so effects can rearrange them freely.
/// The front of `deck` is the next card drawn.
#[derive(Clone, Debug)]
pub struct Game {
    /// Library, front = next draw.
    pub deck: Vec<Card>,

    /// Cards in hand, duplicates allowed.
    pub hand: Vec<Card>,

    pub health: i32,

    /// Turn counter, 0 before the first turn.
    pub turn: u32,

    /// Mana crystals, never decreases.
    pub max_mana: i32,

    /// Mana left this turn.
    pub mana: i32,

    /// Preferred opening cards, consulted by the mulligan.
    pub wishlist: Vec<Card>,

    /// Priority order tried by `play_until` each turn.
    pub playlist: Vec<Card>,

    config: GameConfig,
    rng: GameRng,
}

impl Game {
    /// Build a game without wishlist or playlist.
    ///
    /// Shuffles `deck` and draws the opening hand.
    pub fn new(deck: Vec<Card>, rng: GameRng) -> Self {
        super::GameBuilder::new(deck).build(rng)
    }

    /// An unshuffled game with an empty hand. The builder does the rest.
    pub(crate) fn blank(
        deck: Vec<Card>,
        wishlist: Vec<Card>,
        playlist: Vec<Card>,
        config: GameConfig,
        rng: GameRng,
    ) -> Self {
        Self {
            deck,
            hand: Vec::new(),
            health: config.starting_health,
            turn: 0,
            max_mana: 0,
            mana: 0,
            wishlist,
            playlist,
            config,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The game's random source, for effects.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(&mut self.deck);
    }

    /// Is a card with this name in hand?
    #[must_use]
    pub fn in_hand(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Number of copies of a card in hand.
    #[must_use]
    pub fn count_in_hand(&self, card: &Card) -> usize {
        self.hand.iter().filter(|c| *c == card).count()
    }

    /// Does the current mana cover the card's cost?
    #[must_use]
    pub fn can_afford(&self, card: &Card) -> bool {
        i64::from(self.mana) >= i64::from(card.mana())
    }

    /// In hand and affordable.
    #[must_use]
    pub fn is_playable(&self, card: &Card) -> bool {
        self.in_hand(card) && self.can_afford(card)
    }

    /// Move up to `n` cards from the front of the deck into hand.
    ///
    /// Returns how many were drawn; a short deck is not an error.
    pub fn draw(&mut self, n: usize) -> usize {
        let n = n.min(self.deck.len());
        self.hand.extend(self.deck.drain(..n));
        trace!(drawn = n, hand = self.hand.len(), deck = self.deck.len(), "draw");
        n
    }

    /// Replace opening cards that are not on the wishlist.
    ///
    /// Each wishlist entry keeps at most one matching card from hand, in
    /// wishlist order. Everything else is redrawn, then the discards go back
    /// into the deck and the deck is reshuffled. Hand size is unchanged
    /// unless the deck runs short.
    pub fn mulligan(&mut self, wishlist: &[Card]) {
        let mut keep = Vec::with_capacity(self.hand.len());
        for wish in wishlist {
            if let Some(i) = self.hand.iter().position(|card| card == wish) {
                keep.push(self.hand.remove(i));
            }
        }

        let discard = std::mem::replace(&mut self.hand, keep);
        debug!(kept = self.hand.len(), discarded = discard.len(), "mulligan");

        if discard.is_empty() {
            return;
        }

        self.draw(discard.len());
        self.deck.extend(discard);
        self.shuffle_deck();
    }

    /// Start the next turn: gain a mana crystal, refill, draw one card.
    ///
    /// `max_mana` never goes down, even if the configured cap is below it.
    pub fn next_turn(&mut self) {
        self.turn += 1;
        let cap = self.config.max_mana_cap.max(0);
        self.max_mana = self.max_mana.max((self.max_mana + 1).min(cap));
        self.mana = self.max_mana;
        self.draw(1);
        trace!(turn = self.turn, mana = self.mana, "next turn");
    }

    /// Play one copy of `card` from hand and run its effect.
    ///
    /// Fails with `CardNotInHand` if no card with that name is in hand, and
    /// with `ManaCost` if the cost does not fit an `i32`; in both cases the
    /// game is left untouched. Mana is not checked here; callers check
    /// `can_afford` first.
    pub fn play_card(&mut self, card: &Card) -> Result<()> {
        let index = self
            .hand
            .iter()
            .position(|c| c == card)
            .ok_or_else(|| SimError::CardNotInHand {
                card: card.name().to_string(),
            })?;
        let cost = i32::try_from(card.mana()).map_err(|_| SimError::ManaCost {
            card: card.name().to_string(),
            cost: card.mana(),
        })?;

        self.hand.remove(index);
        self.mana = self.mana.saturating_sub(cost);
        trace!(card = %card, mana = self.mana, "play");

        if let Some(effect) = card.effect() {
            effect.apply(self)?;
        }
        Ok(())
    }

    /// Take turns until `condition` holds.
    ///
    /// Each turn: advance, check the condition, then walk the playlist in
    /// order and play every listed card that is in hand and affordable,
    /// re-checking the condition after each play.
    ///
    /// With no `turn_limit` configured this only returns once the condition
    /// holds; an unreachable condition loops forever. With a limit it fails
    /// with `TurnLimitExceeded` after that many turns.
    pub fn play_until(&mut self, condition: &Condition) -> Result<()> {
        loop {
            self.next_turn();
            if condition.evaluate(self) {
                return Ok(());
            }

            let mut i = 0;
            while i < self.playlist.len() {
                let card = self.playlist[i].clone();
                i += 1;

                if self.is_playable(&card) {
                    self.play_card(&card)?;
                    if condition.evaluate(self) {
                        return Ok(());
                    }
                }
            }

            if let Some(limit) = self.config.turn_limit {
                if self.turn >= limit {
                    return Err(SimError::TurnLimitExceeded { limit });
                }
            }
        }
    }
}
