//! Game conditions.
//!
//! Conditions are pure predicates over a `Game`. They decide when a trial
//! stops (`Game::play_until`) and whether a card can be played.
//! `And` and `Or` short-circuit: the right operand is only evaluated when
//! the left one does not decide the result.

use std::sync::Arc;

use crate::cards::Card;
use crate::game::Game;

/// Signature of a caller-supplied predicate.
pub type PredicateFn = dyn Fn(&Game) -> bool + Send + Sync;

/// A named closure predicate.
#[derive(Clone)]
pub struct CustomCondition {
    name: String,
    predicate: Arc<PredicateFn>,
}

impl CustomCondition {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for CustomCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CustomCondition").field(&self.name).finish()
    }
}

/// A boolean predicate over game state.
#[derive(Clone, Debug)]
pub enum Condition {
    // === Atoms ===

    /// A card with this name is in hand.
    InHand(Card),

    /// Current mana covers the card's cost.
    EnoughMana(Card),

    /// Turn counter is at least N.
    TurnAtLeast(u32),

    /// Current mana is at least N.
    ManaAtLeast(i32),

    // === Combinators ===

    /// Both must hold. The right side is skipped if the left is false.
    And(Box<Condition>, Box<Condition>),

    /// Either must hold. The right side is skipped if the left is true.
    Or(Box<Condition>, Box<Condition>),

    /// Condition must be false.
    Not(Box<Condition>),

    // === Special ===

    Always,

    Never,

    /// Caller-supplied predicate.
    Custom(CustomCondition),
}

impl Condition {
    /// Create an in-hand condition.
    pub fn in_hand(card: Card) -> Self {
        Self::InHand(card)
    }

    /// Create an enough-mana condition.
    pub fn enough_mana(card: Card) -> Self {
        Self::EnoughMana(card)
    }

    /// `InHand(card) AND EnoughMana(card)`.
    pub fn playable(card: Card) -> Self {
        Self::InHand(card.clone()).and(Self::EnoughMana(card))
    }

    /// Create a condition from a closure.
    pub fn custom<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Game) -> bool + Send + Sync + 'static,
    {
        Self::Custom(CustomCondition {
            name: name.into(),
            predicate: Arc::new(predicate),
        })
    }

    /// Combine with AND.
    pub fn and(self, other: Condition) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Combine with OR.
    pub fn or(self, other: Condition) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Left-nested AND of all conditions. Empty input gives `Always`.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        conditions
            .into_iter()
            .reduce(Condition::and)
            .unwrap_or(Condition::Always)
    }

    /// Left-nested OR of all conditions. Empty input gives `Never`.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        conditions
            .into_iter()
            .reduce(Condition::or)
            .unwrap_or(Condition::Never)
    }

    /// Check the condition against a game.
    #[must_use]
    pub fn evaluate(&self, game: &Game) -> bool {
        match self {
            Condition::InHand(card) => game.in_hand(card),

            Condition::EnoughMana(card) => game.can_afford(card),

            Condition::TurnAtLeast(turn) => game.turn >= *turn,

            Condition::ManaAtLeast(mana) => game.mana >= *mana,

            Condition::And(a, b) => a.evaluate(game) && b.evaluate(game),

            Condition::Or(a, b) => a.evaluate(game) || b.evaluate(game),

            Condition::Not(inner) => !inner.evaluate(game),

            Condition::Always => true,

            Condition::Never => false,

            Condition::Custom(custom) => (custom.predicate)(game),
        }
    }
}
