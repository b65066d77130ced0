//! Card registry for lookup by name.
//!
//! The `CardRegistry` holds the catalog a simulation draws its decks from.

use rustc_hash::FxHashMap;

use super::attributes::CardKind;
use super::definition::Card;
use crate::core::{Result, SimError};

/// Registry of cards keyed by name.
///
/// ## Example
///
/// ```
/// use ccg_montecarlo::cards::{Card, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::minion("Wisp", 0));
///
/// let found = registry.get("Wisp").unwrap();
/// assert_eq!(found.mana(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(card.name()) {
            panic!("Card {:?} already registered", card.name());
        }
        self.cards.insert(card.name().to_string(), card);
    }

    /// Get a card by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.get(name)
    }

    /// Get a copy of a card by name, failing with `UnknownCard`.
    pub fn lookup(&self, name: &str) -> Result<Card> {
        self.cards.get(name).cloned().ok_or_else(|| SimError::UnknownCard {
            name: name.to_string(),
        })
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.kind() == kind)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
