//! The `Card` value type.
//!
//! A card is immutable once built. Cloning a card is cheap (it is a shared
//! handle), and the engine only ever moves these handles between deck and
//! hand.
//!
//! ## Identity
//!
//! Cards are identified by name. Two separately built cards named "Wisp"
//! compare equal, hash equal, and are interchangeable for hand membership,
//! removal and wishlist matching.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smallvec::SmallVec;

use super::attributes::{Ability, CardKind, Race};
use crate::effects::Effect;

#[derive(Clone, Debug)]
struct CardData {
    name: String,
    mana: u32,
    kind: CardKind,
    race: Option<Race>,
    abilities: SmallVec<[Ability; 2]>,
    effect: Option<Effect>,
}

/// A playable card.
///
/// ## Example
///
/// ```
/// use ccg_montecarlo::cards::{Ability, Card, Race};
///
/// let gryphon = Card::minion("Diving Gryphon", 4)
///     .with_race(Race::Beast)
///     .with_ability(Ability::Rush);
///
/// assert_eq!(gryphon.mana(), 4);
/// assert!(gryphon.has_ability(Ability::Rush));
/// assert_eq!(gryphon, Card::minion("Diving Gryphon", 0));
/// ```
#[derive(Clone)]
pub struct Card {
    data: Arc<CardData>,
}

impl Card {
    fn new(name: impl Into<String>, mana: u32, kind: CardKind) -> Self {
        Self {
            data: Arc::new(CardData {
                name: name.into(),
                mana,
                kind,
                race: None,
                abilities: SmallVec::new(),
                effect: None,
            }),
        }
    }

    /// Create a minion card.
    #[must_use]
    pub fn minion(name: impl Into<String>, mana: u32) -> Self {
        Self::new(name, mana, CardKind::Minion)
    }

    /// Create a spell card.
    #[must_use]
    pub fn spell(name: impl Into<String>, mana: u32) -> Self {
        Self::new(name, mana, CardKind::Spell)
    }

    /// Set the race (builder pattern).
    #[must_use]
    pub fn with_race(mut self, race: Race) -> Self {
        Arc::make_mut(&mut self.data).race = Some(race);
        self
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        let data = Arc::make_mut(&mut self.data);
        if !data.abilities.contains(&ability) {
            data.abilities.push(ability);
        }
        self
    }

    /// Attach the effect run when the card is played.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        Arc::make_mut(&mut self.data).effect = Some(effect);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Mana cost.
    #[must_use]
    pub fn mana(&self) -> u32 {
        self.data.mana
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.data.kind
    }

    #[must_use]
    pub fn is_minion(&self) -> bool {
        self.data.kind == CardKind::Minion
    }

    #[must_use]
    pub fn race(&self) -> Option<Race> {
        self.data.race
    }

    #[must_use]
    pub fn abilities(&self) -> &[Ability] {
        &self.data.abilities
    }

    #[must_use]
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.data.abilities.contains(&ability)
    }

    /// Effect run on play, if any.
    #[must_use]
    pub fn effect(&self) -> Option<&Effect> {
        self.data.effect.as_ref()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.data.name == other.data.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.name.hash(state);
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data.name)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data.name)
    }
}
