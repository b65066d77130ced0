//! Card filters for deck searches.

use serde::{Deserialize, Serialize};

use crate::cards::{Ability, Card, CardKind, Race};

/// Which cards a search may pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFilter {
    /// Every card matches.
    Any,
    Kind(CardKind),
    Race(Race),
    Ability(Ability),
    /// Card with exactly this name.
    Named(String),
    /// All filters must match.
    All(Vec<CardFilter>),
}

impl CardFilter {
    /// Combine filters with AND.
    pub fn all(filters: impl IntoIterator<Item = CardFilter>) -> Self {
        Self::All(filters.into_iter().collect())
    }

    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CardFilter::Any => true,
            CardFilter::Kind(kind) => card.kind() == *kind,
            CardFilter::Race(race) => card.race() == Some(*race),
            CardFilter::Ability(ability) => card.has_ability(*ability),
            CardFilter::Named(name) => card.name() == name,
            CardFilter::All(filters) => filters.iter().all(|f| f.matches(card)),
        }
    }
}
