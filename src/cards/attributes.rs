//! Classification tags for cards.
//!
//! Tags carry no engine behaviour. Effects use them to search the deck
//! (e.g. "a random Beast minion").

use serde::{Deserialize, Serialize};

/// Minion or spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Minion,
    Spell,
}

/// Minion tribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Beast,
    Demon,
    Dragon,
    Elemental,
    Mech,
    Murloc,
    Pirate,
    Totem,
}

/// Keyword abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Charge,
    DivineShield,
    Lifesteal,
    Poisonous,
    Rush,
    Stealth,
    Taunt,
    Windfury,
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Race::Beast.to_string(), "Beast");
        assert_eq!(Ability::Rush.to_string(), "Rush");
    }

    #[test]
    fn test_tag_serialization() {
        let json = serde_json::to_string(&(CardKind::Minion, Race::Beast, Ability::Rush)).unwrap();
        let back: (CardKind, Race, Ability) = serde_json::from_str(&json).unwrap();
        assert_eq!(back, (CardKind::Minion, Race::Beast, Ability::Rush));
    }
}
