//! The card catalog.
//!
//! Concrete cards with their effects bound at construction. Each function
//! builds a fresh handle; since cards are compared by name, repeated calls
//! give interchangeable cards.

use super::attributes::{Ability, CardKind, Race};
use super::definition::Card;
use super::registry::CardRegistry;
use crate::effects::{CardFilter, Effect};

pub const ANGRY_CHICKEN: &str = "Angry Chicken";
pub const DIVING_GRYPHON: &str = "Diving Gryphon";
pub const FRIZZ_KINDLEROOST: &str = "Frizz Kindleroost";
pub const SCALERIDER: &str = "Scalerider";
pub const WISP: &str = "Wisp";
pub const ZIXOR: &str = "Zixor, Apex Predator";
pub const ZIXOR_PRIME: &str = "Zixor Prime";
pub const SCAVENGERS_INGENUITY: &str = "Scavenger's Ingenuity";
pub const TRACKING: &str = "Tracking";

pub fn angry_chicken() -> Card {
    Card::minion(ANGRY_CHICKEN, 2)
}

/// Battlecry: draw a Rush minion from the deck.
pub fn diving_gryphon() -> Card {
    Card::minion(DIVING_GRYPHON, 4)
        .with_race(Race::Beast)
        .with_ability(Ability::Rush)
        .with_effect(Effect::Tutor(CardFilter::all([
            CardFilter::Kind(CardKind::Minion),
            CardFilter::Ability(Ability::Rush),
        ])))
}

pub fn frizz_kindleroost() -> Card {
    Card::minion(FRIZZ_KINDLEROOST, 4)
}

pub fn scalerider() -> Card {
    Card::minion(SCALERIDER, 3)
}

pub fn wisp() -> Card {
    Card::minion(WISP, 0)
}

/// Shuffles Zixor Prime into the deck when played.
pub fn zixor() -> Card {
    Card::minion(ZIXOR, 3)
        .with_race(Race::Beast)
        .with_ability(Ability::Rush)
        .with_effect(Effect::ShuffleIn(zixor_prime()))
}

pub fn zixor_prime() -> Card {
    Card::minion(ZIXOR_PRIME, 8)
        .with_race(Race::Beast)
        .with_ability(Ability::Rush)
}

/// Draw a Beast minion from the deck.
pub fn scavengers_ingenuity() -> Card {
    Card::spell(SCAVENGERS_INGENUITY, 2).with_effect(Effect::Tutor(CardFilter::all([
        CardFilter::Kind(CardKind::Minion),
        CardFilter::Race(Race::Beast),
    ])))
}

/// Look at the top three cards, keep one, discard the rest.
///
/// The first `wishlist` entry found among the three is kept; otherwise a
/// random one of them.
pub fn tracking(wishlist: impl IntoIterator<Item = Card>) -> Card {
    Card::spell(TRACKING, 1).with_effect(Effect::Track {
        wishlist: wishlist.into_iter().collect(),
    })
}

/// Registry with every catalog card. Tracking is registered with an empty
/// wishlist.
pub fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for card in [
        angry_chicken(),
        diving_gryphon(),
        frizz_kindleroost(),
        scalerider(),
        wisp(),
        zixor(),
        zixor_prime(),
        scavengers_ingenuity(),
        tracking([]),
    ] {
        registry.register(card);
    }
    registry
}
