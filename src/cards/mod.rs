//! Card system: the card value type, tags, registry and catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable, name-identified card handle
//! - `CardKind`, `Race`, `Ability`: Classification tags
//! - `CardRegistry`: Lookup by name
//! - `catalog`: The concrete card set with bound effects

pub mod attributes;
pub mod catalog;
pub mod definition;
pub mod registry;

pub use attributes::{Ability, CardKind, Race};
pub use definition::Card;
pub use registry::CardRegistry;
