//! Condition algebra.
//!
//! Boolean predicates over a game, composed with explicit builder
//! methods instead of operators:
//!
//! ```
//! use ccg_montecarlo::cards::catalog;
//! use ccg_montecarlo::conditions::Condition;
//!
//! let stop = Condition::in_hand(catalog::zixor_prime())
//!     .or(Condition::playable(catalog::zixor()).and(Condition::TurnAtLeast(5)));
//! # let _ = stop;
//! ```

mod condition;

pub use condition::{Condition, CustomCondition, PredicateFn};
