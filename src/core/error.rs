//! Error types for simulations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("card not in hand: {card}")]
    CardNotInHand { card: String },

    #[error("card {card} costs {cost}, more than any mana pool holds")]
    ManaCost { card: String, cost: u32 },

    #[error("unknown card: {name}")]
    UnknownCard { name: String },

    #[error("standard deviation needs at least 2 samples, got {got}")]
    InsufficientSamples { got: usize },

    #[error("parameter '{name}' has no candidate values")]
    EmptyParameter { name: String },

    #[error("parameter '{name}' given twice")]
    DuplicateParameter { name: String },

    #[error("parameter '{name}' not bound")]
    MissingParameter { name: String },

    #[error("parameter '{name}' is not a {expected}")]
    ParameterType { name: String, expected: &'static str },

    #[error("stopping condition not reached within {limit} turns")]
    TurnLimitExceeded { limit: u32 },
}

pub type Result<T> = std::result::Result<T, SimError>;
