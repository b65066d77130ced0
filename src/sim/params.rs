//! Parameter grids and their combinations.
//!
//! A `ParamGrid` maps parameter names to candidate values, in insertion
//! order. `expand` yields the cartesian product: the first parameter
//! varies slowest, the last fastest.
//!
//! ## ParamValue Types
//!
//! - `Int`: Counts (copies of a card in the deck)
//! - `Float`: Ratios
//! - `Text`: Labels (deck or strategy names)
//! - `Bool`: Switches (mulligan on/off)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Result, SimError};

/// A candidate value for a parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl ParamValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Ints are widened to floats.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// `Int` or `Float`, whatever the text form looks like.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, ParamValue::Int(_) | ParamValue::Float(_))
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Text(v) => f.write_str(v),
            ParamValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One full assignment of values to every grid parameter, in grid order.
///
/// Passed to the simulation function, which reads its inputs with the
/// typed getters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    bindings: SmallVec<[(String, ParamValue); 4]>,
}

impl Combination {
    /// Create an empty combination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.bindings.push((name.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// (name, value) pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.bindings.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.bindings.iter().map(|(_, v)| v)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    fn require(&self, name: &str) -> Result<&ParamValue> {
        self.get(name).ok_or_else(|| SimError::MissingParameter {
            name: name.to_string(),
        })
    }

    pub fn int(&self, name: &str) -> Result<i64> {
        self.require(name)?.as_int().ok_or_else(|| type_error(name, "integer"))
    }

    /// A non-negative integer, as `usize`.
    pub fn count(&self, name: &str) -> Result<usize> {
        usize::try_from(self.int(name)?).map_err(|_| type_error(name, "non-negative integer"))
    }

    pub fn float(&self, name: &str) -> Result<f64> {
        self.require(name)?.as_float().ok_or_else(|| type_error(name, "number"))
    }

    pub fn text(&self, name: &str) -> Result<&str> {
        self.require(name)?.as_text().ok_or_else(|| type_error(name, "string"))
    }

    pub fn bool(&self, name: &str) -> Result<bool> {
        self.require(name)?.as_bool().ok_or_else(|| type_error(name, "boolean"))
    }
}

fn type_error(name: &str, expected: &'static str) -> SimError {
    SimError::ParameterType {
        name: name.to_string(),
        expected,
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// Named parameters with ordered candidate values.
///
/// ## Example
///
/// ```
/// use ccg_montecarlo::sim::ParamGrid;
///
/// let grid = ParamGrid::new()
///     .param("n_gryphons", [0, 1, 2])
///     .param("mulligan", [false, true]);
///
/// let combos = grid.expand();
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[1].to_string(), "n_gryphons=0, mulligan=true");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamGrid {
    params: Vec<(String, Vec<ParamValue>)>,
}

impl ParamGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter (builder pattern).
    #[must_use]
    pub fn param<V: Into<ParamValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.params
            .push((name.into(), values.into_iter().map(Into::into).collect()));
        self
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    /// Number of combinations `expand` yields.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.params.iter().map(|(_, values)| values.len()).product()
    }

    /// Reject duplicate names and parameters without values.
    pub fn validate(&self) -> Result<()> {
        for (i, (name, values)) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|(other, _)| other == name) {
                return Err(SimError::DuplicateParameter { name: name.clone() });
            }
            if values.is_empty() {
                return Err(SimError::EmptyParameter { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Cartesian product of all parameters.
    ///
    /// An empty grid yields a single empty combination; a parameter with no
    /// values yields none.
    #[must_use]
    pub fn expand(&self) -> Vec<Combination> {
        let mut combos = vec![Combination::new()];

        for (name, values) in &self.params {
            let mut next = Vec::with_capacity(combos.len() * values.len());
            for combo in &combos {
                for value in values {
                    next.push(combo.clone().with(name.clone(), value.clone()));
                }
            }
            combos = next;
        }

        combos
    }
}
