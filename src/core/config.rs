//! Configuration types.
//!
//! - `GameConfig`: Rules constants for a single simulated playthrough
//! - `SimConfig`: How the Monte Carlo harness runs trials
//!
//! Both are plain serde structs so experiments can be described in JSON.

use serde::{Deserialize, Serialize};

/// Rules constants for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards drawn before the mulligan.
    pub starting_hand_size: usize,

    /// Upper bound for `max_mana`. Values below 0 act as 0.
    pub max_mana_cap: i32,

    /// Starting health. Reserved for effects, the engine never changes it.
    pub starting_health: i32,

    /// Give up after this many turns in `play_until` (None = never).
    pub turn_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 3,
            max_mana_cap: 10,
            starting_health: 30,
            turn_limit: None,
        }
    }
}

impl GameConfig {
    /// Set the opening hand size.
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the mana cap. Negative caps are raised to 0.
    pub fn with_max_mana_cap(mut self, cap: i32) -> Self {
        self.max_mana_cap = cap.max(0);
        self
    }

    /// Set a turn limit for `play_until`.
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = Some(limit);
        self
    }
}

/// Which median the harness reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedianMethod {
    /// Middle value, or mean of the two middle values.
    Middle,
    /// Median of grouped continuous data with class width 1.
    #[default]
    Grouped,
}

/// Harness configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Trials per parameter combination. Must be at least 2.
    pub trials: usize,

    /// Base seed. `None` seeds from entropy, so runs differ.
    pub seed: Option<u64>,

    /// Run the trials of each combination on the rayon pool.
    pub parallel: bool,

    /// Median flavour reported in the summary.
    pub median: MedianMethod,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: None,
            parallel: false,
            median: MedianMethod::default(),
        }
    }
}

impl SimConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials per combination.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Fix the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Toggle parallel trials.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Choose the median flavour.
    pub fn with_median(mut self, median: MedianMethod) -> Self {
        self.median = median;
        self
    }
}
