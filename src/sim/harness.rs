//! The Monte Carlo driver.
//!
//! For every combination of a `ParamGrid` the harness calls the
//! simulation function `trials` times, each call with its own RNG stream,
//! and summarizes the returned numbers.
//!
//! ## Seeding
//!
//! A run has one base seed (configured, or drawn from entropy). The RNG
//! for trial `t` of combination `c` is `base.stream(c).stream(t)`, so a
//! seeded run gives the same report whether trials run sequentially or on
//! the rayon pool, and regardless of thread scheduling.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::{GameRng, Result, SimConfig, SimError};

use super::params::{Combination, ParamGrid};
use super::report::Report;
use super::stats::Summary;

/// Runs simulations over a parameter grid.
#[derive(Clone, Debug, Default)]
pub struct Harness {
    config: SimConfig,
}

impl Harness {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run `simulate` `trials` times per combination and summarize.
    ///
    /// Fails before running anything if the grid is invalid or `trials`
    /// is below two. The first error returned by `simulate` aborts the run.
    ///
    /// ## Example
    ///
    /// ```
    /// use ccg_montecarlo::core::SimConfig;
    /// use ccg_montecarlo::sim::{Harness, ParamGrid};
    ///
    /// let grid = ParamGrid::new().param("x", [1, 2]);
    /// let harness = Harness::new(SimConfig::new().with_trials(5).with_seed(3));
    ///
    /// let report = harness
    ///     .run(&grid, |combo, _rng| Ok(combo.float("x")? * 2.0))
    ///     .unwrap();
    ///
    /// assert_eq!(report.rows()[1].summary.mean, 4.0);
    /// ```
    pub fn run<F, T>(&self, grid: &ParamGrid, simulate: F) -> Result<Report>
    where
        F: Fn(&Combination, &mut GameRng) -> Result<T> + Sync,
        T: Into<f64>,
    {
        let trials = self.config.trials;
        if trials < 2 {
            return Err(SimError::InsufficientSamples { got: trials });
        }
        grid.validate()?;

        let combos = grid.expand();

        let base = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        info!(
            combinations = combos.len(),
            trials,
            seed = base.seed(),
            parallel = self.config.parallel,
            "starting simulation"
        );

        let mut report = Report::new(grid.names());
        for (ci, combo) in combos.into_iter().enumerate() {
            let combo_rng = base.stream(ci as u64);
            let samples = self.samples(&combo, &combo_rng, &simulate)?;
            let summary = Summary::from_samples(&samples, self.config.median)?;

            debug!(
                combination = %combo,
                median = summary.median,
                mean = summary.mean,
                stdev = summary.stdev,
                "combination done"
            );
            report.push(combo, summary);
        }

        Ok(report)
    }

    fn samples<F, T>(&self, combo: &Combination, combo_rng: &GameRng, simulate: &F) -> Result<Vec<f64>>
    where
        F: Fn(&Combination, &mut GameRng) -> Result<T> + Sync,
        T: Into<f64>,
    {
        let trial = |t: usize| -> Result<f64> {
            let mut rng = combo_rng.stream(t as u64);
            simulate(combo, &mut rng).map(Into::into)
        };

        if self.config.parallel {
            (0..self.config.trials).into_par_iter().map(trial).collect()
        } else {
            (0..self.config.trials).map(trial).collect()
        }
    }
}

/// Run `simulate` `n` times per combination of `grid`, sequentially and
/// with an entropy seed.
pub fn run<F, T>(simulate: F, n: usize, grid: &ParamGrid) -> Result<Report>
where
    F: Fn(&Combination, &mut GameRng) -> Result<T> + Sync,
    T: Into<f64>,
{
    Harness::new(SimConfig::new().with_trials(n)).run(grid, simulate)
}
