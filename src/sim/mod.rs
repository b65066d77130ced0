//! Monte Carlo harness.
//!
//! ## Key Types
//!
//! - `ParamGrid`: Named parameters and their candidate values
//! - `Combination`: One assignment per parameter, handed to the simulation
//! - `Harness`: Runs N trials per combination, optionally on rayon
//! - `Report`: Median, mean and sample stdev per combination, printable
//!   as a table

mod harness;
mod params;
mod report;
pub mod stats;
mod table;

pub use harness::{run, Harness};
pub use params::{Combination, ParamGrid, ParamValue};
pub use report::{Report, ReportRow};
pub use stats::{mean, median, median_grouped, stdev, Summary};
pub use table::{Align, Table};
