//! Ready-made simulation functions for the harness.
//!
//! Each experiment reads its inputs from a `Combination` and returns one
//! number per trial, so it can be handed straight to `Harness::run`.

pub mod rush_hunter;
