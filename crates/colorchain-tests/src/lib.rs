//! # colorchain-tests
//!
//! Parity and property testing for colorchain.
//!
//! This crate provides:
//! - Deterministic sample sets (grids, seeded random colors, named swatches)
//! - An independent reference chain built on `palette`
//! - deltaE statistics for comparing LAB outputs
//!
//! ## Test Categories
//!
//! 1. **Known values**: fixed scenarios with published LAB/LCH results
//! 2. **Palette parity**: every sample against the reference chain
//! 3. **Round trips**: property tests for each reversible hop
//! 4. **Wrapper**: `Color` setters, getters and failure atomicity

pub mod accuracy;
pub mod reference;
pub mod samples;

pub use accuracy::{DeltaEStats, compare_lab, delta_e_76};
pub use samples::SampleSet;
