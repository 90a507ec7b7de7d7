//! Packsort - Dispatch-stack classification for physical packages
//!
//! This crate provides the single decision rule a dispatch robot needs:
//! - Measurement validation for the four package inputs
//! - Bulky/heavy threshold predicates with fixed, build-time constants
//! - The [`classify`] entry point mapping a package to a handling [`Stack`]

pub mod classify;
pub mod error;
pub mod measure;
pub mod stack;


pub use classify::classify;
pub use error::{Result, SortError};
pub use measure::{Measurement, Param, BULKY_DIM, BULKY_VOLUME, HEAVY_MASS};
pub use stack::{ParseStackError, Stack};
