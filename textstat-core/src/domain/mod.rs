//! Domain layer for line-oriented text statistics
//!
//! This module contains the pure counting logic and the monoid structure
//! that lets partial results from independent chunks be merged.

pub mod classifier;
pub mod monoid;
pub mod stats;

pub use classifier::*;
pub use monoid::*;
pub use stats::*;
