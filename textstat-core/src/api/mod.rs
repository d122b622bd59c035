//! Public analysis API
//!
//! This module provides the interface callers use: hand over a document's
//! lines, get back the sequential and chunked statistics records together
//! with how long each pass took.

mod analyzer;
mod config;
mod error;
mod input;
mod output;


pub use analyzer::{analyze_concurrent, analyze_sequential, TextAnalyzer};
pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::{split_lines, Input};
pub use output::{Analysis, AnalysisMode, Comparison, ComparisonReport};
