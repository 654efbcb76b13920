//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod analysis;

pub use analysis::{AnalyzeVideoCommand, AnalyzeVideoHandler};
