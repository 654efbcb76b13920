//! Domain layer containing the throw analysis logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, error types)
//! - `kinematics` - Pure throw metrics and coaching rules over landmark frames

pub mod foundation;
pub mod kinematics;
