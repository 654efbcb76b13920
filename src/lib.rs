//! Throw Analyzer - Throwing mechanics from pose landmark sequences
//!
//! This crate turns per-frame body landmarks of a throwing motion into a small
//! set of kinematic metrics (hip-shoulder separation, reachback, elbow peak
//! timing, wrist speed at release) and a single coaching tip.
//!
//! The kinematics core in [`domain::kinematics`] is pure; landmark extraction
//! and upload storage sit behind the traits in [`ports`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
