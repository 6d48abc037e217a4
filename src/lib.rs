//! Territory engine library.
//!
//! Exposes the toroidal board model, location heuristics, per-cell decision
//! rules, configuration, and protocol codec for use by the binary entry
//! point, integration tests, and benchmarks.

pub mod board;
pub mod config;
pub mod decision;
pub mod engine;
pub mod eval;
pub mod protocol;
