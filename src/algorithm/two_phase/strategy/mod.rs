//! # Strategies
//!
//! Decisions made while moving from basis to basis.
pub mod pivot_rule;
