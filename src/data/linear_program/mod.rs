//! # Representing linear programs
//!
//! This module contains different representations of linear programs. Linear programs in general
//! form may contain any type of constraint, while linear programs in standard form contain
//! equality constraints only, with a non-negative right-hand side.
pub mod elements;
pub mod general_form;
pub mod solution;
pub mod standard_form;
