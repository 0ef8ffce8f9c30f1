//! # Number types
//!
//! All computations are done in `f64`. Rounding errors are absorbed by the tolerance helpers in
//! this module.
pub mod numerical_precision;
