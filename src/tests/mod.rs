//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const MODEL_LITERAL_STRING`
//! * `fn general_form()`
//! * `fn standard_form()`
pub mod problem_1;
