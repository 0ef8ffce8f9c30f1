//! # Linear algebra primitives
//!
//! The tableau is dense; only the model description uses a sparse representation.

/// A single value of a sparse vector: `(index, value)`.
pub type SparseTuple<F> = (usize, F);
