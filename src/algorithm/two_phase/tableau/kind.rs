//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They can be used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! Both kinds share the same matrix; they differ only in the cost row.
use std::fmt;

use crate::data::linear_program::standard_form::StandardForm;

/// Whether the tableau is in the first or the second phase of the two-phase algorithm.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    /// The cost of each artificial variable is one, all other costs are zero.
    ///
    /// Minimizing this cost finds a basic feasible solution of the original problem, if one
    /// exists.
    Artificial,
    /// The cost of the original problem; artificial variables cost nothing but may never enter
    /// the basis.
    NonArtificial,
}

impl Kind {
    /// Cost of every column of the standard form for this kind of tableau.
    pub fn initial_cost(self, provider: &StandardForm) -> Vec<f64> {
        match self {
            Kind::Artificial => (0..provider.nr_columns())
                .map(|j| if provider.is_artificial(j) { 1_f64 } else { 0_f64 })
                .collect(),
            Kind::NonArtificial => provider.cost().to_vec(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Artificial => "artificial",
            Kind::NonArtificial => "non-artificial",
        })
    }
}
