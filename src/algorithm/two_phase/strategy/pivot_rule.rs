//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::SparseTuple;
use crate::data::number_types::numerical_precision::is_negative;

/// Chooses the entering column, and possibly the leaving row, of each primal pivot.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. By default, that
/// is the row with the smallest ratio, ties broken by the lowest row index.
pub trait PivotRule {
    /// Rule state at the start of a phase.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column index and its relative cost, or `None` if no column has a negative relative
    /// cost (the current basis is optimal).
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<SparseTuple<f64>>;

    /// Row selection rule for the primal Simplex method, given the column.
    fn select_primal_pivot_row(&self, tableau: &Tableau, column_index: usize, column: &[f64]) -> Option<usize> {
        tableau.select_primal_pivot_row(column_index, column)
    }

    /// Called after every primal pivot.
    ///
    /// # Arguments
    ///
    /// * `degenerate`: Whether the leaving variable had value zero, so that the solution did not
    /// move.
    fn after_pivot(&mut self, _degenerate: bool) {}
}

/// Candidates to enter the basis: non basic, non artificial columns with a negative relative cost.
fn profitable_columns<'a>(tableau: &'a Tableau) -> impl Iterator<Item = SparseTuple<f64>> + 'a {
    (0..tableau.nr_eligible_columns())
        .filter(|&column| !tableau.is_in_basis(column))
        .map(|column| (column, tableau.relative_cost(column)))
        .filter(|&(_, cost)| is_negative(cost, tableau.epsilon()))
}

/// Enter the lowest indexed column with a negative relative cost.
///
/// Together with breaking ties in the ratio test by the lowest leaving column index, this is
/// Bland's rule, which never cycles.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<SparseTuple<f64>> {
        profitable_columns(tableau).next()
    }

    fn select_primal_pivot_row(&self, tableau: &Tableau, column_index: usize, column: &[f64]) -> Option<usize> {
        tableau.select_primal_pivot_row_bland(column_index, column)
    }
}

/// Number of consecutive degenerate pivots after which Dantzig's rule gives way to Bland's.
const MAX_DEGENERATE_PIVOTS: usize = 20;

/// Enter the column with the most negative relative cost.
///
/// Ties are broken by the lowest column index. This is Dantzig's rule. It can cycle on degenerate
/// problems, so after a run of `MAX_DEGENERATE_PIVOTS` degenerate pivots, Bland's rule is followed
/// until the solution moves again.
pub struct SteepestDescentAlongVariable {
    degenerate_pivots: usize,
}
impl SteepestDescentAlongVariable {
    fn is_stalling(&self) -> bool {
        self.degenerate_pivots >= MAX_DEGENERATE_PIVOTS
    }
}
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self { degenerate_pivots: 0 }
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<SparseTuple<f64>> {
        if self.is_stalling() {
            profitable_columns(tableau).next()
        } else {
            profitable_columns(tableau).min_by(|(_, left), (_, right)| left.total_cmp(right))
        }
    }

    fn select_primal_pivot_row(&self, tableau: &Tableau, column_index: usize, column: &[f64]) -> Option<usize> {
        if self.is_stalling() {
            tableau.select_primal_pivot_row_bland(column_index, column)
        } else {
            tableau.select_primal_pivot_row(column_index, column)
        }
    }

    fn after_pivot(&mut self, degenerate: bool) {
        if degenerate {
            self.degenerate_pivots += 1;
        } else {
            self.degenerate_pivots = 0;
        }
    }
}
