//! # Phase one: finding a basic feasible solution
//!
//! The sum of the artificial variables is minimized. If that sum can be reduced to zero, the
//! basis that remains, after pivoting out the artificial variables that are still basic at zero
//! level, is a basic feasible solution of the original problem.
use log::debug;

use crate::algorithm::SolveError;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::number_types::numerical_precision::{is_positive, is_zero};

/// Drive the sum of the artificial variables to zero.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau, its basis made up of slack and artificial columns.
/// * `iteration_limit`: Maximum number of pivots.
///
/// # Return value
///
/// `Infeasible` when the sum stays positive, otherwise a tableau for phase two together with the
/// rows that turned out to be redundant.
///
/// # Errors
///
/// `CycleDetected` if the iteration limit is reached.
pub(crate) fn primal<PR: PivotRule>(
    mut tableau: Tableau,
    iteration_limit: usize,
) -> Result<RankedFeasibilityResult, SolveError> {
    debug_assert_eq!(tableau.kind(), Kind::Artificial);

    let mut rule = PR::new();
    let mut iterations = 0;
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(&tableau));

        match rule.select_primal_pivot_column(&tableau) {
            Some((column_index, _cost)) => {
                if iterations >= iteration_limit {
                    return Err(SolveError::CycleDetected { iterations });
                }

                let column = tableau.generate_column(column_index);
                match rule.select_primal_pivot_row(&tableau, column_index, &column) {
                    Some(row_index) => {
                        let degenerate = is_zero(tableau.constraint_value(row_index), tableau.epsilon());
                        tableau.bring_into_basis(column_index, row_index);
                        rule.after_pivot(degenerate);
                    },
                    None => {
                        // The artificial cost is bounded below by zero, so the column only looks
                        // profitable because of rounding. The cost left decides feasibility.
                        debug!("Phase one column {} has no pivot row, stopping", column_index);
                        break;
                    },
                }
                iterations += 1;
            },
            None => break,
        }
    }

    let artificial_cost = tableau.objective_function_value();
    debug!("Phase one finished after {} iterations, artificial cost {}", iterations, artificial_cost);

    if is_positive(artificial_cost, tableau.epsilon()) {
        return Ok(RankedFeasibilityResult::Infeasible);
    }

    let rank = if tableau.has_artificial_in_basis() {
        let redundant = remove_artificial_basis_variables(&mut tableau);
        if redundant.is_empty() {
            Rank::Full
        } else {
            debug!("Removing redundant rows {:?}", redundant);
            tableau.remove_rows(&redundant);
            Rank::Deficient(redundant)
        }
    } else {
        Rank::Full
    };

    Ok(RankedFeasibilityResult::Feasible {
        rank,
        tableau: tableau.into_non_artificial(),
    })
}

/// Outcome of phase one.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult<'provider> {
    /// The problem is feasible and the tableau is ready for the second phase.
    Feasible {
        /// Whether rows were removed.
        rank: Rank,
        /// Non-artificial tableau with a basic feasible solution.
        tableau: Tableau<'provider>,
    },
    /// The artificial cost could not be reduced to zero.
    Infeasible,
}

/// Whether the constraint rows are linearly independent.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// All rows were kept.
    Full,
    /// Indices of the rows that were removed, in increasing order.
    Deficient(Vec<usize>),
}

/// Pivot artificial columns that are still basic (at value zero) out of the basis.
///
/// A row in which no non-artificial column has a nonzero entry is a linear combination of the
/// other rows. Such rows are returned, in increasing order, and left untouched.
fn remove_artificial_basis_variables(tableau: &mut Tableau) -> Vec<usize> {
    let mut redundant = Vec::new();

    for pivot_row in tableau.artificial_basis_rows() {
        debug_assert!(is_zero(tableau.constraint_value(pivot_row), tableau.epsilon()));

        let pivot_column = (0..tableau.nr_eligible_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| tableau.generate_element(pivot_row, j).abs() > tableau.pivot_tolerance(j));

        if let Some(pivot_column) = pivot_column {
            tableau.bring_into_basis(pivot_column, pivot_row);
        } else {
            redundant.push(pivot_row);
        }
    }

    debug_assert!(redundant.is_sorted());
    redundant
}
