//! # Phase two: improving a basic feasible solution
use log::debug;

use crate::algorithm::{OptimizationResult, SolveError};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::number_types::numerical_precision::is_zero;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
///
/// # Errors
///
/// `CycleDetected` if the iteration limit is reached.
pub(crate) fn primal<PR: PivotRule>(
    mut tableau: Tableau,
    iteration_limit: usize,
) -> Result<OptimizationResult<Tableau>, SolveError> {
    debug_assert_eq!(tableau.kind(), Kind::NonArtificial);

    let mut rule = PR::new();
    let mut iterations = 0;
    let result = loop {
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
                    None => break OptimizationResult::Unbounded,
                }
                iterations += 1;
            },
            None => break OptimizationResult::FiniteOptimum(tableau),
        }
    };

    debug!("Phase two finished after {} iterations", iterations);
    Ok(result)
}

/// Restores primal feasibility of a dual feasible basis, and then optimizes.
///
/// Used when the right-hand side changed after a previous solve: the previous optimal basis is
/// still dual feasible, but some basic variables may have become negative. The dual Simplex method
/// keeps the relative costs non-negative while removing the negative values from the basis.
///
/// # Arguments
///
/// * `tableau`: Non-artificial, dual feasible tableau.
/// * `iteration_limit`: Maximum number of pivots, for each of the dual and primal stage.
///
/// # Return value
///
/// `Infeasible` if a row with a negative value can't be repaired. Otherwise, the result of the
/// primal Simplex method started from the repaired basis.
///
/// # Errors
///
/// `CycleDetected` if the iteration limit is reached.
pub(crate) fn dual<PR: PivotRule>(
    mut tableau: Tableau,
    iteration_limit: usize,
) -> Result<OptimizationResult<Tableau>, SolveError> {
    debug_assert_eq!(tableau.kind(), Kind::NonArtificial);
    debug_assert!(tableau.is_dual_feasible());

    let mut iterations = 0;
    while let Some(row_index) = tableau.select_dual_pivot_row() {
        if iterations >= iteration_limit {
            return Err(SolveError::CycleDetected { iterations });
        }

        match tableau.select_dual_pivot_column(row_index) {
            Some(column_index) => tableau.bring_into_basis(column_index, row_index),
            None => {
                debug!("Dual Simplex found row {} to be infeasible after {} iterations", row_index, iterations);
                return Ok(OptimizationResult::Infeasible);
            },
        }
        iterations += 1;
    }
    debug!("Dual Simplex restored feasibility after {} iterations", iterations);

    // Relative costs may have picked up noise, clean up with the primal method
    primal::<PR>(tableau, iteration_limit)
}
