//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
use log::debug;

use crate::algorithm::{OptimizationResult, PivotRuleKind, SolveError, SolverOptions};
use crate::algorithm::two_phase::phase_one::RankedFeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::standard_form::StandardForm;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// Solve a problem in standard form from scratch.
///
/// If the problem has artificial variables, the first phase finds a basic feasible solution.
/// Otherwise, the slack basis is feasible and the first phase is skipped.
///
/// # Errors
///
/// `CycleDetected` if the iteration limit is reached in either phase.
pub fn solve_relaxation<'provider>(
    provider: &'provider StandardForm,
    options: &SolverOptions,
) -> Result<OptimizationResult<Tableau<'provider>>, SolveError> {
    match options.pivot_rule {
        PivotRuleKind::Dantzig => solve_relaxation_with::<SteepestDescentAlongVariable>(provider, options),
        PivotRuleKind::Bland => solve_relaxation_with::<FirstProfitable>(provider, options),
    }
}

fn solve_relaxation_with<'provider, PR: PivotRule>(
    provider: &'provider StandardForm,
    options: &SolverOptions,
) -> Result<OptimizationResult<Tableau<'provider>>, SolveError> {
    let iteration_limit = options.iteration_limit_for(provider.nr_rows(), provider.nr_columns());
    let tableau = Tableau::new(provider, options.tolerance);

    let tableau = match tableau.kind() {
        Kind::Artificial => match phase_one::primal::<PR>(tableau, iteration_limit)? {
            RankedFeasibilityResult::Feasible { tableau, .. } => tableau,
            RankedFeasibilityResult::Infeasible => return Ok(OptimizationResult::Infeasible),
        },
        Kind::NonArtificial => {
            debug!("No artificial variables, skipping phase one");
            tableau
        },
    };

    phase_two::primal::<PR>(tableau, iteration_limit)
}

/// Solve a problem in standard form, starting from a given basis.
///
/// The basis is typically optimal for a problem that differs only in its right-hand side. It is
/// then dual feasible, and the dual Simplex method restores primal feasibility.
///
/// # Arguments
///
/// * `basis`: Column index of the basic variable of each row.
///
/// # Return value
///
/// `None` if the basis can't be used as a starting point: it doesn't fit the problem, is
/// singular, or is neither primal nor dual feasible. The caller should then solve from scratch.
///
/// # Errors
///
/// `CycleDetected` if the iteration limit is reached.
pub fn reoptimize<'provider>(
    provider: &'provider StandardForm,
    basis: &[usize],
    options: &SolverOptions,
) -> Result<Option<OptimizationResult<Tableau<'provider>>>, SolveError> {
    match options.pivot_rule {
        PivotRuleKind::Dantzig => reoptimize_with::<SteepestDescentAlongVariable>(provider, basis, options),
        PivotRuleKind::Bland => reoptimize_with::<FirstProfitable>(provider, basis, options),
    }
}

fn reoptimize_with<'provider, PR: PivotRule>(
    provider: &'provider StandardForm,
    basis: &[usize],
    options: &SolverOptions,
) -> Result<Option<OptimizationResult<Tableau<'provider>>>, SolveError> {
    let Some(tableau) = Tableau::new_with_basis(provider, basis, options.tolerance) else {
        debug!("Previous basis does not fit the problem");
        return Ok(None);
    };
    let iteration_limit = options.iteration_limit_for(provider.nr_rows(), provider.nr_columns());

    if tableau.is_primal_feasible() {
        debug!("Previous basis is primal feasible");
        phase_two::primal::<PR>(tableau, iteration_limit).map(Some)
    } else if tableau.is_dual_feasible() {
        debug!("Previous basis is dual feasible");
        phase_two::dual::<PR>(tableau, iteration_limit).map(Some)
    } else {
        debug!("Previous basis is neither primal nor dual feasible");
        Ok(None)
    }
}
