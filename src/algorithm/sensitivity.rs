//! # Sensitivity analysis
//!
//! Derives shadow prices and slacks from an optimal tableau, and evaluates changes of the
//! right-hand side by solving again.
//!
//! The shadow price of a constraint is the change of the optimal objective value, in the direction
//! of the model, per unit increase of its right-hand side. For a maximization problem, it is
//! non-negative for a `<=` constraint and non-positive for a `>=` constraint. For a minimization
//! problem, these signs are reversed.
use std::fmt;

use log::{debug, info};

use crate::algorithm::{report, solve_with_options, SolveError, SolverOptions};
use crate::algorithm::two_phase::reoptimize;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearModel;
use crate::data::linear_program::solution::{ConstraintReport, SolveResult};
use crate::data::linear_program::standard_form::normalize;
use crate::data::number_types::numerical_precision::{close_heuristic_fraction, snap_to_zero};

/// Shadow price and slack of every constraint of the model.
///
/// # Arguments
///
/// * `tableau`: Optimal, non-artificial tableau of the standard form of `model`.
/// * `model`: Model that was solved.
///
/// # Return value
///
/// A report for each constraint, ordered by index. Constraints that were removed as redundant
/// have a shadow price of zero.
pub fn analyze(tableau: &Tableau, model: &LinearModel) -> Vec<ConstraintReport> {
    let provider = tableau.provider();
    let epsilon = tableau.epsilon();
    let bfs = tableau.current_bfs();
    let sense_sign = model.sense().minimization_sign();

    (0..model.nr_constraints())
        .map(|i| {
            let info = provider.row_info(i);

            let shadow_price = match (tableau.row_for_constraint(i), info.slack.or(info.artificial)) {
                (Some(_), Some(column)) => {
                    // Dual value of the minimization problem in standard form
                    let dual = -info.auxiliary_sign() * tableau.relative_cost(column);
                    let flip_sign = if info.flipped { -1_f64 } else { 1_f64 };
                    sense_sign * flip_sign * dual
                },
                _ => 0_f64,
            };
            let slack = info.slack.map_or(0_f64, |column| bfs[column]);

            ConstraintReport {
                name: model.constraint_name(i),
                shadow_price: clean(shadow_price, epsilon),
                slack: clean(slack, epsilon),
            }
        })
        .collect()
}

fn clean(value: f64, epsilon: f64) -> f64 {
    snap_to_zero(close_heuristic_fraction(value, epsilon), epsilon)
}

/// Whether `current` is strictly better than `previous`, in the direction of the model.
pub fn is_viable(previous: f64, current: f64, sense: Objective) -> bool {
    sense.is_strict_improvement(previous, current)
}

/// Effect of a change of the right-hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct RhsChange {
    previous_objective: Option<f64>,
    result: SolveResult,
    viable: bool,
}

impl RhsChange {
    fn new(previous: &SolveResult, result: SolveResult, sense: Objective) -> Self {
        let previous_objective = previous.objective_value();
        let viable = match (previous_objective, result.objective_value()) {
            (Some(previous), Some(current)) => is_viable(previous, current, sense),
            _ => false,
        };

        Self { previous_objective, result, viable }
    }

    /// Optimal objective value before the change, if there was one.
    pub fn previous_objective(&self) -> Option<f64> {
        self.previous_objective
    }

    /// Optimal objective value after the change, if there is one.
    pub fn current_objective(&self) -> Option<f64> {
        self.result.objective_value()
    }

    /// Result of solving the changed model.
    pub fn result(&self) -> &SolveResult {
        &self.result
    }

    /// Whether the change strictly improves the optimal objective value.
    ///
    /// A change that makes the model infeasible or unbounded, or that is applied to a model
    /// without an optimum, is not viable.
    pub fn is_viable(&self) -> bool {
        self.viable
    }
}

impl fmt::Display for RhsChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format_objective = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |value| value.to_string());

        write!(f, "{}", self.result)?;
        writeln!(f, "Previous objective value: {}", format_objective(self.previous_objective))?;
        writeln!(f, "New objective value: {}", format_objective(self.current_objective()))?;
        writeln!(f, "Trade evaluation: {}", if self.viable { "Viable" } else { "Not viable" })
    }
}

/// Solve a model again after changing the right-hand side of a single constraint.
///
/// # Arguments
///
/// * `model`: Model that was solved; it is not modified.
/// * `previous`: Result of solving `model`.
/// * `constraint`: Index of the constraint to change.
/// * `value`: New right-hand side of that constraint.
///
/// # Errors
///
/// If the constraint doesn't exist, the value is not finite, or the iteration limit is reached.
pub fn resolve_with_rhs(
    model: &LinearModel,
    previous: &SolveResult,
    constraint: usize,
    value: f64,
    options: &SolverOptions,
) -> Result<RhsChange, SolveError> {
    let changed = model.with_rhs(constraint, value)?;
    resolve(model, &changed, previous, options)
}

/// Solve a model again after changing all right-hand sides.
///
/// # Arguments
///
/// * `model`: Model that was solved; it is not modified.
/// * `previous`: Result of solving `model`.
/// * `values`: New right-hand side for each constraint.
///
/// # Errors
///
/// If the number of values doesn't match the number of constraints, a value is not finite, or the
/// iteration limit is reached.
pub fn resolve_with_rhs_values(
    model: &LinearModel,
    previous: &SolveResult,
    values: &[f64],
    options: &SolverOptions,
) -> Result<RhsChange, SolveError> {
    let changed = model.with_rhs_values(values)?;
    resolve(model, &changed, previous, options)
}

/// Solve the changed model, warm started from the previous optimal basis when possible.
fn resolve(
    model: &LinearModel,
    changed: &LinearModel,
    previous: &SolveResult,
    options: &SolverOptions,
) -> Result<RhsChange, SolveError> {
    let result = match warm_start(model, changed, previous, options)? {
        Some(result) => result,
        None => {
            debug!("Solving the changed model from scratch");
            solve_with_options(changed, options)?
        },
    };

    let change = RhsChange::new(previous, result, model.sense());
    info!(
        "Right-hand side change: {:?} -> {:?}, viable: {}",
        change.previous_objective(), change.current_objective(), change.is_viable(),
    );
    Ok(change)
}

fn warm_start(
    model: &LinearModel,
    changed: &LinearModel,
    previous: &SolveResult,
    options: &SolverOptions,
) -> Result<Option<SolveResult>, SolveError> {
    let Some(solution) = previous.solution() else {
        return Ok(None);
    };

    let original = normalize(model)?;
    let provider = normalize(changed)?;
    if !original.has_same_structure(&provider) {
        debug!("Right-hand side change flipped a row, the previous basis can't be reused");
        return Ok(None);
    }

    let result = reoptimize(&provider, solution.basis().columns(), options)?;
    Ok(result.map(|result| report(changed, result)))
}
