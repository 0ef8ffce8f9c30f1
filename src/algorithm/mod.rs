//! # Algorithms
//!
//! Solving a linear model happens in a fixed sequence: the model is brought into standard form,
//! the two phase Simplex method computes an optimal tableau and the sensitivity analysis derives
//! shadow prices and slacks from that tableau.
use std::error::Error;
use std::fmt;

use log::info;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::general_form::{LinearModel, MalformedModel};
use crate::data::linear_program::solution::{Basis, Solution, SolveResult};
use crate::data::linear_program::standard_form::normalize;
use crate::data::number_types::numerical_precision::{close_heuristic_fraction, EPSILON};

pub mod sensitivity;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug)]
pub enum OptimizationResult<T> {
    Infeasible,
    FiniteOptimum(T),
    Unbounded,
}

/// Rule used to select the column that enters the basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PivotRuleKind {
    /// Most negative relative cost, ties broken by the lowest column index.
    #[default]
    Dantzig,
    /// First column with a negative relative cost, ratio test ties broken by the lowest leaving
    /// column index. Never cycles.
    Bland,
}

impl fmt::Display for PivotRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PivotRuleKind::Dantzig => "dantzig",
            PivotRuleKind::Bland => "bland",
        })
    }
}

/// Configuration of a solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverOptions {
    /// Values closer to zero than this are treated as zero.
    pub tolerance: f64,
    /// Maximum number of pivots per phase.
    ///
    /// When `None`, the limit depends on the size of the problem, see `iteration_limit_for`.
    pub iteration_limit: Option<usize>,
    /// How to choose the column entering the basis.
    pub pivot_rule: PivotRuleKind,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            iteration_limit: None,
            pivot_rule: PivotRuleKind::default(),
        }
    }
}

impl SolverOptions {
    /// Maximum number of pivots per phase for a problem of the given size.
    pub fn iteration_limit_for(&self, nr_rows: usize, nr_columns: usize) -> usize {
        self.iteration_limit
            .unwrap_or_else(|| (50 * (nr_rows + nr_columns)).max(100))
    }
}

/// A `SolveError` is returned when a model can't be solved.
///
/// An infeasible or unbounded model is not an error; those are regular outcomes of a solve.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The model is structurally invalid.
    MalformedModel(MalformedModel),
    /// The iteration limit was reached before the Simplex method terminated.
    CycleDetected {
        /// Number of pivots that were performed in the phase that didn't terminate.
        iterations: usize,
    },
}

impl From<MalformedModel> for SolveError {
    fn from(error: MalformedModel) -> Self {
        SolveError::MalformedModel(error)
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::MalformedModel(error) => fmt::Display::fmt(error, f),
            SolveError::CycleDetected { iterations } => write!(
                f, "CycleDetected: no optimum was reached after {} iterations", iterations,
            ),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::MalformedModel(error) => Some(error),
            SolveError::CycleDetected { .. } => None,
        }
    }
}

/// Solve a linear model with the default options.
///
/// # Errors
///
/// If the model is malformed, or if the iteration limit is reached.
pub fn solve(model: &LinearModel) -> Result<SolveResult, SolveError> {
    solve_with_options(model, &SolverOptions::default())
}

/// Solve a linear model.
///
/// The model is not modified; the result is deterministic for a given model and options.
///
/// # Errors
///
/// If the model is malformed, or if the iteration limit is reached.
pub fn solve_with_options(model: &LinearModel, options: &SolverOptions) -> Result<SolveResult, SolveError> {
    let provider = normalize(model)?;
    info!(
        "Solving a model with {} variables and {} constraints ({} columns in standard form)",
        model.nr_variables(), model.nr_constraints(), provider.nr_columns(),
    );

    let result = two_phase::solve_relaxation(&provider, options)?;
    Ok(report(model, result))
}

/// Assemble the result of a solve.
///
/// Values are cleaned of numerical noise by snapping them to nearby simple fractions.
pub(crate) fn report(model: &LinearModel, result: OptimizationResult<Tableau>) -> SolveResult {
    let result = match result {
        OptimizationResult::FiniteOptimum(tableau) => {
            let epsilon = tableau.epsilon();
            let bfs = tableau.current_bfs();
            let variable_values = (0..model.nr_variables())
                .map(|j| (model.variable_name(j), close_heuristic_fraction(bfs[j], epsilon)))
                .collect();
            let objective_value = close_heuristic_fraction(
                model.sense().minimization_sign() * tableau.objective_function_value(),
                epsilon,
            );
            let constraints = sensitivity::analyze(&tableau, model);
            let basis = Basis::new(tableau.basis_indices().to_vec());

            SolveResult::FiniteOptimum(Solution::new(objective_value, variable_values, constraints, basis))
        },
        OptimizationResult::Infeasible => SolveResult::Infeasible,
        OptimizationResult::Unbounded => SolveResult::Unbounded,
    };

    info!("Solve finished: {}", result.status());
    result
}

#[cfg(test)]
mod test {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::algorithm::{solve, solve_with_options, PivotRuleKind, SolveError, SolverOptions};
    use crate::data::linear_program::elements::{ConstraintType, Objective, Status};
    use crate::data::linear_program::general_form::{LinearModel, MalformedModel};
    use crate::data::linear_program::solution::SolveResult;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn solve_problem_1() {
        let result = solve(&problem_1::general_form()).unwrap();

        assert_eq!(result.status(), Status::Optimal);
        let solution = result.solution().unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 36f64, epsilon = 1e-9);
        assert_eq!(solution.values(), vec![2f64, 6f64]);
    }

    #[test]
    fn solve_problem_2() {
        let result = solve(&problem_2::general_form()).unwrap();

        let solution = result.solution().unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 9.5f64, epsilon = 1e-9);
        assert_eq!(solution.values(), vec![2.5f64, 1.5f64]);
    }

    #[test]
    fn infeasible() {
        let model = LinearModel::from_dense(
            Objective::Maximize,
            &[1f64, 1f64],
            vec![
                (vec![1f64], ConstraintType::Greater, 5f64),
                (vec![1f64], ConstraintType::Less, 2f64),
            ],
        );
        assert_eq!(solve(&model), Ok(SolveResult::Infeasible));
    }

    #[test]
    fn unbounded() {
        let model = LinearModel::from_dense(
            Objective::Maximize,
            &[1f64],
            vec![(vec![1f64], ConstraintType::Greater, 0f64)],
        );
        assert_eq!(solve(&model), Ok(SolveResult::Unbounded));
    }

    #[test]
    fn without_constraints() {
        let model = LinearModel::from_dense(Objective::Minimize, &[1f64, 2f64], vec![]);
        let result = solve(&model).unwrap();
        assert_eq!(result.objective_value(), Some(0f64));

        let model = LinearModel::from_dense(Objective::Maximize, &[1f64, 2f64], vec![]);
        assert_eq!(solve(&model), Ok(SolveResult::Unbounded));
    }

    #[test]
    fn malformed() {
        let model = LinearModel::from_dense(Objective::Maximize, &[], vec![]);
        assert_eq!(solve(&model), Err(SolveError::MalformedModel(MalformedModel::NoVariables)));
    }

    #[test]
    fn iteration_limit() {
        let options = SolverOptions { iteration_limit: Some(1), ..SolverOptions::default() };
        assert_eq!(
            solve_with_options(&problem_1::general_form(), &options),
            Err(SolveError::CycleDetected { iterations: 1 }),
        );

        assert_eq!(SolverOptions::default().iteration_limit_for(1, 1), 100);
        assert_eq!(SolverOptions::default().iteration_limit_for(3, 5), 400);
    }

    #[test]
    fn tiny_coefficients() {
        // Coefficients below the tolerance are still pivoted on
        let model = LinearModel::from_dense(
            Objective::Minimize,
            &[1f64],
            vec![
                (vec![6e-10], ConstraintType::Greater, 1f64),
                (vec![6e-10], ConstraintType::Greater, 1f64),
            ],
        );
        let result = solve(&model).unwrap();
        assert_eq!(result.status(), Status::Optimal);
        assert_relative_eq!(result.objective_value().unwrap(), 1f64 / 6e-10, max_relative = 1e-6);

        let model = LinearModel::from_dense(
            Objective::Maximize,
            &[1f64],
            vec![(vec![5e-10], ConstraintType::Less, 1f64)],
        );
        let result = solve(&model).unwrap();
        assert_eq!(result.status(), Status::Optimal);
        assert_relative_eq!(result.objective_value().unwrap(), 2e9, max_relative = 1e-6);
    }

    #[test]
    fn degenerate_cycle() {
        // Beale's example, on which Dantzig's rule with lowest index tie breaking cycles
        let model = LinearModel::from_dense(
            Objective::Minimize,
            &[-0.75f64, 150f64, -0.02f64, 6f64],
            vec![
                (vec![0.25f64, -60f64, -0.04f64, 9f64], ConstraintType::Less, 0f64),
                (vec![0.5f64, -90f64, -0.02f64, 3f64], ConstraintType::Less, 0f64),
                (vec![0f64, 0f64, 1f64, 0f64], ConstraintType::Less, 1f64),
            ],
        );
        for pivot_rule in [PivotRuleKind::Dantzig, PivotRuleKind::Bland] {
            let options = SolverOptions { pivot_rule, ..SolverOptions::default() };
            let result = solve_with_options(&model, &options).unwrap();
            assert_abs_diff_eq!(result.objective_value().unwrap(), -0.05f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn pivot_rules_agree() {
        for model in [problem_1::general_form(), problem_2::general_form()] {
            let dantzig = solve(&model).unwrap();
            let options = SolverOptions { pivot_rule: PivotRuleKind::Bland, ..SolverOptions::default() };
            let bland = solve_with_options(&model, &options).unwrap();

            assert_abs_diff_eq!(
                dantzig.objective_value().unwrap(),
                bland.objective_value().unwrap(),
                epsilon = 1e-9,
            );
        }
    }

    #[test]
    fn error_display() {
        let error = SolveError::CycleDetected { iterations: 400 };
        assert_eq!(error.to_string(), "CycleDetected: no optimum was reached after 400 iterations");
        let error = SolveError::from(MalformedModel::NoVariables);
        assert_eq!(error.to_string(), "MalformedModel: the model has no variables");
    }
}
