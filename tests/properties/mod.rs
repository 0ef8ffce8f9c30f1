//! # Properties of solve results
//!
//! Relations between a model and its optimal solution that hold regardless of the model, checked
//! for all model files.
use approx::assert_abs_diff_eq;

use rhs_lp::{ConstraintType, LinearModel, Solution};

mod test;

const EPSILON: f64 = 1e-9;

/// Model files that have a finite optimum.
const OPTIMAL_MODELS: [&str; 5] = ["product_mix.lp", "diet.lp", "blending.txt", "redundant.lp", "flipped.lp"];

/// The reported objective value is the objective function evaluated at the reported values.
fn assert_objective_consistent(model: &LinearModel, solution: &Solution) {
    assert_abs_diff_eq!(
        model.evaluate_objective(&solution.values()),
        solution.objective_value(),
        epsilon = EPSILON,
    );
}

/// Slacks follow from the values, are non-negative, and are zero for equality constraints.
fn assert_slacks_consistent(model: &LinearModel, solution: &Solution) {
    let values = solution.values();
    for (i, constraint) in model.constraints().iter().enumerate() {
        let slack = solution.slack(i);
        assert!(slack >= 0f64, "negative slack {} for constraint {}", slack, i);
        match constraint.constraint_type() {
            ConstraintType::Equal => assert_eq!(slack, 0f64),
            ConstraintType::Less | ConstraintType::Greater => {
                assert_abs_diff_eq!(constraint.slack(&values), slack, epsilon = EPSILON);
            },
        }
    }
}

/// A constraint with slack has no shadow price; a constraint with a shadow price is binding.
fn assert_complementary_slackness(solution: &Solution) {
    for report in solution.constraints() {
        if report.slack > EPSILON {
            assert_eq!(report.shadow_price, 0f64, "{} has slack and a shadow price", report.name);
        }
        if report.shadow_price != 0f64 {
            assert_abs_diff_eq!(report.slack, 0f64, epsilon = EPSILON);
        }
    }
}

/// The shadow prices form an optimal dual solution: weighing the right-hand sides with them gives
/// the optimal objective value.
fn assert_strong_duality(model: &LinearModel, solution: &Solution) {
    let dual_objective = model.rhs().iter()
        .zip(solution.constraints())
        .map(|(rhs, report)| rhs * report.shadow_price)
        .sum::<f64>();
    assert_abs_diff_eq!(dual_objective, solution.objective_value(), epsilon = 1e-6);
}
