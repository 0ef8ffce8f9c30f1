//! # Scenarios
//!
//! Hand checked models, built through the public API.
use approx::assert_abs_diff_eq;

use rhs_lp::{ConstraintType, is_viable, LinearModel, MalformedModel, Objective, resolve_with_rhs, solve, SolveError, SolveResult, SolverOptions, Status};

fn product_mix() -> LinearModel {
    crate::init_logging();

    LinearModel::from_dense(
        Objective::Maximize,
        &[3f64, 5f64],
        vec![
            (vec![1f64, 0f64], ConstraintType::Less, 4f64),
            (vec![0f64, 2f64], ConstraintType::Less, 12f64),
            (vec![3f64, 2f64], ConstraintType::Less, 18f64),
        ],
    )
}

#[test]
fn optimum() {
    let result = solve(&product_mix()).unwrap();

    assert_eq!(result.status(), Status::Optimal);
    let solution = result.solution().unwrap();
    assert_abs_diff_eq!(solution.objective_value(), 36f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.values()[0], 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.values()[1], 6f64, epsilon = 1e-9);
    assert_eq!(solution.variable_values()[1].0, "x2");
}

#[test]
fn increased_rhs_is_viable() {
    let model = product_mix();
    let result = solve(&model).unwrap();

    let change = resolve_with_rhs(&model, &result, 2, 30f64, &SolverOptions::default()).unwrap();
    assert_eq!(change.previous_objective(), Some(36f64));
    assert!(change.current_objective().unwrap() > 36f64);
    assert!(change.is_viable());
    assert!(change.to_string().ends_with("Trade evaluation: Viable\n"));

    // The model itself is not changed
    assert_eq!(model, product_mix());
    assert_eq!(model.rhs(), vec![4f64, 12f64, 18f64]);
}

#[test]
fn decreased_rhs_is_not_viable() {
    let model = product_mix();
    let result = solve(&model).unwrap();

    let change = resolve_with_rhs(&model, &result, 1, 6f64, &SolverOptions::default()).unwrap();
    // x2 = 3, x1 = 4
    assert_abs_diff_eq!(change.current_objective().unwrap(), 27f64, epsilon = 1e-9);
    assert!(!change.is_viable());

    // A slack constraint has no effect
    let change = resolve_with_rhs(&model, &result, 0, 3f64, &SolverOptions::default()).unwrap();
    assert_abs_diff_eq!(change.current_objective().unwrap(), 36f64, epsilon = 1e-9);
    assert!(!change.is_viable());
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

    let result = solve(&model).unwrap();
    assert_eq!(result, SolveResult::Infeasible);
    assert_eq!(result.to_string(), "Status: Infeasible\n");
}

#[test]
fn unbounded() {
    let model = LinearModel::from_dense(
        Objective::Maximize,
        &[1f64],
        vec![(vec![1f64], ConstraintType::Greater, 0f64)],
    );

    assert_eq!(solve(&model).unwrap().status(), Status::Unbounded);
}

#[test]
fn viability() {
    assert!(is_viable(36f64, 42f64, Objective::Maximize));
    assert!(!is_viable(36f64, 36f64, Objective::Maximize));
    assert!(is_viable(9.5f64, 9f64, Objective::Minimize));
    assert!(!is_viable(9.5f64, 12f64, Objective::Minimize));
}

#[test]
fn invalid_changes() {
    let model = product_mix();
    let result = solve(&model).unwrap();
    let options = SolverOptions::default();

    assert_eq!(
        resolve_with_rhs(&model, &result, 3, 1f64, &options),
        Err(SolveError::MalformedModel(MalformedModel::ConstraintIndexOutOfBounds { index: 3, nr_constraints: 3 })),
    );
    assert!(matches!(
        resolve_with_rhs(&model, &result, 0, f64::NAN, &options),
        Err(SolveError::MalformedModel(MalformedModel::NotFinite { .. })),
    ));
}
