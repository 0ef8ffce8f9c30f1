use approx::assert_abs_diff_eq;

use rhs_lp::{solve, SolveResult, Status};
use rhs_lp::io::error::ImportError;
use rhs_lp::io::import;

use super::{get_test_file_path, import_model};

/// Solve a model file and compare against the known optimum.
fn check_optimum(file_name: &str, objective: f64, values: &[f64], shadow_prices: &[f64], slacks: &[f64]) {
    let model = import_model(file_name);
    let result = solve(&model).unwrap();

    let solution = result.solution().unwrap();
    assert_abs_diff_eq!(solution.objective_value(), objective, epsilon = 1e-9);
    for (computed, expected) in solution.values().into_iter().zip(values.iter().copied()) {
        assert_abs_diff_eq!(computed, expected, epsilon = 1e-9);
    }
    for (i, (&shadow_price, &slack)) in shadow_prices.iter().zip(slacks).enumerate() {
        assert_abs_diff_eq!(solution.shadow_price(i), shadow_price, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.slack(i), slack, epsilon = 1e-9);
    }
}

#[test]
fn product_mix() {
    check_optimum("product_mix.lp", 36f64, &[2f64, 6f64], &[0f64, 1.5f64, 1f64], &[2f64, 0f64, 0f64]);

    let result = solve(&import_model("product_mix.lp")).unwrap();
    let names = result.solution().unwrap().constraints().iter()
        .map(|report| report.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["plant_1", "plant_2", "plant_3"]);
}

#[test]
fn diet() {
    check_optimum("diet.lp", 9.5f64, &[2.5f64, 1.5f64], &[2.5f64, 0f64, -0.5f64], &[0f64, 1f64, 0f64]);
}

#[test]
fn blending() {
    check_optimum("blending.txt", 13f64, &[2f64, 0f64, 1f64], &[1f64, 0f64, 1f64], &[0f64, 1f64, 0f64]);
}

#[test]
fn flipped() {
    check_optimum("flipped.lp", 5f64, &[3f64, 2f64], &[-1f64, 1f64], &[0f64, 0f64]);
}

#[test]
fn redundant() {
    let model = import_model("redundant.lp");
    let result = solve(&model).unwrap();
    let solution = result.solution().unwrap();

    assert_abs_diff_eq!(solution.objective_value(), 2f64, epsilon = 1e-9);
    // One of the two rows is removed, its shadow price is reported as zero
    let dual_objective = 2f64 * solution.shadow_price(0) + 4f64 * solution.shadow_price(1);
    assert_abs_diff_eq!(dual_objective, 2f64, epsilon = 1e-9);
    assert!(solution.shadow_price(0) == 0f64 || solution.shadow_price(1) == 0f64);
}

#[test]
fn infeasible() {
    assert_eq!(solve(&import_model("infeasible.lp")).unwrap(), SolveResult::Infeasible);
}

#[test]
fn unbounded() {
    let result = solve(&import_model("unbounded.lp")).unwrap();
    assert_eq!(result.status(), Status::Unbounded);
    assert_eq!(result.objective_value(), None);
}

#[test]
fn malformed() {
    match import(&get_test_file_path("malformed.lp")) {
        Err(ImportError::Parse(error)) => {
            assert_eq!(error.line_number(), Some(3));
            assert!(error.to_string().contains("=>"));
        },
        other => panic!("Expected a parse error, got {:?}", other),
    }
}

#[test]
fn missing() {
    assert!(matches!(import(&get_test_file_path("missing.lp")), Err(ImportError::IO(_))));
}
