use std::thread;

use approx::assert_abs_diff_eq;

use rhs_lp::{PivotRuleKind, resolve_with_rhs, resolve_with_rhs_values, solve, solve_with_options, SolverOptions};

use crate::models::import_model;

use super::{assert_complementary_slackness, assert_objective_consistent, assert_slacks_consistent, assert_strong_duality, OPTIMAL_MODELS};

#[test]
fn optimality_conditions() {
    for file_name in OPTIMAL_MODELS {
        let model = import_model(file_name);
        let result = solve(&model).unwrap();
        let solution = result.solution().unwrap();

        assert_objective_consistent(&model, solution);
        assert_slacks_consistent(&model, solution);
        assert_complementary_slackness(solution);
        assert_strong_duality(&model, solution);
    }
}

#[test]
fn deterministic() {
    for file_name in OPTIMAL_MODELS {
        let model = import_model(file_name);
        let first = solve(&model).unwrap();
        let second = solve(&model).unwrap();
        assert_eq!(first, second);

        let bits = |values: Vec<f64>| values.into_iter().map(f64::to_bits).collect::<Vec<_>>();
        assert_eq!(
            bits(first.solution().unwrap().values()),
            bits(second.solution().unwrap().values()),
        );
    }
}

#[test]
fn deterministic_across_threads() {
    let model = import_model("blending.txt");
    let expected = solve(&model).unwrap();

    thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| solve(&model).unwrap()))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn pivot_rules_agree() {
    let options = SolverOptions { pivot_rule: PivotRuleKind::Bland, ..SolverOptions::default() };
    for file_name in OPTIMAL_MODELS {
        let model = import_model(file_name);
        let dantzig = solve(&model).unwrap();
        let bland = solve_with_options(&model, &options).unwrap();

        assert_abs_diff_eq!(
            dantzig.objective_value().unwrap(),
            bland.objective_value().unwrap(),
            epsilon = 1e-9,
        );
        assert_objective_consistent(&model, bland.solution().unwrap());
    }
}

#[test]
fn monotone_in_rhs() {
    let options = SolverOptions::default();
    for file_name in ["product_mix.lp", "blending.txt"] {
        let model = import_model(file_name);
        let result = solve(&model).unwrap();
        let objective = result.objective_value().unwrap();

        for (i, rhs) in model.rhs().into_iter().enumerate() {
            for increase in [0.5f64, 1f64, 10f64] {
                let change = resolve_with_rhs(&model, &result, i, rhs + increase, &options).unwrap();
                let changed = change.current_objective().unwrap();
                assert!(changed >= objective - 1e-9, "{}: objective decreased after increasing rhs {}", file_name, i);
            }
        }
    }
}

#[test]
fn warm_start_matches_cold_start() {
    let options = SolverOptions::default();
    let cases: [(&str, &[f64]); 6] = [
        ("product_mix.lp", &[4f64, 12f64, 30f64]),
        ("product_mix.lp", &[1f64, 4f64, 6f64]),
        ("product_mix.lp", &[10f64, 2f64, 18f64]),
        ("diet.lp", &[5f64, 6f64, 1f64]),
        ("diet.lp", &[4f64, 12f64, 0f64]),
        ("blending.txt", &[5f64, 4f64, 8f64]),
    ];

    for (file_name, values) in cases {
        let model = import_model(file_name);
        let result = solve(&model).unwrap();

        let warm = resolve_with_rhs_values(&model, &result, values, &options).unwrap();
        let cold = solve(&model.with_rhs_values(values).unwrap()).unwrap();

        assert_eq!(warm.result().status(), cold.status());
        assert_abs_diff_eq!(
            warm.current_objective().unwrap(),
            cold.objective_value().unwrap(),
            epsilon = 1e-9,
        );
        let changed = model.with_rhs_values(values).unwrap();
        assert_objective_consistent(&changed, warm.result().solution().unwrap());
        assert_slacks_consistent(&changed, warm.result().solution().unwrap());
    }
}
