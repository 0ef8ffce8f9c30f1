//! Product mix problem with only `<=` constraints.
//!
//! Two products are made in three plants, each plant has a limited number of hours available.
use approx::assert_abs_diff_eq;

use crate::algorithm::solve;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::{Constraint, LinearExpression, LinearModel, ObjectiveFunction};
use crate::data::linear_program::standard_form::{normalize, RowInfo, StandardForm};
use crate::io::lp::import;

#[test]
fn conversion_pipeline() {
    // Model file
    let result = import(MODEL_LITERAL_STRING);
    assert!(result.is_ok());
    let general_form_computed = result.unwrap();
    assert_eq!(general_form_computed, general_form());

    // Standard form
    let result = normalize(&general_form_computed);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), standard_form());

    // Solution
    let result = solve(&general_form_computed).unwrap();
    let solution = result.solution().unwrap();
    assert_abs_diff_eq!(solution.objective_value(), 36f64, epsilon = 1e-9);
    assert_eq!(solution.values(), vec![2f64, 6f64]);
}

pub const MODEL_LITERAL_STRING: &str = "# Product mix
maximize: 3 5
c1: 1 0 <= 4    # plant 1
c2: 0 2 <= 12   # plant 2
c3: 3 2 <= 18   # plant 3
";

pub fn general_form() -> LinearModel {
    let constraint = |name: &str, coefficients: &[f64], rhs: f64| {
        Constraint::new(LinearExpression::from_dense(coefficients), ConstraintType::Less, rhs).named(name)
    };

    LinearModel::new(
        ObjectiveFunction::new(LinearExpression::from_dense(&[3f64, 5f64]), Objective::Maximize),
        vec![
            constraint("c1", &[1f64, 0f64], 4f64),
            constraint("c2", &[0f64, 2f64], 12f64),
            constraint("c3", &[3f64, 2f64], 18f64),
        ],
        2,
    )
}

pub fn standard_form() -> StandardForm {
    let less = |slack| RowInfo { constraint_type: ConstraintType::Less, flipped: false, slack: Some(slack), artificial: None };

    StandardForm::new(
        vec![
            vec![1f64, 0f64, 1f64, 0f64, 0f64],
            vec![0f64, 2f64, 0f64, 1f64, 0f64],
            vec![3f64, 2f64, 0f64, 0f64, 1f64],
        ],
        vec![4f64, 12f64, 18f64],
        vec![-3f64, -5f64, 0f64, 0f64, 0f64],
        vec![less(2), less(3), less(4)],
        2,
        Objective::Maximize,
    )
}

/// The same model with different right-hand sides.
pub fn standard_form_with_rhs(values: &[f64]) -> StandardForm {
    let model = general_form().with_rhs_values(values).unwrap();
    normalize(&model).unwrap()
}

/// A model in which the second row is a multiple of the first.
pub fn dependent_standard_form() -> StandardForm {
    let model = LinearModel::from_dense(
        Objective::Maximize,
        &[1f64, 1f64],
        vec![
            (vec![1f64, 1f64], ConstraintType::Less, 1f64),
            (vec![2f64, 2f64], ConstraintType::Less, 2f64),
        ],
    );
    normalize(&model).unwrap()
}
