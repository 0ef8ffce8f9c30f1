//! # Importing model files
//!
//! Reading of `.lp` and `.txt` files in a small, line oriented format:
//!
//! ```text
//! # Comments start with a hash
//! maximize: 3 5
//! c1: 1 0 <= 4
//! c2: 0 2 <= 12
//! c3: 3 2 <= 18
//! ```
//!
//! The first line holds the direction of optimization and the dense objective coefficients; their
//! number determines the number of variables. Every other line is a constraint with an optional
//! label, dense coefficients (missing trailing coefficients are zero), an operator (`<=`, `≤`,
//! `>=`, `≥`, `=` or `==`) and a right-hand side.
use std::collections::HashSet;

use crate::data::linear_program::general_form::{Constraint, LinearExpression, LinearModel, ObjectiveFunction};
use crate::io::error::{ImportError, InconsistencyError};
use crate::io::lp::parsing::{into_atom_lines, UnstructuredModel};

mod parsing;
mod token;

/// Parse a program, in string form, to a `LinearModel`.
///
/// # Arguments
///
/// * `program`: The input in the format described in the module documentation.
///
/// # Errors
///
/// A `Parse` error if the text is syntactically incorrect, and a `LinearProgram` error if the
/// described model is inconsistent.
pub fn import(program: &str) -> Result<LinearModel, ImportError> {
    let atom_lines = into_atom_lines(program);
    let unstructured = UnstructuredModel::try_from(atom_lines)?;
    Ok(structure(unstructured)?)
}

/// Check the parsed model for consistency and build a `LinearModel` from it.
///
/// Constraint names should be unique and no constraint can have more coefficients than there are
/// variables.
fn structure(unstructured: UnstructuredModel) -> Result<LinearModel, InconsistencyError> {
    let nr_variables = unstructured.cost.len();

    let mut names = HashSet::new();
    let mut constraints = Vec::with_capacity(unstructured.constraints.len());
    for constraint in unstructured.constraints {
        let (line_number, line) = constraint.location;
        if constraint.coefficients.len() > nr_variables {
            return Err(InconsistencyError::new(format!(
                "Constraint at line {} has {} coefficients, but there are only {} variables: {}",
                line_number, constraint.coefficients.len(), nr_variables, line,
            )));
        }

        let expression = LinearExpression::from_dense(&constraint.coefficients);
        let mut built = Constraint::new(expression, constraint.constraint_type, constraint.rhs);
        if let Some(name) = constraint.name {
            if !names.insert(name) {
                return Err(InconsistencyError::new(format!(
                    "Duplicate constraint name \"{}\" at line {}", name, line_number,
                )));
            }
            built = built.named(name);
        }
        constraints.push(built);
    }

    let objective = ObjectiveFunction::new(LinearExpression::from_dense(&unstructured.cost), unstructured.sense);
    let model = LinearModel::new(objective, constraints, nr_variables);
    model.validate()?;

    Ok(model)
}
