//! # Representation of solve results
//!
//! Once a linear program is solved, the result is reported back in terms of the original model:
//! values of the decision variables, and a shadow price and slack for every constraint.
use std::fmt;

use crate::data::linear_program::elements::Status;

/// Outcome of a solve.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum SolveResult {
    FiniteOptimum(Solution),
    Infeasible,
    Unbounded,
}

impl SolveResult {
    /// Terminal state of the solve.
    pub fn status(&self) -> Status {
        match self {
            SolveResult::FiniteOptimum(_) => Status::Optimal,
            SolveResult::Infeasible => Status::Infeasible,
            SolveResult::Unbounded => Status::Unbounded,
        }
    }

    /// Optimal objective value, present iff the status is optimal.
    pub fn objective_value(&self) -> Option<f64> {
        self.solution().map(Solution::objective_value)
    }

    /// The optimal solution, if there is one.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveResult::FiniteOptimum(solution) => Some(solution),
            SolveResult::Infeasible | SolveResult::Unbounded => None,
        }
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status())?;
        match self {
            SolveResult::FiniteOptimum(solution) => fmt::Display::fmt(solution, f),
            SolveResult::Infeasible | SolveResult::Unbounded => Ok(()),
        }
    }
}

/// Sensitivity information of a single constraint at the optimum.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintReport {
    /// Display name of the constraint.
    pub name: String,
    /// Change of the optimal objective value per unit increase of the right-hand side.
    pub shadow_price: f64,
    /// Distance between both sides of the constraint at the optimum; zero when binding.
    pub slack: f64,
}

/// Columns of an optimal basis, ordered by row.
///
/// Only meaningful for the model that was solved, or a model that differs from it only in its
/// right-hand side. Used to warm start a solve after such a change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Basis {
    columns: Vec<usize>,
}

impl Basis {
    pub(crate) fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    pub(crate) fn columns(&self) -> &[usize] {
        &self.columns
    }
}

/// An optimal solution, in terms of the original model.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Value of the objective function, in the direction of the model.
    objective_value: f64,
    /// (variable name, solution value) tuples for all variables, ordered by index.
    variable_values: Vec<(String, f64)>,
    /// Shadow price and slack per constraint, ordered by index.
    constraints: Vec<ConstraintReport>,
    /// Optimal basis.
    basis: Basis,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub(crate) fn new(
        objective_value: f64,
        variable_values: Vec<(String, f64)>,
        constraints: Vec<ConstraintReport>,
        basis: Basis,
    ) -> Self {
        Self { objective_value, variable_values, constraints, basis }
    }

    /// Optimal objective value.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Named values of the decision variables.
    pub fn variable_values(&self) -> &[(String, f64)] {
        &self.variable_values
    }

    /// Values of the decision variables, ordered by index.
    pub fn values(&self) -> Vec<f64> {
        self.variable_values.iter().map(|&(_, value)| value).collect()
    }

    /// Shadow price and slack of every constraint.
    pub fn constraints(&self) -> &[ConstraintReport] {
        &self.constraints
    }

    /// Shadow price of a constraint.
    pub fn shadow_price(&self, constraint: usize) -> f64 {
        self.constraints[constraint].shadow_price
    }

    /// Slack of a constraint.
    pub fn slack(&self, constraint: usize) -> f64 {
        self.constraints[constraint].slack
    }

    /// Optimal basis, for warm starts.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        for (name, value) in &self.variable_values {
            writeln!(f, "{} = {}", name, value)?;
        }
        writeln!(f, "Shadow prices:")?;
        for ConstraintReport { name, shadow_price, slack } in &self.constraints {
            writeln!(f, "{}: {:.2} (slack: {:.2})", name, shadow_price, slack)?;
        }
        Ok(())
    }
}
