//! # Linear programs in general form
//!
//! A linear program as described by the user: an objective with a direction, and a list of
//! constraints of any type over non-negative variables. This is the input of the solver; it is
//! never modified once created. Changing a right-hand side creates a new value.
use std::error::Error;
use std::fmt;

use itertools::Itertools;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::{ConstraintType, Objective};

/// A linear combination of variables.
///
/// Pairs are `(variable index, coefficient)`. Indices may repeat, in which case the coefficients
/// add up.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinearExpression {
    terms: Vec<SparseTuple<f64>>,
}

impl LinearExpression {
    /// Create a new expression from `(variable index, coefficient)` pairs.
    pub fn new(terms: Vec<SparseTuple<f64>>) -> Self {
        Self { terms }
    }

    /// Create an expression from a dense row of coefficients, skipping the zeros.
    pub fn from_dense(coefficients: &[f64]) -> Self {
        Self {
            terms: coefficients.iter()
                .copied()
                .enumerate()
                .filter(|&(_, coefficient)| coefficient != 0_f64)
                .collect(),
        }
    }

    /// The `(variable index, coefficient)` pairs, in the order they were given.
    pub fn terms(&self) -> &[SparseTuple<f64>] {
        &self.terms
    }

    /// Dense representation of length `nr_variables`.
    ///
    /// Should only be called on expressions of which all indices are smaller than `nr_variables`.
    pub fn dense(&self, nr_variables: usize) -> Vec<f64> {
        let mut row = vec![0_f64; nr_variables];
        for &(j, coefficient) in &self.terms {
            debug_assert!(j < nr_variables);

            row[j] += coefficient;
        }
        row
    }

    /// Value of the expression for the given assignment.
    ///
    /// Variables without a value in the assignment are taken to be zero.
    pub fn evaluate(&self, assignment: &[f64]) -> f64 {
        self.terms.iter()
            .map(|&(j, coefficient)| coefficient * assignment.get(j).copied().unwrap_or(0_f64))
            .sum()
    }

    /// Largest variable index used plus one, or zero if the expression is empty.
    fn index_bound(&self) -> usize {
        self.terms.iter().map(|&(j, _)| j + 1).max().unwrap_or(0)
    }
}

impl fmt::Display for LinearExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }

        let text = self.terms.iter()
            .map(|&(j, coefficient)| format!("{} x{}", coefficient, j + 1))
            .join(" + ");
        f.write_str(&text)
    }
}

/// The function to optimize, together with the direction of optimization.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectiveFunction {
    expression: LinearExpression,
    sense: Objective,
}

impl ObjectiveFunction {
    /// Create a new objective function.
    pub fn new(expression: LinearExpression, sense: Objective) -> Self {
        Self { expression, sense }
    }

    /// Linear combination that is optimized.
    pub fn expression(&self) -> &LinearExpression {
        &self.expression
    }

    /// Whether to maximize or minimize.
    pub fn sense(&self) -> Objective {
        self.sense
    }
}

/// A single (in)equality: `expression (<=|>=|=) rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    expression: LinearExpression,
    constraint_type: ConstraintType,
    rhs: f64,
    name: Option<String>,
}

impl Constraint {
    /// Create a new unnamed constraint.
    pub fn new(expression: LinearExpression, constraint_type: ConstraintType, rhs: f64) -> Self {
        Self { expression, constraint_type, rhs, name: None }
    }

    /// Attach a display name to this constraint.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Left-hand side.
    pub fn expression(&self) -> &LinearExpression {
        &self.expression
    }

    /// Relation between both sides.
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// Right-hand side.
    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Display name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Amount by which the constraint is not binding at the given assignment.
    ///
    /// This is `rhs - lhs` for `<=` constraints and `lhs - rhs` for `>=` constraints; a negative
    /// value indicates a violated constraint. For equality constraints, it is `rhs - lhs`.
    pub fn slack(&self, assignment: &[f64]) -> f64 {
        let lhs = self.expression.evaluate(assignment);
        match self.constraint_type {
            ConstraintType::Less | ConstraintType::Equal => self.rhs - lhs,
            ConstraintType::Greater => lhs - self.rhs,
        }
    }

    fn with_rhs(&self, rhs: f64) -> Self {
        Self { rhs, ..self.clone() }
    }
}

/// A linear program in general form.
///
/// All variables are non-negative and have no upper bound. Constraints are identified by their
/// index; that index is used to look up their shadow price and slack in a solution.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearModel {
    objective: ObjectiveFunction,
    constraints: Vec<Constraint>,
    nr_variables: usize,
}

impl LinearModel {
    /// Create a new linear program.
    ///
    /// The model is not validated here; that happens when it gets standardized.
    pub fn new(objective: ObjectiveFunction, constraints: Vec<Constraint>, nr_variables: usize) -> Self {
        Self { objective, constraints, nr_variables }
    }

    /// Create a linear program from dense coefficient rows.
    ///
    /// # Arguments
    ///
    /// * `sense`: Direction of optimization.
    /// * `cost`: Objective coefficients, one per variable. Its length determines the number of
    /// variables.
    /// * `rows`: `(coefficients, constraint type, rhs)` per constraint. Missing trailing
    /// coefficients are zero.
    pub fn from_dense(
        sense: Objective,
        cost: &[f64],
        rows: Vec<(Vec<f64>, ConstraintType, f64)>,
    ) -> Self {
        let objective = ObjectiveFunction::new(LinearExpression::from_dense(cost), sense);
        let constraints = rows.into_iter()
            .map(|(coefficients, constraint_type, rhs)| {
                Constraint::new(LinearExpression::from_dense(&coefficients), constraint_type, rhs)
            })
            .collect();

        Self::new(objective, constraints, cost.len())
    }

    /// Objective function with its direction.
    pub fn objective(&self) -> &ObjectiveFunction {
        &self.objective
    }

    /// Direction of optimization.
    pub fn sense(&self) -> Objective {
        self.objective.sense
    }

    /// All constraints, ordered by index.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Right-hand sides of all constraints, ordered by index.
    pub fn rhs(&self) -> Vec<f64> {
        self.constraints.iter().map(Constraint::rhs).collect()
    }

    /// Name of a constraint: the given name, or `c1`, `c2`, ... by index.
    pub fn constraint_name(&self, i: usize) -> String {
        debug_assert!(i < self.nr_constraints());

        self.constraints[i].name()
            .map_or_else(|| format!("c{}", i + 1), str::to_string)
    }

    /// Name of a variable: `x1`, `x2`, ... by index.
    pub fn variable_name(&self, j: usize) -> String {
        debug_assert!(j < self.nr_variables);

        format!("x{}", j + 1)
    }

    /// Objective function value of an assignment.
    pub fn evaluate_objective(&self, assignment: &[f64]) -> f64 {
        self.objective.expression.evaluate(assignment)
    }

    /// A new model, equal to this one except for the right-hand side of one constraint.
    pub fn with_rhs(&self, constraint: usize, value: f64) -> Result<Self, MalformedModel> {
        if constraint >= self.nr_constraints() {
            return Err(MalformedModel::ConstraintIndexOutOfBounds {
                index: constraint,
                nr_constraints: self.nr_constraints(),
            });
        }
        if !value.is_finite() {
            return Err(MalformedModel::NotFinite { row: Row::Constraint(constraint) });
        }

        let mut constraints = self.constraints.clone();
        constraints[constraint] = constraints[constraint].with_rhs(value);
        Ok(Self { constraints, ..self.clone() })
    }

    /// A new model, equal to this one except for all right-hand sides.
    pub fn with_rhs_values(&self, values: &[f64]) -> Result<Self, MalformedModel> {
        if values.len() != self.nr_constraints() {
            return Err(MalformedModel::RhsCountMismatch {
                expected: self.nr_constraints(),
                provided: values.len(),
            });
        }
        if let Some(i) = values.iter().position(|value| !value.is_finite()) {
            return Err(MalformedModel::NotFinite { row: Row::Constraint(i) });
        }

        let constraints = self.constraints.iter()
            .zip(values)
            .map(|(constraint, &rhs)| constraint.with_rhs(rhs))
            .collect();
        Ok(Self { constraints, ..self.clone() })
    }

    /// Check the structure of the model.
    ///
    /// # Errors
    ///
    /// If there are no variables, if an expression refers to a variable that doesn't exist or if
    /// a coefficient or right-hand side is not a finite number.
    pub fn validate(&self) -> Result<(), MalformedModel> {
        if self.nr_variables == 0 {
            return Err(MalformedModel::NoVariables);
        }

        let rows = std::iter::once((Row::Objective, &self.objective.expression, 0_f64))
            .chain(self.constraints.iter().enumerate().map(|(i, constraint)| {
                (Row::Constraint(i), &constraint.expression, constraint.rhs)
            }));
        for (row, expression, rhs) in rows {
            let bound = expression.index_bound();
            if bound > self.nr_variables {
                return Err(MalformedModel::VariableIndexOutOfBounds {
                    row,
                    index: bound - 1,
                    nr_variables: self.nr_variables,
                });
            }
            if !rhs.is_finite() || expression.terms.iter().any(|(_, coefficient)| !coefficient.is_finite()) {
                return Err(MalformedModel::NotFinite { row });
            }
        }

        Ok(())
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.objective.sense, self.objective.expression)?;
        for (i, constraint) in self.constraints.iter().enumerate() {
            writeln!(
                f, "{}: {} {} {}",
                self.constraint_name(i), constraint.expression, constraint.constraint_type, constraint.rhs,
            )?;
        }
        Ok(())
    }
}

/// Row of a linear model: the objective or a constraint (by index).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Row {
    /// The objective function.
    Objective,
    /// A constraint, by index.
    Constraint(usize),
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Objective => f.write_str("objective"),
            Row::Constraint(i) => write!(f, "constraint {}", i + 1),
        }
    }
}

/// A `MalformedModel` error is created when a linear program is structurally invalid.
///
/// This is not returned when the linear program is infeasible or unbounded; those are regular
/// outcomes of a solve.
#[derive(Clone, Debug, PartialEq)]
pub enum MalformedModel {
    /// The model has no variables.
    NoVariables,
    /// An expression refers to a variable that is not part of the model.
    VariableIndexOutOfBounds {
        /// Where the reference was found.
        row: Row,
        /// Index of the referenced variable.
        index: usize,
        /// Number of variables in the model.
        nr_variables: usize,
    },
    /// A coefficient or right-hand side is infinite or not a number.
    NotFinite {
        /// Where the value was found.
        row: Row,
    },
    /// A right-hand side change refers to a constraint that is not part of the model.
    ConstraintIndexOutOfBounds {
        /// Index of the referenced constraint.
        index: usize,
        /// Number of constraints in the model.
        nr_constraints: usize,
    },
    /// The number of new right-hand side values doesn't match the number of constraints.
    RhsCountMismatch {
        /// Number of constraints in the model.
        expected: usize,
        /// Number of values provided.
        provided: usize,
    },
}

impl fmt::Display for MalformedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedModel::NoVariables => write!(f, "MalformedModel: the model has no variables"),
            MalformedModel::VariableIndexOutOfBounds { row, index, nr_variables } => write!(
                f, "MalformedModel: {} refers to variable x{} but there are only {} variables",
                row, index + 1, nr_variables,
            ),
            MalformedModel::NotFinite { row } => write!(
                f, "MalformedModel: {} contains a value that is not a finite number", row,
            ),
            MalformedModel::ConstraintIndexOutOfBounds { index, nr_constraints } => write!(
                f, "MalformedModel: constraint {} does not exist, there are {} constraints",
                index + 1, nr_constraints,
            ),
            MalformedModel::RhsCountMismatch { expected, provided } => write!(
                f, "MalformedModel: expected {} right-hand side values, got {}", expected, provided,
            ),
        }
    }
}

impl Error for MalformedModel {}
