//! # Building blocks to describe linear programs.
use std::fmt;

use enum_map::Enum;

/// A `Constraint` is a type of (in)equality.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    /// `lhs = rhs`
    Equal,
    /// `lhs >= rhs`
    Greater,
    /// `lhs <= rhs`
    Less,
}

impl ConstraintType {
    /// The constraint type after multiplying both sides of the constraint by `-1`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Multiplier that turns an objective of this sense into a minimization objective.
    pub fn minimization_sign(self) -> f64 {
        match self {
            Objective::Maximize => -1_f64,
            Objective::Minimize => 1_f64,
        }
    }

    /// Whether `candidate` is a strictly better objective value than `incumbent`.
    pub fn is_strict_improvement(self, incumbent: f64, candidate: f64) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        })
    }
}

/// Terminal state of a solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// A finite optimum was found.
    Optimal,
    /// No assignment satisfies all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "Optimal",
            Status::Infeasible => "Infeasible",
            Status::Unbounded => "Unbounded",
        })
    }
}
