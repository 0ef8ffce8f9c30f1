//! # A linear program solver with right-hand side sensitivity analysis
//!
//! Linear programs are solved using the two phase Simplex Method as described in the book
//! Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. At the optimum,
//! every constraint gets a shadow price and a slack. After changing right-hand sides, a model can
//! be solved again starting from the previous optimal basis, and the change is evaluated by
//! comparing both optimal objective values.
//!
//! ```
//! use rhs_lp::{ConstraintType, LinearModel, Objective, resolve_with_rhs, solve, SolverOptions};
//!
//! let model = LinearModel::from_dense(
//!     Objective::Maximize,
//!     &[3_f64, 5_f64],
//!     vec![
//!         (vec![1_f64, 0_f64], ConstraintType::Less, 4_f64),
//!         (vec![0_f64, 2_f64], ConstraintType::Less, 12_f64),
//!         (vec![3_f64, 2_f64], ConstraintType::Less, 18_f64),
//!     ],
//! );
//!
//! let result = solve(&model)?;
//! assert_eq!(result.objective_value(), Some(36_f64));
//! assert_eq!(result.solution().map(|solution| solution.shadow_price(2)), Some(1_f64));
//!
//! let change = resolve_with_rhs(&model, &result, 2, 24_f64, &SolverOptions::default())?;
//! assert_eq!(change.current_objective(), Some(42_f64));
//! assert!(change.is_viable());
//! # Ok::<(), rhs_lp::SolveError>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

pub use algorithm::{PivotRuleKind, solve, solve_with_options, SolveError, SolverOptions};
pub use algorithm::sensitivity::{is_viable, resolve_with_rhs, resolve_with_rhs_values, RhsChange};
pub use data::linear_program::elements::{ConstraintType, Objective, Status};
pub use data::linear_program::general_form::{Constraint, LinearExpression, LinearModel, MalformedModel, ObjectiveFunction};
pub use data::linear_program::solution::{ConstraintReport, Solution, SolveResult};

#[cfg(test)]
mod tests;
