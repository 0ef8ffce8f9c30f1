//! # Linear programs in standard form
//!
//! The simplex method works on equality constraints with a non-negative right-hand side. Each
//! inequality gets a slack (`<=`) or surplus (`>=`) column, and each row that can't provide an
//! initial basis column itself gets an artificial column.
//!
//! The columns are grouped by type:
//!
//! /               || Decision variables | Slack | Surplus | Artificial | | b |
//! ================||====================|=======|=========|============| |---|
//! Inequality (<=) ||    coefficients    |   I   |    0    |     0      | |   |
//! Inequality (>=) ||    coefficients    |   0   |   -I    |   I    0   | |>=0|
//! Equality   (==) ||    coefficients    |   0   |    0    |   0    I   | |   |
//!
//! The rows themselves keep the order of the constraints in the model; the table above only shows
//! where the non-zero auxiliary coefficients of each constraint type go.
use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::{LinearModel, MalformedModel};

/// Indexing within the different column types (see module description).
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables for which we want a solution.
    Decision,
    /// Slack of a `<=` row, coefficient `+1`.
    Slack,
    /// Surplus of a `>=` row, coefficient `-1`.
    Surplus,
    /// Artificial variable of a `>=` or `==` row, only used to find an initial basis.
    Artificial,
}

/// How a constraint of the model ended up as a row of the standard form.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RowInfo {
    /// Constraint type after normalizing the sign of the right-hand side.
    pub constraint_type: ConstraintType,
    /// Whether the row was multiplied by `-1` to make the right-hand side non-negative.
    pub flipped: bool,
    /// Column of the slack or surplus variable of this row, if any.
    pub slack: Option<usize>,
    /// Column of the artificial variable of this row, if any.
    pub artificial: Option<usize>,
}

impl RowInfo {
    /// Column that is in the initial basis for this row.
    pub fn initial_basis_column(&self) -> usize {
        match (self.constraint_type, self.slack, self.artificial) {
            (ConstraintType::Less, Some(slack), _) => slack,
            (_, _, Some(artificial)) => artificial,
            _ => unreachable!("every row has a slack or an artificial column"),
        }
    }

    /// Sign of the coefficient of the slack or surplus column in this row.
    ///
    /// Used to translate reduced costs of auxiliary columns into dual values.
    pub fn auxiliary_sign(&self) -> f64 {
        match self.constraint_type {
            ConstraintType::Less | ConstraintType::Equal => 1_f64,
            ConstraintType::Greater => -1_f64,
        }
    }
}

/// A linear program in `StandardForm` has only equality constraints and a non-negative
/// right-hand side.
///
/// The objective is always minimized; a maximization problem is stored with its cost negated.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm {
    /// Dense coefficients, one `Vec` of length `nr_columns` per row.
    rows: Vec<Vec<f64>>,
    /// Right-hand side, non-negative.
    b: Vec<f64>,
    /// Minimization cost of each column; zero for all auxiliary columns.
    cost: Vec<f64>,

    /// Information per row, ordered as the constraints of the original model.
    row_info: Vec<RowInfo>,
    /// Indices that separate the different column groups.
    column_group_end: EnumMap<ColumnType, usize>,
    /// Direction of optimization of the original model.
    sense: Objective,
}

/// Convert a model into standard form.
///
/// # Errors
///
/// A `MalformedModel` error if the model has no variables, refers to variables that don't exist
/// or contains values that aren't finite.
pub fn normalize(model: &LinearModel) -> Result<StandardForm, MalformedModel> {
    StandardForm::try_from(model)
}

impl LinearModel {
    /// Bring this model into standard form, see `normalize`.
    pub fn standardize(&self) -> Result<StandardForm, MalformedModel> {
        normalize(self)
    }
}

impl TryFrom<&LinearModel> for StandardForm {
    type Error = MalformedModel;

    fn try_from(model: &LinearModel) -> Result<Self, Self::Error> {
        model.validate()?;

        let n = model.nr_variables();

        // Make sure b >= 0
        let normalized = model.constraints().iter()
            .map(|constraint| {
                let mut coefficients = constraint.expression().dense(n);
                if constraint.rhs() < 0_f64 {
                    for value in &mut coefficients {
                        *value = -*value;
                    }
                    (coefficients, constraint.constraint_type().flipped(), -constraint.rhs(), true)
                } else {
                    (coefficients, constraint.constraint_type(), constraint.rhs(), false)
                }
            })
            .collect::<Vec<_>>();

        let mut counts: EnumMap<ConstraintType, usize> = EnumMap::default();
        for (_, constraint_type, _, _) in &normalized {
            counts[*constraint_type] += 1;
        }

        let cumulative = cumsum_array_owned([
            n,
            counts[ConstraintType::Less],
            counts[ConstraintType::Greater],
            counts[ConstraintType::Greater] + counts[ConstraintType::Equal],
        ]);
        let column_group_end = enum_map! {
            ColumnType::Decision   => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Surplus    => cumulative[2],
            ColumnType::Artificial => cumulative[3],
        };
        let nr_columns = column_group_end[ColumnType::Artificial];

        let mut next_slack = column_group_end[ColumnType::Decision];
        let mut next_surplus = column_group_end[ColumnType::Slack];
        let mut next_artificial = column_group_end[ColumnType::Surplus];
        let take = |counter: &mut usize| {
            let column = *counter;
            *counter += 1;
            column
        };

        let mut rows = Vec::with_capacity(normalized.len());
        let mut b = Vec::with_capacity(normalized.len());
        let mut row_info = Vec::with_capacity(normalized.len());
        for (mut coefficients, constraint_type, rhs, flipped) in normalized {
            coefficients.resize(nr_columns, 0_f64);

            let (slack, artificial) = match constraint_type {
                ConstraintType::Less => {
                    let slack = take(&mut next_slack);
                    coefficients[slack] = 1_f64;
                    (Some(slack), None)
                },
                ConstraintType::Greater => {
                    let surplus = take(&mut next_surplus);
                    let artificial = take(&mut next_artificial);
                    coefficients[surplus] = -1_f64;
                    coefficients[artificial] = 1_f64;
                    (Some(surplus), Some(artificial))
                },
                ConstraintType::Equal => {
                    let artificial = take(&mut next_artificial);
                    coefficients[artificial] = 1_f64;
                    (None, Some(artificial))
                },
            };

            rows.push(coefficients);
            b.push(rhs);
            row_info.push(RowInfo { constraint_type, flipped, slack, artificial });
        }
        debug_assert_eq!(next_slack, column_group_end[ColumnType::Slack]);
        debug_assert_eq!(next_surplus, column_group_end[ColumnType::Surplus]);
        debug_assert_eq!(next_artificial, column_group_end[ColumnType::Artificial]);

        let sign = model.sense().minimization_sign();
        let mut cost = model.objective().expression().dense(n)
            .into_iter()
            .map(|value| sign * value)
            .collect::<Vec<_>>();
        cost.resize(nr_columns, 0_f64);

        Ok(Self { rows, b, cost, row_info, column_group_end, sense: model.sense() })
    }
}

impl StandardForm {
    /// Create a `StandardForm` directly from its parts.
    ///
    /// Column groups are derived from the row information; no consistency checks are done.
    #[cfg(test)]
    pub(crate) fn new(
        rows: Vec<Vec<f64>>,
        b: Vec<f64>,
        cost: Vec<f64>,
        row_info: Vec<RowInfo>,
        nr_variables: usize,
        sense: Objective,
    ) -> Self {
        let count = |predicate: fn(&RowInfo) -> bool| row_info.iter().filter(|&info| predicate(info)).count();
        let nr_slack = count(|info| info.constraint_type == ConstraintType::Less);
        let nr_surplus = count(|info| info.constraint_type == ConstraintType::Greater);
        let nr_artificial = count(|info| info.artificial.is_some());

        let cumulative = cumsum_array_owned([nr_variables, nr_slack, nr_surplus, nr_artificial]);
        let column_group_end = enum_map! {
            ColumnType::Decision   => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Surplus    => cumulative[2],
            ColumnType::Artificial => cumulative[3],
        };

        Self { rows, b, cost, row_info, column_group_end, sense }
    }

    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, including all auxiliary columns.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }

    /// Number of decision variables of the original model.
    pub fn nr_variables(&self) -> usize {
        self.column_group_end[ColumnType::Decision]
    }

    /// Number of artificial variables.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_columns() - self.column_group_end[ColumnType::Surplus]
    }

    /// Index of the first artificial column; all columns before it are allowed in a basis.
    pub fn first_artificial_column(&self) -> usize {
        self.column_group_end[ColumnType::Surplus]
    }

    /// Coefficients of a single row.
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.nr_rows());

        &self.rows[i]
    }

    /// Right-hand side.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Minimization cost of all columns.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// Information about how a constraint was transformed.
    pub fn row_info(&self, i: usize) -> &RowInfo {
        debug_assert!(i < self.nr_rows());

        &self.row_info[i]
    }

    /// Direction of optimization of the original model.
    pub fn sense(&self) -> Objective {
        self.sense
    }

    /// Classify a column by type using the column index.
    pub fn column_type(&self, j: usize) -> ColumnType {
        debug_assert!(j < self.nr_columns());

        [ColumnType::Decision, ColumnType::Slack, ColumnType::Surplus, ColumnType::Artificial]
            .into_iter()
            .find(|&column_type| j < self.column_group_end[column_type])
            .unwrap_or(ColumnType::Artificial)
    }

    /// Whether a column belongs to an artificial variable.
    pub fn is_artificial(&self, j: usize) -> bool {
        j >= self.first_artificial_column()
    }

    /// Column of the slack or surplus variable of each row, ordered by row.
    pub fn slack_roster(&self) -> Vec<Option<usize>> {
        self.row_info.iter().map(|info| info.slack).collect()
    }

    /// Column of the artificial variable of each row, ordered by row.
    pub fn artificial_roster(&self) -> Vec<Option<usize>> {
        self.row_info.iter().map(|info| info.artificial).collect()
    }

    /// The basis consisting of the slack and artificial columns, ordered by row.
    ///
    /// This basis is feasible because the right-hand side is non-negative.
    pub fn initial_basis(&self) -> Vec<usize> {
        self.row_info.iter().map(RowInfo::initial_basis_column).collect()
    }

    /// Whether two standard forms differ at most in their right-hand side.
    ///
    /// When this holds, a basis of one is also a basis of the other.
    pub fn has_same_structure(&self, other: &Self) -> bool {
        self.sense == other.sense
            && self.column_group_end == other.column_group_end
            && self.row_info == other.row_info
            && self.cost == other.cost
            && self.rows == other.rows
    }
}
