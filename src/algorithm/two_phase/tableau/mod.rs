//! # Dense Simplex tableau
//!
//! The problems solved here are small, so the tableau is stored densely and every row is updated
//! with each basis change. Pivot selection helpers for both the primal and the dual method live
//! here as well.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use index_utils::remove_indices;
use itertools::Itertools;
use log::trace;

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::number_types::numerical_precision::{is_negative, snap_to_zero};
use crate::data::linear_program::standard_form::StandardForm;

pub mod kind;

/// Current basis of a `StandardForm`, with the constraint matrix and costs expressed in it.
///
/// Borrows the problem; everything that changes with a pivot is owned.
#[derive(Clone, PartialEq, Debug)]
pub struct Tableau<'provider> {
    /// Problem being solved.
    provider: &'provider StandardForm,

    /// Constraint matrix in terms of the current basis, one `Vec` per row.
    rows: Vec<Vec<f64>>,
    /// Current values of the basic variables, by row.
    b: Vec<f64>,
    /// Relative cost of every column with respect to the current basis.
    relative_cost: Vec<f64>,
    /// Objective function value of the current basic feasible solution.
    objective_value: f64,

    /// Column index of the basic variable of each row.
    basis_indices: Vec<usize>,
    /// Same columns as `basis_indices`, for membership tests.
    basis_columns: HashSet<usize>,
    /// Index of the constraint in the original problem for each row.
    ///
    /// Differs from the row index only after redundant rows have been removed.
    row_constraints: Vec<usize>,

    /// Whether this tableau has an artificial cost row (and is in the first phase of the
    /// two-phase algorithm) or not.
    kind: Kind,
    /// Values closer to zero than this are treated as zero.
    epsilon: f64,
    /// Smallest magnitude of an entry of each column that may be pivoted on.
    ///
    /// Scaled down for columns whose largest coefficient in the problem is smaller than one, so
    /// that a column like `6e-10 x1 >= 1` can still enter the basis.
    pivot_tolerance: Vec<f64>,
}

impl<'provider> Tableau<'provider> {
    /// Create a tableau with the initial basis of the problem.
    ///
    /// The initial basis consists of slack and artificial columns. If there are no artificial
    /// variables, the tableau is immediately non-artificial, as the first phase can be skipped.
    pub fn new(provider: &'provider StandardForm, epsilon: f64) -> Self {
        let kind = if provider.nr_artificial_variables() > 0 {
            Kind::Artificial
        } else {
            Kind::NonArtificial
        };

        Self::with_kind(provider, kind, epsilon)
    }

    fn with_kind(provider: &'provider StandardForm, kind: Kind, epsilon: f64) -> Self {
        let basis_indices = provider.initial_basis();
        let basis_columns = basis_indices.iter().copied().collect();

        let mut tableau = Self {
            provider,
            rows: (0..provider.nr_rows()).map(|i| provider.row(i).to_vec()).collect(),
            b: provider.b().to_vec(),
            relative_cost: Vec::new(),
            objective_value: 0_f64,
            basis_indices,
            basis_columns,
            row_constraints: (0..provider.nr_rows()).collect(),
            kind,
            epsilon,
            pivot_tolerance: pivot_tolerance(provider, epsilon),
        };
        tableau.reset_cost();
        tableau
    }

    /// Create a non-artificial tableau with a given basis.
    ///
    /// This is used to start from the optimal basis of a previous solve. The basis is brought in
    /// one column at a time, each time pivoting on the largest available element.
    ///
    /// # Arguments
    ///
    /// * `basis`: Column indices, one for each row of the problem. Artificial columns are not
    /// allowed.
    ///
    /// # Return value
    ///
    /// `None` if the columns don't form a basis of this problem.
    pub fn new_with_basis(provider: &'provider StandardForm, basis: &[usize], epsilon: f64) -> Option<Self> {
        if basis.len() != provider.nr_rows() {
            return None;
        }
        if basis.iter().any(|&j| j >= provider.first_artificial_column()) {
            return None;
        }
        if basis.iter().collect::<HashSet<_>>().len() != basis.len() {
            return None;
        }

        let mut tableau = Self::with_kind(provider, Kind::NonArtificial, epsilon);
        let mut assigned = vec![false; provider.nr_rows()];
        for &column in basis {
            if tableau.is_in_basis(column) {
                let row = tableau.basis_indices.iter().position(|&j| j == column)?;
                if assigned[row] {
                    return None;
                }
                assigned[row] = true;
                continue;
            }

            let mut best: Option<(usize, f64)> = None;
            for row in (0..tableau.nr_rows()).filter(|&row| !assigned[row]) {
                let magnitude = tableau.rows[row][column].abs();
                if best.is_none_or(|(_, largest)| magnitude > largest) {
                    best = Some((row, magnitude));
                }
            }

            match best {
                Some((row, magnitude)) if magnitude > tableau.pivot_tolerance[column] => {
                    tableau.bring_into_basis(column, row);
                    assigned[row] = true;
                },
                _ => return None,
            }
        }
        tableau.reset_cost();

        Some(tableau)
    }

    /// Switch from the artificial cost row to the cost row of the original problem.
    ///
    /// Should only be called when no artificial variables are in the basis anymore.
    #[must_use]
    pub fn into_non_artificial(mut self) -> Self {
        debug_assert!(!self.has_artificial_in_basis());

        self.kind = Kind::NonArtificial;
        self.reset_cost();
        self
    }

    /// Compute the relative cost and objective value from scratch for the current basis.
    fn reset_cost(&mut self) {
        let cost = self.kind.initial_cost(self.provider);

        let mut relative_cost = cost.clone();
        let mut objective_value = 0_f64;
        for (i, &basis_column) in self.basis_indices.iter().enumerate() {
            let basis_cost = cost[basis_column];
            if basis_cost != 0_f64 {
                for (value, coefficient) in relative_cost.iter_mut().zip(&self.rows[i]) {
                    *value -= basis_cost * coefficient;
                }
                objective_value += basis_cost * self.b[i];
            }
        }
        for &basis_column in &self.basis_indices {
            relative_cost[basis_column] = 0_f64;
        }

        self.relative_cost = relative_cost;
        self.objective_value = objective_value;
    }

    /// Brings a column into the basis by pivoting on a single element, and updates the data
    /// structures holding the collection of basis columns.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column index of the pivot, in range `0` until `self.nr_columns()`.
    /// Is not yet in the basis.
    /// * `pivot_row_index`: Row index of the pivot, in range `0` until `self.nr_rows()`.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot_value = self.rows[pivot_row_index][pivot_column_index];
        assert!(
            pivot_value.abs() > self.pivot_tolerance[pivot_column_index],
            "Pivot element at row {} and column {} is zero: {}", pivot_row_index, pivot_column_index, pivot_value,
        );

        for value in &mut self.rows[pivot_row_index] {
            *value /= pivot_value;
        }
        self.rows[pivot_row_index][pivot_column_index] = 1_f64;
        self.b[pivot_row_index] /= pivot_value;

        let pivot_row = self.rows[pivot_row_index].clone();
        let pivot_b = self.b[pivot_row_index];
        for i in (0..self.nr_rows()).filter(|&i| i != pivot_row_index) {
            let factor = self.rows[i][pivot_column_index];
            if factor != 0_f64 {
                for (value, coefficient) in self.rows[i].iter_mut().zip(&pivot_row) {
                    *value -= factor * coefficient;
                }
                self.rows[i][pivot_column_index] = 0_f64;
                self.b[i] = snap_to_zero(self.b[i] - factor * pivot_b, self.epsilon);
            }
        }

        let factor = self.relative_cost[pivot_column_index];
        if factor != 0_f64 {
            for (value, coefficient) in self.relative_cost.iter_mut().zip(&pivot_row) {
                *value -= factor * coefficient;
            }
            self.relative_cost[pivot_column_index] = 0_f64;
            self.objective_value += factor * pivot_b;
        }

        let leaving_column = self.basis_indices[pivot_row_index];
        self.basis_indices[pivot_row_index] = pivot_column_index;
        self.update_basis_indices(pivot_column_index, leaving_column);

        trace!(
            "{} pivot: column {} enters, column {} leaves at row {}, objective {}",
            self.kind, pivot_column_index, leaving_column, pivot_row_index, self.objective_value,
        );
    }

    /// Swap the leaving column for the entering one in the basis set.
    fn update_basis_indices(&mut self, pivot_column: usize, leaving_column: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(leaving_column < self.nr_columns());

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);
    }

    /// Remove rows from the tableau.
    ///
    /// Used for rows that turned out to be redundant: their basic variable is artificial and
    /// can't be pivoted out.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted row indices without duplicates.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.is_sorted());
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows()));

        for &i in rows {
            self.basis_columns.remove(&self.basis_indices[i]);
        }
        remove_indices(&mut self.rows, rows);
        remove_indices(&mut self.b, rows);
        remove_indices(&mut self.basis_indices, rows);
        remove_indices(&mut self.row_constraints, rows);
    }

    /// Reduced cost of column `j`, zero for basic columns.
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.relative_cost[j]
    }

    /// Column `j` in terms of the current basis, one value per row.
    pub fn generate_column(&self, j: usize) -> Vec<f64> {
        debug_assert!(j < self.nr_columns());

        self.rows.iter().map(|row| row[j]).collect()
    }

    /// Entry `(i, j)` in terms of the current basis.
    pub fn generate_element(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.rows[i][j]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Column index of the basic variable at a row.
    pub fn basis_column_index_for_row(&self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows());

        self.basis_indices[i]
    }

    /// Column indices of the basic variables, ordered by row.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Value of the basic variable at a row.
    pub fn constraint_value(&self, i: usize) -> f64 {
        debug_assert!(i < self.nr_rows());

        self.b[i]
    }

    /// Row of the tableau that corresponds to a constraint of the original problem.
    ///
    /// # Return value
    ///
    /// `None` if the row was removed because it was redundant.
    pub fn row_for_constraint(&self, constraint: usize) -> Option<usize> {
        self.row_constraints.iter().position(|&c| c == constraint)
    }

    /// Whether any rows were removed because they were redundant.
    pub fn has_removed_rows(&self) -> bool {
        self.nr_rows() < self.provider.nr_rows()
    }

    /// Get the current basic solution.
    ///
    /// # Return value
    ///
    /// The value of every column, of length `self.nr_columns()`.
    pub fn current_bfs(&self) -> Vec<f64> {
        let mut values = vec![0_f64; self.nr_columns()];
        for (i, &j) in self.basis_indices.iter().enumerate() {
            values[j] = self.b[i];
        }
        values
    }

    /// Get the cost of the current solution.
    ///
    /// # Note
    ///
    /// This is the value of the cost row of the current kind: the sum of the artificial
    /// variables for an artificial tableau, and the minimization objective otherwise.
    pub fn objective_function_value(&self) -> f64 {
        self.objective_value
    }

    /// Whether any artificial variable is in the basis.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis_indices.iter().any(|&j| self.provider.is_artificial(j))
    }

    /// Rows at which an artificial variable is basic, sorted.
    pub fn artificial_basis_rows(&self) -> Vec<usize> {
        self.basis_indices.iter()
            .positions(|&j| self.provider.is_artificial(j))
            .collect()
    }

    /// Whether all basic variables are non-negative.
    pub fn is_primal_feasible(&self) -> bool {
        self.b.iter().all(|&value| !is_negative(value, self.epsilon))
    }

    /// Whether no column that may enter the basis has a negative relative cost.
    pub fn is_dual_feasible(&self) -> bool {
        (0..self.nr_eligible_columns())
            .all(|j| !is_negative(self.relative_cost[j], self.epsilon))
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of variables in the problem, including artificial variables.
    pub fn nr_columns(&self) -> usize {
        self.provider.nr_columns()
    }

    /// Number of columns that may enter the basis.
    ///
    /// Artificial variables have the highest indices and never (re-)enter the basis.
    pub fn nr_eligible_columns(&self) -> usize {
        self.provider.first_artificial_column()
    }

    /// Problem being solved.
    pub fn provider(&self) -> &'provider StandardForm {
        self.provider
    }

    /// Whether the tableau is in the first or second phase.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Values closer to zero than this are treated as zero.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Entries of column `j` with a magnitude not above this value are not pivoted on.
    pub fn pivot_tolerance(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.pivot_tolerance[j]
    }

    /// Minimum ratio test for an entering column.
    ///
    /// Only rows with a positive entry in `column` qualify. Of those, the row minimizing
    /// `b[i] / column[i]` is chosen, the lowest index winning ties.
    ///
    /// `None` means the column can grow without bound.
    pub fn select_primal_pivot_row(&self, column_index: usize, column: &[f64]) -> Option<usize> {
        debug_assert_eq!(column.len(), self.nr_rows());

        let tolerance = self.pivot_tolerance(column_index);
        let mut min_values: Option<(usize, f64)> = None;
        for (row, &xij) in column.iter().enumerate() {
            if xij > tolerance {
                let ratio = self.b[row] / xij;
                if min_values.is_none_or(|(_, min_ratio)| ratio < min_ratio - self.epsilon) {
                    min_values = Some((row, ratio));
                }
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Minimum ratio test with Bland's tie breaking: among rows with equal ratio, the one whose
    /// basic column has the lowest index leaves.
    pub fn select_primal_pivot_row_bland(&self, column_index: usize, column: &[f64]) -> Option<usize> {
        debug_assert_eq!(column.len(), self.nr_rows());

        let tolerance = self.pivot_tolerance(column_index);
        // (row, ratio, basic column of that row)
        let mut best: Option<(usize, f64, usize)> = None;
        for (row, &xij) in column.iter().enumerate() {
            if xij <= tolerance {
                continue;
            }

            let candidate = (row, self.b[row] / xij, self.basis_indices[row]);
            best = match best {
                None => Some(candidate),
                Some((_, ratio, leaving)) => {
                    let tie = (candidate.1 - ratio).abs() <= self.epsilon;
                    if (tie && candidate.2 < leaving) || (!tie && candidate.1 < ratio) {
                        Some(candidate)
                    } else {
                        best
                    }
                },
            };
        }

        best.map(|(row, _, _)| row)
    }

    /// Determine the row to pivot on in the dual simplex method.
    ///
    /// This is the row with the most negative basic variable value, ties broken by the lowest row
    /// index.
    ///
    /// # Return value
    ///
    /// `None` if the current basis is primal feasible.
    pub fn select_dual_pivot_row(&self) -> Option<usize> {
        let mut min_values: Option<(usize, f64)> = None;
        for (row, &value) in self.b.iter().enumerate() {
            if is_negative(value, self.epsilon) && min_values.is_none_or(|(_, minimum)| value < minimum) {
                min_values = Some((row, value));
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Determine the column to pivot on in the dual simplex method, given the row.
    ///
    /// Among the columns with a negative coefficient in the row, the one with the smallest ratio
    /// between relative cost and the absolute value of that coefficient keeps the relative costs
    /// non-negative. Ties are broken by the lowest column index.
    ///
    /// # Return value
    ///
    /// `None` if there is no such column, which proves the problem infeasible.
    pub fn select_dual_pivot_column(&self, row: usize) -> Option<usize> {
        debug_assert!(row < self.nr_rows());

        let mut min_values: Option<(usize, f64)> = None;
        for j in (0..self.nr_eligible_columns()).filter(|&j| !self.is_in_basis(j)) {
            let coefficient = self.rows[row][j];
            if coefficient < -self.pivot_tolerance[j] {
                let ratio = self.relative_cost[j].max(0_f64) / -coefficient;
                if min_values.is_none_or(|(_, min_ratio)| ratio < min_ratio - self.epsilon) {
                    min_values = Some((j, ratio));
                }
            }
        }

        min_values.map(|(column, _)| column)
    }
}

/// Pivot tolerance of every column of a problem.
///
/// The tolerance is `epsilon` times the largest magnitude in the column, if that is below one.
/// Empty columns get `epsilon` itself.
fn pivot_tolerance(provider: &StandardForm, epsilon: f64) -> Vec<f64> {
    (0..provider.nr_columns())
        .map(|j| {
            let scale = (0..provider.nr_rows())
                .map(|i| provider.row(i)[j].abs())
                .fold(0_f64, f64::max);
            if scale > 0_f64 { epsilon * scale.min(1_f64) } else { epsilon }
        })
        .collect()
}

/// Whether the basis is consistent and primal feasible, within a loose tolerance.
///
/// Used in debug assertions.
pub fn is_in_basic_feasible_solution_state(tableau: &Tableau) -> bool {
    let tolerance = (tableau.epsilon * 1e3).max(1e-6);

    // One distinct basic column per row
    if tableau.basis_columns.len() != tableau.nr_rows() {
        return false;
    }

    // Basis columns are unit vectors
    let unit_columns = (0..tableau.nr_rows()).all(|i| {
        let j = tableau.basis_indices[i];
        tableau.generate_column(j).iter().enumerate().all(|(k, &value)| {
            let expected = if k == i { 1_f64 } else { 0_f64 };
            (value - expected).abs() <= tolerance
        })
    });

    // Basis columns have relative cost zero, `b` >= 0
    unit_columns
        && tableau.basis_indices.iter().all(|&j| tableau.relative_cost[j].abs() <= tolerance)
        && tableau.b.iter().all(|&value| value >= -tolerance)
}

impl Display for Tableau<'_> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let format_value = |value: f64| format!("{:.4}", value);

        // Header, cost row and constraint rows, each as (label, b, entries)
        let mut lines = vec![(
            String::new(),
            "b".to_string(),
            (0..self.nr_columns()).map(|j| j.to_string()).collect::<Vec<_>>(),
        )];
        lines.push((
            "cost".to_string(),
            format_value(self.objective_value),
            self.relative_cost.iter().copied().map(format_value).collect(),
        ));
        for (i, row) in self.rows.iter().enumerate() {
            lines.push((i.to_string(), format_value(self.b[i]), row.iter().copied().map(format_value).collect()));
        }

        let label_width = lines.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0);
        let b_width = lines.iter().map(|(_, b, _)| b.len()).max().unwrap_or(1);
        let widths = (0..self.nr_columns())
            .map(|j| lines.iter().map(|(_, _, entries)| entries[j].len()).max().unwrap_or(1))
            .collect::<Vec<_>>();
        let separator = "-".repeat(label_width + b_width + 5 + widths.iter().map(|w| w + 1).sum::<usize>());

        writeln!(f, "=== Tableau ({}) ===", self.kind)?;
        for (index, (label, b, entries)) in lines.iter().enumerate() {
            write!(f, "{:>lw$} | {:^bw$} |", label, b, lw = label_width, bw = b_width)?;
            for (entry, &width) in entries.iter().zip(&widths) {
                write!(f, " {:^w$}", entry, w = width)?;
            }
            writeln!(f)?;
            if index < 2 {
                writeln!(f, "{}", separator)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{}", self.basis_indices.iter().enumerate().map(|(i, j)| format!("({}, {})", i, j)).join(", "))
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
    use crate::algorithm::two_phase::tableau::kind::Kind;
    use crate::data::number_types::numerical_precision::EPSILON;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn cost() {
        let provider = problem_2::standard_form();
        let artificial_tableau = Tableau::new(&provider, EPSILON);
        assert_eq!(artificial_tableau.kind(), Kind::Artificial);
        // Sum of the right-hand side
        assert_eq!(artificial_tableau.objective_function_value(), 11f64);

        let provider = problem_1::standard_form();
        let tableau = Tableau::new(&provider, EPSILON);
        assert_eq!(tableau.kind(), Kind::NonArtificial);
        assert_eq!(tableau.objective_function_value(), 0f64);
    }

    #[test]
    fn relative_cost() {
        let provider = problem_2::standard_form();
        let artificial_tableau = Tableau::new(&provider, EPSILON);
        assert_eq!(artificial_tableau.relative_cost(0), -3f64);
        assert_eq!(artificial_tableau.relative_cost(1), -3f64);
        assert_eq!(artificial_tableau.relative_cost(2), 1f64);
        assert_eq!(artificial_tableau.relative_cost(4), 0f64);

        let provider = problem_1::standard_form();
        let tableau = Tableau::new(&provider, EPSILON);
        assert_eq!(tableau.relative_cost(0), -3f64);
        assert_eq!(tableau.relative_cost(1), -5f64);
        assert_eq!(tableau.relative_cost(2), 0f64);
    }

    #[test]
    fn generate_column() {
        let provider = problem_1::standard_form();
        let tableau = Tableau::new(&provider, EPSILON);
        assert_eq!(tableau.generate_column(0), vec![1f64, 0f64, 3f64]);
        assert_eq!(tableau.generate_element(2, 1), 2f64);
        assert!(is_in_basic_feasible_solution_state(&tableau));
    }

    #[test]
    fn find_pivot_row() {
        let provider = problem_1::standard_form();
        let tableau = Tableau::new(&provider, EPSILON);

        // b = [4, 12, 18]
        assert_eq!(tableau.select_primal_pivot_row(0, &[1f64, 0f64, 3f64]), Some(0));
        assert_eq!(tableau.select_primal_pivot_row(0, &[0f64, 2f64, 2f64]), Some(1));
        assert_eq!(tableau.select_primal_pivot_row(0, &[-1f64, 0f64, 0f64]), None);
        // Tie between rows 1 and 2, lowest row wins
        assert_eq!(tableau.select_primal_pivot_row(0, &[0f64, 2f64, 3f64]), Some(1));
        assert_eq!(tableau.select_primal_pivot_row_bland(0, &[0f64, 2f64, 3f64]), Some(1));
    }

    #[test]
    fn bring_into_basis() {
        let provider = problem_1::standard_form();
        let mut tableau = Tableau::new(&provider, EPSILON);

        let column = tableau.generate_column(1);
        let row = tableau.select_primal_pivot_row(1, &column).unwrap();
        assert_eq!(row, 1);
        tableau.bring_into_basis(1, row);

        assert!(tableau.is_in_basis(1));
        assert!(!tableau.is_in_basis(3));
        assert_eq!(tableau.basis_indices(), &[2, 1, 4]);
        assert_eq!(tableau.objective_function_value(), -30f64);
        assert_eq!(tableau.constraint_value(1), 6f64);
        assert_eq!(tableau.constraint_value(2), 6f64);
        assert_eq!(tableau.relative_cost(3), 2.5f64);
        assert!(is_in_basic_feasible_solution_state(&tableau));

        tableau.bring_into_basis(0, 2);
        assert_eq!(tableau.current_bfs()[..2], [2f64, 6f64]);
        assert_abs_diff_eq!(tableau.objective_function_value(), -36f64, epsilon = 1e-12);
        assert!(tableau.is_dual_feasible());
    }

    #[test]
    fn new_with_basis() {
        let provider = problem_1::standard_form();
        let tableau = Tableau::new_with_basis(&provider, &[2, 1, 0], EPSILON).unwrap();

        assert!(tableau.is_primal_feasible());
        assert!(tableau.is_dual_feasible());
        let bfs = tableau.current_bfs();
        assert_abs_diff_eq!(bfs[0], 2f64, epsilon = 1e-12);
        assert_abs_diff_eq!(bfs[1], 6f64, epsilon = 1e-12);
        assert_abs_diff_eq!(tableau.objective_function_value(), -36f64, epsilon = 1e-12);

        // Not a basis: too few columns, duplicates or artificial columns
        assert!(Tableau::new_with_basis(&provider, &[0, 1], EPSILON).is_none());
        assert!(Tableau::new_with_basis(&provider, &[0, 0, 1], EPSILON).is_none());
        let provider = problem_2::standard_form();
        assert!(Tableau::new_with_basis(&provider, &[0, 1, 4], EPSILON).is_none());
    }

    #[test]
    fn singular_basis() {
        // Columns 0 and 1 of `x1 + x2 <= 1, 2 x1 + 2 x2 <= 2` are linearly dependent
        let provider = problem_1::dependent_standard_form();
        assert!(Tableau::new_with_basis(&provider, &[0, 1], EPSILON).is_none());
    }

    #[test]
    fn dual_pivot() {
        // Optimal basis of the model with the third right-hand side lowered from 18 to 6
        let changed = problem_1::standard_form_with_rhs(&[4f64, 12f64, 6f64]);
        let tableau = Tableau::new_with_basis(&changed, &[2, 1, 0], EPSILON).unwrap();
        assert!(!tableau.is_primal_feasible());
        assert!(tableau.is_dual_feasible());

        let row = tableau.select_dual_pivot_row().unwrap();
        assert_eq!(tableau.basis_column_index_for_row(row), 0);
        assert_eq!(tableau.select_dual_pivot_column(row), Some(3));
    }

    #[test]
    fn remove_rows() {
        let provider = problem_1::standard_form();
        let mut tableau = Tableau::new(&provider, EPSILON);
        tableau.remove_rows(&[1]);

        assert_eq!(tableau.nr_rows(), 2);
        assert!(tableau.has_removed_rows());
        assert_eq!(tableau.row_for_constraint(2), Some(1));
        assert_eq!(tableau.row_for_constraint(1), None);
        assert!(!tableau.is_in_basis(3));
    }

    #[test]
    fn pivot_tolerance() {
        let provider = problem_1::standard_form();
        let tableau = Tableau::new(&provider, EPSILON);
        assert_eq!(tableau.pivot_tolerance(0), EPSILON);
        assert_eq!(tableau.pivot_tolerance(2), EPSILON);

        let provider = problem_1::standard_form_with_rhs(&[4f64, 12f64, 18f64]);
        assert_eq!(Tableau::new(&provider, 1e-6).pivot_tolerance(1), 1e-6);
    }

    #[test]
    fn display() {
        let provider = problem_1::standard_form();
        let tableau = Tableau::new(&provider, EPSILON);
        let text = tableau.to_string();
        assert!(text.starts_with("=== Tableau (non-artificial) ==="));
        assert!(text.contains("(0, 2), (1, 3), (2, 4)"));
    }
}
