//! Helper methods for the accuracy of floating point calculations.
use num_traits::Float;

/// Default tolerance used when comparing computed values against zero.
pub const EPSILON: f64 = 1e-9;

/// Maximum number of mediants tried by `close_heuristic_fraction` before giving up.
const MAX_FRACTION_DEPTH: usize = 64;

/// Whether a value is zero, up to the tolerance.
pub fn is_zero<F: Float>(value: F, epsilon: F) -> bool {
    value.abs() <= epsilon
}

/// Whether a value is negative beyond the tolerance.
pub fn is_negative<F: Float>(value: F, epsilon: F) -> bool {
    value < -epsilon
}

/// Whether a value is positive beyond the tolerance.
pub fn is_positive<F: Float>(value: F, epsilon: F) -> bool {
    value > epsilon
}

/// Replace values within the tolerance of zero by an exact zero.
pub fn snap_to_zero<F: Float>(value: F, epsilon: F) -> F {
    if is_zero(value, epsilon) { F::zero() } else { value }
}

/// Find a simple fraction close to a value.
///
/// Values computed by the simplex method are rational in the input data, but accumulate rounding
/// errors while pivoting. A Stern-Brocot search finds the fraction with the smallest denominator
/// within `epsilon` of the value. When no such fraction is found within a bounded number of
/// steps, the value is returned unchanged.
///
/// # Arguments
///
/// * `value`: Value to clean up.
/// * `epsilon`: Maximum distance between the value and the returned fraction, should be positive.
pub fn close_heuristic_fraction<F: Float>(value: F, epsilon: F) -> F {
    debug_assert!(epsilon > F::zero());

    if !value.is_finite() {
        return value;
    }

    let floor = value.floor();
    let fraction = value - floor;

    let close_fraction = if fraction <= epsilon {
        // Close to zero
        F::zero()
    } else if fraction >= F::one() - epsilon {
        // Close to one
        F::one()
    } else {
        // Somewhere in the middle
        let (mut numerator_lb, mut numerator_ub) = (0_u64, 1_u64);
        let (mut denominator_lb, mut denominator_ub) = (1_u64, 1_u64);
        let (mut numerator_middle, mut denominator_middle) = (1_u64, 2_u64);

        let mut found = false;
        for _ in 0..MAX_FRACTION_DEPTH {
            let (Some(numerator), Some(denominator)) = (F::from(numerator_middle), F::from(denominator_middle)) else {
                break;
            };

            if denominator * (fraction + epsilon) < numerator {
                numerator_ub = numerator_middle;
                denominator_ub = denominator_middle;
            } else if denominator * (fraction - epsilon) > numerator {
                numerator_lb = numerator_middle;
                denominator_lb = denominator_middle;
            } else {
                found = true;
                break;
            }

            numerator_middle = numerator_lb + numerator_ub;
            denominator_middle = denominator_lb + denominator_ub;
        }

        match (found, F::from(numerator_middle), F::from(denominator_middle)) {
            (true, Some(numerator), Some(denominator)) => numerator / denominator,
            _ => fraction,
        }
    };

    floor + close_fraction
}
