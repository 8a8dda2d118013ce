use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN values are considered as the greatest ones.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Rounds value to the given precision, e.g. `1000.` keeps three decimal places.
pub fn round_to(value: Float, precision: Float) -> Float {
    (value * precision).round() / precision
}
