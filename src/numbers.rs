//! Sum and average over the configured number list.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberSummary {
    pub sum: f64,
    /// `sum / count`; NaN when the list is empty.
    pub average: f64,
}

/// Accumulate left to right and divide by the element count.
///
/// An empty list is not an error: the sum is `0` and the average is the
/// IEEE-754 result of `0 / 0`, which is NaN.
pub fn aggregate(numbers: &[f64]) -> NumberSummary {
    let mut sum = 0.0;
    for value in numbers {
        sum += value;
    }
    let average = sum / numbers.len() as f64;
    NumberSummary { sum, average }
}

/// Render a value for the output sink.
///
/// Finite values use the shortest round-tripping decimal with no exponent
/// (`10`, `2.5`, `0.1`). Non-finite values render as `NaN`, `+Inf`, `-Inf`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else if value == 0.0 {
        // Collapses -0 to 0.
        "0".to_string()
    } else {
        value.to_string()
    }
}
