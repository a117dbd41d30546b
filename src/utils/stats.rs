//! Summary statistics over numeric sequences.

use crate::error::{Error, Result};
use serde::Serialize;

/// Summary of a numeric sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Compute mean, median, min and max for a non-empty sequence.
///
/// The median of an even-length sequence is the average of the two middle
/// values after sorting. An empty sequence has no meaningful statistics and
/// is outside the domain. Ordering is total, so the function never panics.
pub fn calculate_statistics(numbers: &[f64]) -> Result<Statistics> {
    if numbers.is_empty() {
        return Err(Error::validation_invalid_argument(
            "numbers",
            "Cannot summarize an empty sequence",
            None,
            None,
        ));
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };

    Ok(Statistics {
        mean,
        median,
        min: sorted[0],
        max: sorted[n - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn summarizes_odd_length_sequence() {
        let summary = calculate_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(
            summary,
            Statistics {
                mean: 3.0,
                median: 3.0,
                min: 1.0,
                max: 5.0
            }
        );
    }

    #[test]
    fn median_averages_middle_pair_for_even_length() {
        let summary = calculate_statistics(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.median, 2.5);
    }

    #[test]
    fn summarizes_single_value() {
        let summary = calculate_statistics(&[42.0]).unwrap();
        assert_eq!(
            summary,
            Statistics {
                mean: 42.0,
                median: 42.0,
                min: 42.0,
                max: 42.0
            }
        );
    }

    #[test]
    fn handles_negative_values() {
        let summary = calculate_statistics(&[-5.0, -3.0, 0.0, 3.0, 5.0]).unwrap();
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert_eq!(summary.min, -5.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn ignores_input_order() {
        let summary = calculate_statistics(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn summarizes_fractional_values() {
        let summary = calculate_statistics(&[1.5, 2.5, 3.5]).unwrap();
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.median, 2.5);
    }

    #[test]
    fn rejects_empty_sequence() {
        let err = calculate_statistics(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }
}
