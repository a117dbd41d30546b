//! Integer sequence generation and duplicate scanning.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::hash::Hash;

/// Generate the first `count` terms of the Fibonacci sequence: 0, 1, 1, 2, 3, ….
///
/// A count of zero yields an empty sequence; a count of one yields `[0]`.
/// Negative counts are outside the domain. Terms are `u64`, which bounds the
/// sequence at 94 terms; longer requests fail rather than wrap.
pub fn calculate_fibonacci(count: i64) -> Result<Vec<u64>> {
    if count < 0 {
        return Err(Error::validation_invalid_argument(
            "count",
            "Count must be non-negative",
            Some(count.to_string()),
            None,
        )
        .with_hint("Pass 0 for an empty sequence"));
    }

    let count = count as usize;
    let mut sequence: Vec<u64> = Vec::with_capacity(count);

    for i in 0..count {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => sequence[i - 1]
                .checked_add(sequence[i - 2])
                .ok_or_else(|| {
                    Error::validation_invalid_argument(
                        "count",
                        format!("Sequences longer than {} terms are not representable", i),
                        Some(count.to_string()),
                        None,
                    )
                })?,
        };
        sequence.push(term);
    }

    Ok(sequence)
}

/// Report values that appear more than once, in order of first repeated
/// occurrence.
///
/// Each duplicated value is reported exactly once, however many times it
/// repeats. Equality is by value. The order-preserving inverse of a dedup.
pub fn find_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen: HashSet<&T> = HashSet::new();
    let mut reported: HashSet<&T> = HashSet::new();
    let mut duplicates = Vec::new();

    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            duplicates.push(item.clone());
        }
    }

    duplicates
}
