/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements nearest-value search helpers shared by depth snapping and log lookup.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

/// Returns the index of the minimum (optionally weighted) value.
///
/// Comparison is strict, so the first of several equal minima wins.
///
/// # Examples
///
/// ```
/// use ferreus_survey_utils::argmin;
///
/// let data = [3.0, 1.0, 2.0, 1.0];
///
/// assert_eq!(argmin(&data, &None), 1);
/// ```
#[inline(always)]
pub fn argmin<T>(data: &[T], weights: &Option<&[T]>) -> usize
where
    T: Copy + PartialOrd + Default + std::ops::Add<Output = T>,
{
    assert!(!data.is_empty(), "Data slice cannot be empty");

    let mut min_index = 0;
    let mut min_value = data[0];
    if let Some(w) = weights {
        min_value = min_value + w[0];
    }

    for (idx, &value) in data.iter().enumerate().skip(1) {
        let mut current_value = value;
        if let Some(w) = weights {
            current_value = current_value + w[idx];
        }

        if current_value < min_value {
            min_value = current_value;
            min_index = idx;
        }
    }

    min_index
}

/// Index of the value closest to `target` by linear scan.
///
/// Ties go to the first candidate visited.
/// Returns `None` for an empty slice.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let distances: Vec<f64> = values.iter().map(|v| (v - target).abs()).collect();

    Some(argmin(&distances, &None))
}

/// Index of the value closest to `target` in an ascending slice.
///
/// Gives the same answer as [`nearest_index`] on ascending input: on an exact
/// tie between neighbours the smaller (earlier) one wins, and among repeated
/// values the first occurrence is returned.
pub fn nearest_index_sorted(values: &[f64], target: f64) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    // First position whose value is >= target.
    let upper = values.partition_point(|v| *v < target);

    if upper == 0 {
        return Some(0);
    }
    if upper == values.len() {
        return Some(first_of_run(values, values.len() - 1));
    }

    let below = first_of_run(values, upper - 1);
    let above = upper;

    match (values[above] - target).abs() < (target - values[below]).abs() {
        true => Some(above),
        false => Some(below),
    }
}

/// Walks back to the first index of a run of equal values ending at `idx`.
fn first_of_run(values: &[f64], mut idx: usize) -> usize {
    while idx > 0 && values[idx - 1] == values[idx] {
        idx -= 1;
    }
    idx
}

/// True if every value is greater than or equal to its predecessor.
pub fn is_sorted_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn argmin_prefers_first_minimum() {
        assert_eq!(argmin(&[2, 0, 5, 0], &None), 1);
        assert_eq!(argmin(&[4.0, 1.0, 1.0], &None), 1);

        let weights = [0.0, 5.0, 0.0];
        assert_eq!(argmin(&[4.0, 1.0, 3.0], &Some(&weights)), 2);
    }

    #[test]
    fn nearest_breaks_ties_towards_smaller() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(nearest_index(&values, 15.0), Some(0));
        assert_eq!(nearest_index(&values, 25.0), Some(1));
        assert_eq!(nearest_index_sorted(&values, 15.0), Some(0));
        assert_eq!(nearest_index_sorted(&values, 25.0), Some(1));
    }

    #[test]
    fn nearest_handles_edges() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(nearest_index(&values, -100.0), Some(0));
        assert_eq!(nearest_index(&values, 100.0), Some(2));
        assert_eq!(nearest_index_sorted(&values, -100.0), Some(0));
        assert_eq!(nearest_index_sorted(&values, 100.0), Some(2));
        assert_eq!(nearest_index(&[], 1.0), None);
        assert_eq!(nearest_index_sorted(&[], 1.0), None);
    }

    #[test]
    fn nearest_sorted_returns_first_of_repeated_values() {
        let values = [1.0, 2.0, 2.0, 2.0, 5.0];
        assert_eq!(nearest_index(&values, 2.4), Some(1));
        assert_eq!(nearest_index_sorted(&values, 2.4), Some(1));
        assert_eq!(nearest_index_sorted(&values, 2.0), Some(1));
        assert_eq!(nearest_index_sorted(&[3.0, 3.0], 9.0), Some(0));
    }

    #[test]
    fn binary_search_matches_linear_scan() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let n = rng.random_range(1..40);
            // Integer-valued depths so exact ties and repeats actually occur.
            let mut values: Vec<f64> = (0..n).map(|_| rng.random_range(0..60) as f64).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());

            for _ in 0..20 {
                let target = rng.random_range(-10..70) as f64 * 0.5;
                assert_eq!(
                    nearest_index_sorted(&values, target),
                    nearest_index(&values, target),
                    "values={:?} target={}",
                    values,
                    target
                );
            }
        }
    }

    #[test]
    fn sortedness() {
        assert!(is_sorted_ascending(&[]));
        assert!(is_sorted_ascending(&[1.0, 1.0, 2.0]));
        assert!(!is_sorted_ascending(&[1.0, 0.5]));
    }
}
