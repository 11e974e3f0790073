//! Pattern 3: Reductions and Scans
//!
//! Three families of operations over numeric sequences:
//!
//! 1. Reductions combine everything into one value:
//!    [`reduce`], [`inner_product`], [`transform_reduce`], [`par_reduce`]
//! 2. Scans are reductions that keep every intermediate:
//!    [`inclusive_scan`], [`exclusive_scan`], [`transform_inclusive_scan`]
//! 3. Adjacent operations combine every consecutive pair:
//!    [`adjacent_difference`]

use rayon::prelude::*;
use std::ops::{Add, Mul};

/// Left fold: `combine(..combine(combine(init, items[0]), items[1])..)`.
pub fn reduce<T, F>(items: &[T], init: T, mut combine: F) -> T
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    items.iter().fold(init, |acc, &item| combine(acc, item))
}

/// Parallel reduction. `combine` must be associative and `identity` its
/// identity element; under those conditions the result equals the
/// sequential [`reduce`] regardless of how rayon splits the work.
pub fn par_reduce<T, F>(items: &[T], identity: T, combine: F) -> T
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Send + Sync,
{
    items.par_iter().copied().reduce(|| identity, &combine)
}

/// Running combination including the current element:
/// `out[i] = combine(out[i - 1], items[i])`, `out[0] = items[0]`.
pub fn inclusive_scan<T, F>(items: &[T], mut combine: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    let mut out = Vec::with_capacity(items.len());
    let mut acc: Option<T> = None;
    for &item in items {
        let next = match acc {
            Some(prev) => combine(prev, item),
            None => item,
        };
        acc = Some(next);
        out.push(next);
    }
    out
}

/// Running combination excluding the current element; `seed` occupies
/// position 0 and the last input element never contributes.
pub fn exclusive_scan<T, F>(items: &[T], seed: T, mut combine: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    let mut out = Vec::with_capacity(items.len());
    let mut acc = seed;
    for &item in items {
        out.push(acc);
        acc = combine(acc, item);
    }
    out
}

/// Inclusive scan over transformed elements.
pub fn transform_inclusive_scan<T, U, M, F>(
    items: &[T],
    mut transform: M,
    mut combine: F,
) -> Vec<U>
where
    T: Copy,
    U: Copy,
    M: FnMut(T) -> U,
    F: FnMut(U, U) -> U,
{
    let mut out = Vec::with_capacity(items.len());
    let mut acc: Option<U> = None;
    for &item in items {
        let mapped = transform(item);
        let next = match acc {
            Some(prev) => combine(prev, mapped),
            None => mapped,
        };
        acc = Some(next);
        out.push(next);
    }
    out
}

/// Element-wise transform of two equal-length sequences followed by a
/// reduction. Lengths must match; mismatches are a caller bug
/// (debug-asserted, excess elements of the longer input are ignored in
/// release builds).
pub fn transform_reduce<T, U, F, G>(
    a: &[T],
    b: &[T],
    init: U,
    mut combine: F,
    mut transform: G,
) -> U
where
    T: Copy,
    F: FnMut(U, U) -> U,
    G: FnMut(T, T) -> U,
{
    debug_assert_eq!(a.len(), b.len(), "input sequences must have equal length");
    a.iter()
        .zip(b)
        .fold(init, |acc, (&x, &y)| combine(acc, transform(x, y)))
}

/// Multiply-then-sum pairing of two equal-length sequences.
pub fn inner_product<T>(a: &[T], b: &[T], init: T) -> T
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    transform_reduce(a, b, init, |acc, term| acc + term, |x, y| x * y)
}

/// `out[0] = items[0]`, `out[i] = combine(items[i], items[i - 1])`.
///
/// With subtraction as `combine`, [`inclusive_scan`] with addition is the
/// inverse: prefix-summing the differences reconstructs the input.
pub fn adjacent_difference<T, F>(items: &[T], mut combine: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    let mut out = Vec::with_capacity(items.len());
    if let Some((&first, rest)) = items.split_first() {
        out.push(first);
        let mut prev = first;
        for &item in rest {
            out.push(combine(item, prev));
            prev = item;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reduce_sums_like_the_closed_form() {
        let values = [1, 2, 3, 4, 5];
        let n = values.len() as i32;
        assert_eq!(reduce(&values, 0, |a, b| a + b), 15);
        assert_eq!(reduce(&values, 0, |a, b| a + b), n * (n + 1) / 2);
    }

    #[test]
    fn reduce_of_empty_is_init() {
        assert_eq!(reduce(&[], 42, |a: i32, b| a + b), 42);
    }

    #[test]
    fn par_reduce_matches_sequential_for_associative_ops() {
        let values: Vec<i64> = (1..=10_000).collect();
        assert_eq!(
            par_reduce(&values, 0, |a, b| a + b),
            reduce(&values, 0, |a, b| a + b)
        );
    }

    #[test]
    fn inclusive_scan_keeps_intermediates() {
        let sums = inclusive_scan(&[1, 2, 3, 4, 5], |a, b| a + b);
        assert_eq!(sums, vec![1, 3, 6, 10, 15]);
    }

    #[test]
    fn inclusive_scan_last_equals_reduce() {
        let values = [3, 1, 4, 1, 5, 9];
        let sums = inclusive_scan(&values, |a, b| a + b);
        assert_eq!(*sums.last().unwrap(), reduce(&values, 0, |a, b| a + b));
    }

    #[test]
    fn exclusive_scan_starts_at_the_seed() {
        let sums = exclusive_scan(&[1, 2, 3, 4, 5], 0, |a, b| a + b);
        assert_eq!(sums, vec![0, 1, 3, 6, 10]);
        assert_eq!(sums.len(), 5);
    }

    #[test]
    fn transform_inclusive_scan_of_squares() {
        let values = [1, 2, 3, 4, 5];
        let squared_sums = transform_inclusive_scan(&values, |x| x * x, |a, b| a + b);
        assert_eq!(squared_sums, vec![1, 5, 14, 30, 55]);
        let manual = reduce(&values, 0, |acc, x| acc + x * x);
        assert_eq!(*squared_sums.last().unwrap(), manual);
    }

    #[test]
    fn inner_product_of_ones_negates_the_sum() {
        let v1 = [1, 2, 3, 4, 5];
        let v2 = [-1, -1, -1, -1, -1];
        assert_eq!(inner_product(&v1, &v2, 0), -15);
    }

    #[test]
    fn transform_reduce_generalizes_inner_product() {
        let v1 = [1, 2, 3, 4, 5];
        let v2 = [-1, -1, -1, -1, -1];
        let general = transform_reduce(&v1, &v2, 0, |acc, t| acc + t, |x, y| x * y);
        assert_eq!(general, inner_product(&v1, &v2, 0));
    }

    #[test]
    fn adjacent_difference_then_prefix_sum_round_trips() {
        let values = [2, 4, 6, 8, 11];
        let diffs = adjacent_difference(&values, |current, prev| current - prev);
        assert_eq!(diffs, vec![2, 2, 2, 2, 3]);
        let rebuilt = inclusive_scan(&diffs, |a, b| a + b);
        assert_eq!(rebuilt, values.to_vec());
    }

    #[test]
    fn scans_of_empty_input_are_empty() {
        assert!(inclusive_scan(&[], |a: i32, b| a + b).is_empty());
        assert!(exclusive_scan(&[], 0, |a: i32, b| a + b).is_empty());
        assert!(adjacent_difference(&[], |a: i32, b| a - b).is_empty());
    }

    proptest! {
        #[test]
        fn reduce_matches_a_manual_left_fold(
            values in proptest::collection::vec(-1_000i64..1_000, 0..64),
        ) {
            let mut manual = 0i64;
            for &value in &values {
                manual += value;
            }
            prop_assert_eq!(reduce(&values, 0, |a, b| a + b), manual);
        }

        #[test]
        fn inclusive_scan_agrees_with_reduce_at_every_prefix(
            values in proptest::collection::vec(-1_000i64..1_000, 1..32),
        ) {
            let sums = inclusive_scan(&values, |a, b| a + b);
            for (i, &sum) in sums.iter().enumerate() {
                prop_assert_eq!(sum, reduce(&values[..=i], 0, |a, b| a + b));
            }
        }

        #[test]
        fn exclusive_scan_is_inclusive_scan_shifted_by_the_seed(
            values in proptest::collection::vec(-1_000i64..1_000, 1..32),
            seed in -100i64..100,
        ) {
            let exclusive = exclusive_scan(&values, seed, |a, b| a + b);
            let inclusive = inclusive_scan(&values, |a, b| a + b);
            prop_assert_eq!(exclusive[0], seed);
            for i in 1..values.len() {
                prop_assert_eq!(exclusive[i], seed + inclusive[i - 1]);
            }
        }
    }
}
