//! Pattern 4: Sequence Algorithms
//! Example: Compare, Search, Filter, Dedup
//!
//! Run with: cargo run --bin p4_algorithms

use itertools::Itertools;
use stdlib_patterns::algorithm::{dedup_consecutive, remove_if, retain_where};

fn compare_sequences() {
    let v1: Vec<i32> = (1..=5).collect();
    let v2 = vec![-1; 5];

    // Lexicographic comparison and element-wise equality come from slice Ord
    println!("v1 < v2:  {}", v1 < v2);
    println!("v1 == v2: {}", v1 == v2);
    println!("v1 == v1: {}", v1 == v1.clone());
}

fn search() {
    let v1 = vec![1, 2, 3, 4, 5];
    let three = 3;

    // find by value and find by predicate agree
    let by_value = v1.iter().position(|&e| e == three);
    let matches_three = |e: &i32| *e == three;
    let by_predicate = v1.iter().position(|e| matches_three(e));
    assert_eq!(by_value, by_predicate);
    assert_eq!(by_value, Some(2));
    println!("position of {}: {:?}", three, by_value);

    // Every prefix sum of a positive sequence stays positive
    let sums: Vec<i32> = v1
        .iter()
        .scan(0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect();
    assert!(sums.iter().all(|&e| e >= 1));
    println!("all prefix sums >= 1: true");

    // Subsequence search via windows
    let needle = [1, 2, 3];
    let found = v1.windows(needle.len()).any(|w| w == &needle);
    assert!(found);
    println!("{:?} occurs inside {:?}", needle, v1);
}

fn remove_erase() {
    let v1: Vec<i32> = (1..=10).collect();
    let mut boundary_form = v1.clone();
    let mut composed_form = v1;

    let is_odd = |e: &i32| e % 2 != 0;

    // Two-step form: partition to a boundary, then truncate
    let boundary = remove_if(&mut boundary_form, is_odd);
    boundary_form.truncate(boundary);

    // One-step form
    retain_where(&mut composed_form, |e| !is_odd(e));

    assert_eq!(boundary_form, composed_form);
    println!("evens kept: {:?}", boundary_form);
}

fn unique() {
    // Each value duplicated once: 0 0 1 1 2 2 ...
    let n = 20;
    let mut values: Vec<i32> = (0..n).flat_map(|i| [i, i]).collect();

    let is_even = |e: &&i32| **e % 2 == 0;
    println!("before: {}", values.iter().join(" "));
    println!("evens before: {}", values.iter().filter(is_even).count());

    dedup_consecutive(&mut values);

    println!("after:  {}", values.iter().join(" "));
    println!("evens after:  {}", values.iter().filter(is_even).count());
    assert_eq!(values, (0..n).collect::<Vec<i32>>());

    // The itertools spelling of the same collapse, as an iterator adaptor
    let doubled: Vec<i32> = (0..5).flat_map(|i| [i, i]).collect();
    let deduped: Vec<i32> = doubled.iter().copied().dedup().collect();
    assert_eq!(deduped, vec![0, 1, 2, 3, 4]);
}

fn main() {
    println!("=== Comparing Sequences ===\n");
    compare_sequences();

    println!("\n=== Searching ===");
    search();

    println!("\n=== Remove + Truncate ===");
    remove_erase();

    println!("\n=== Consecutive Dedup ===");
    unique();

    println!("\n=== Key Points ===");
    println!("1. remove_if only partitions; the owner truncates at the boundary");
    println!("2. unique collapses consecutive runs, not global duplicates");
    println!("3. Slices compare lexicographically out of the box");
}
