//! Pattern 3: Reductions and Scans
//! Example: The Three Families of Numeric Sequence Operations
//!
//! Run with: cargo run --bin p3_numeric

use itertools::izip;
use stdlib_patterns::numeric::{
    adjacent_difference, exclusive_scan, inclusive_scan, inner_product, par_reduce, reduce,
    transform_inclusive_scan, transform_reduce,
};

fn print_sequence(label: &str, values: &[i32]) {
    println!("{:<28} {:?}", label, values);
}

fn main() {
    let v1: Vec<i32> = (1..=5).collect();
    let v2 = vec![-1; 5];
    print_sequence("v1", &v1);
    print_sequence("v2", &v2);

    println!("\n=== Reductions ===");

    // Sum of 1..=n, checked against the arithmetic-series formula
    let gauss = |first: i32, last: i32| (last - first + 1) * (last + first) / 2;
    let sum = reduce(&v1, 0, |a, b| a + b);
    let par_sum = par_reduce(&v1, 0, |a, b| a + b);
    assert_eq!(sum, par_sum);
    assert_eq!(sum, gauss(1, 5));
    println!("sum of v1 = {} (sequential and parallel agree)", sum);

    // Inner product of v1 and v2, and its transform_reduce spelling
    let prod1 = inner_product(&v1, &v2, 0);
    let prod2 = transform_reduce(&v1, &v2, 0, |acc, t| acc + t, |x, y| x * y);
    assert_eq!(prod1, prod2);
    assert_eq!(prod1, -15);
    println!("inner product of v1, v2 = {}", prod1);

    println!("\n=== Scans (reductions that keep intermediates) ===");

    let psums = inclusive_scan(&v1, |a, b| a + b);
    print_sequence("inclusive_scan(v1, +)", &psums);
    assert_eq!(*psums.last().unwrap(), sum);

    let shifted = exclusive_scan(&v1, 0, |a, b| a + b);
    print_sequence("exclusive_scan(v1, 0, +)", &shifted);

    // Partial sums of squared entries
    let squared_sums = transform_inclusive_scan(&v1, |x| x * x, |a, b| a + b);
    print_sequence("scan of squares", &squared_sums);
    assert_eq!(
        *squared_sums.last().unwrap(),
        reduce(&v1, 0, |acc, x| acc + x * x)
    );

    println!("\n=== Adjacent Differences ===");

    let diffs = adjacent_difference(&psums, |current, prev| current - prev);
    print_sequence("differences of the sums", &diffs);
    // Differencing the prefix sums recovers the original sequence
    assert_eq!(diffs, v1);

    println!("\n=== Side by Side ===");
    for (x, sums, sq) in izip!(&v1, &psums, &squared_sums) {
        println!("{:>3} {:>4} {:>4}", x, sums, sq);
    }

    println!("\n=== Key Points ===");
    println!("1. reduce folds a sequence to one value; scans keep every step");
    println!("2. exclusive_scan shifts by one and starts from an explicit seed");
    println!("3. adjacent_difference inverts the prefix sum");
    println!("4. Associative ops reduce in parallel to the same result");
}
