//! Pattern 2: Random-Access Cursors
//! Example: Pointer-Style Traversal of a DynArray
//!
//! Run with: cargo run --bin p2_cursor

use itertools::Itertools;
use stdlib_patterns::numeric::inclusive_scan;
use stdlib_patterns::DynArray;

fn main() {
    let n = 10;

    // Fill one array with 1..=n and another with all 1s
    let mut counting: DynArray<u32> = DynArray::new(n);
    for (i, slot) in counting.iter_mut().enumerate() {
        *slot = i as u32 + 1;
    }

    let mut scanned = DynArray::filled(n, 1u32);

    println!("=== Cursor Arithmetic ===\n");
    let begin = counting.begin();
    let end = counting.end();

    // end - begin is the element count
    let distance = unsafe { end.offset_from(begin) };
    println!("end - begin = {} (len = {})", distance, counting.len());
    assert_eq!(distance as usize, counting.len());

    // Subscript without moving, and offset-then-dereference, agree
    let third = unsafe { begin.add(2) };
    println!("begin[2] = {}", unsafe { begin.peek(2) });
    println!("*(begin + 2) = {}", unsafe { third.as_ref() });
    assert_eq!(unsafe { begin.peek(2) }, unsafe { third.as_ref() });

    // Ordering follows position
    assert!(begin < third && third < end);

    // Walking end back len times lands on begin
    let mut cursor = end;
    for _ in 0..counting.len() {
        cursor = unsafe { cursor.sub(1) };
    }
    assert_eq!(cursor, begin);
    println!("stepping end back {} times reaches begin", counting.len());

    println!("\n=== Writing Through Cursors ===");
    // Prefix-sum the array of ones in place: [1,1,1,...] becomes [1,2,3,...]
    let sums = inclusive_scan(scanned.as_slice(), |a, b| a + b);
    for (slot, sum) in scanned.iter_mut().zip(sums) {
        *slot = sum;
    }
    println!("prefix sums of ones: {:?}", scanned);

    // Element-wise equality with the counting array
    assert!(counting.iter().eq(scanned.iter()));
    println!("the arrays are equal");

    println!("\n=== The Capability Ladder ===");
    // Single pass
    let total: u32 = counting.iter().sum();
    println!("single-pass read (sum): {}", total);

    // Multi-pass: the same iterator state, cloned and consumed twice
    let pass = counting.iter();
    assert_eq!(pass.clone().count(), pass.count());
    println!("multi-pass: two traversals from one starting point");

    // Bidirectional
    let backwards = counting.iter().rev().join(" ");
    println!("bidirectional (reversed): {}", backwards);

    // Random access: exact length without traversal
    println!("random-access: len() = {}", counting.iter().len());

    for (e1, e2) in counting.iter().zip(scanned.iter()) {
        println!("{} {}", e1, e2);
    }

    println!("\n=== Key Points ===");
    println!("1. A cursor is a typed pointer: O(1) arithmetic, no allocation");
    println!("2. Cursor equality and ordering are position comparisons");
    println!("3. Arithmetic past the buffer is undefined, so it is unsafe");
    println!("4. Each traversal capability is one additive standard trait");
}
