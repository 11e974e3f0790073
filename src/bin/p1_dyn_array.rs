//! Pattern 1: Owning Sequence Container
//! Example: DynArray Ownership Lifecycle
//!
//! Run with: cargo run --bin p1_dyn_array

use stdlib_patterns::DynArray;

fn main() {
    println!("=== Construction ===\n");

    // Default-initialized, filled, and literal-list forms
    let zeros: DynArray<i32> = DynArray::new(5);
    println!("DynArray::new(5)        = {:?}", zeros);

    let ones = DynArray::filled(5, 1);
    println!("DynArray::filled(5, 1)  = {:?}", ones);

    let listed = DynArray::from([1, 2, 3, 4, 5]);
    println!("DynArray::from([1..=5]) = {:?}", listed);

    println!("\n=== Deep Copy ===");
    let original = DynArray::from([1, 2, 3, 4, 5]);
    let mut copy = original.clone();
    copy[0] = 99;
    println!("original after mutating the copy: {:?}", original);
    println!("copy:                             {:?}", copy);
    assert_eq!(original[0], 1);

    println!("\n=== Ownership Transfer ===");
    // A plain assignment moves the buffer; the compiler forbids touching
    // the source afterwards. take() is the observable version: the source
    // stays usable, but empty.
    let mut source = DynArray::from([1, 2, 3, 4, 5]);
    let destination = source.take();
    println!("destination: {:?} (len {})", destination, destination.len());
    println!("source:      {:?} (len {})", source, source.len());
    assert_eq!(source.len(), 0);
    assert_eq!(destination.len(), 5);

    println!("\n=== Bounds Checking ===");
    let arr = DynArray::from([10, 20, 30, 40, 50]);
    println!("arr[4]        = {}", arr[4]);
    match arr.try_get(5) {
        Ok(value) => println!("arr.try_get(5) = {}", value),
        Err(e) => println!("arr.try_get(5) -> {}", e),
    }
    // arr[5] would panic with the same index/length message.

    println!("\n=== Deterministic Release ===");
    {
        let scoped = DynArray::from(["one".to_string(), "two".to_string()]);
        println!("scoped array alive: {:?}", scoped);
    } // buffer and elements released exactly once, here
    println!("scoped array dropped at end of scope");

    println!("\n=== Key Points ===");
    println!("1. The buffer has exactly one owner at any time");
    println!("2. clone() copies the buffer; assignment moves it");
    println!("3. After take(), the source is empty and safe to reuse");
    println!("4. Out-of-range indexing panics; try_get reports index and length");
}
