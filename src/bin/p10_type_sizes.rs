//! Pattern 10: Type and Object Sizes
//! Example: size_of / align_of Probes
//!
//! Run with: cargo run --bin p10_type_sizes

use std::fmt::Debug;
use std::mem::{align_of, size_of, size_of_val};

fn probe<T>(name: &str) {
    println!(
        "[type]: {:<24} [size]: {:>2}  [align]: {:>2}",
        name,
        size_of::<T>(),
        align_of::<T>()
    );
}

/// No fields at all: a zero-sized type. Instances carry no data and
/// occupy no memory inside other types.
struct Empty;

/// Field order as written; the compiler may reorder to pack.
struct Packed {
    flag: bool,
    value: u64,
    small: u16,
}

/// Same fields with a C layout: declaration order, padding included.
#[repr(C)]
struct CPadded {
    flag: bool,
    value: u64,
    small: u16,
}

trait Probe: Debug {}

fn main() {
    println!("=== Pointers and References ===\n");
    // Thin pointers are one word; a reference costs the same as a raw
    // pointer, not the size of the referent
    probe::<*const u8>("*const u8");
    probe::<*const f64>("*const f64");
    probe::<&u8>("&u8");
    probe::<&[u8; 1024]>("&[u8; 1024]");
    probe::<Box<u64>>("Box<u64>");

    // Fat pointers carry a second word: length or vtable
    probe::<&[u8]>("&[u8] (slice)");
    probe::<&str>("&str");
    probe::<&dyn Probe>("&dyn Probe");
    assert_eq!(size_of::<&dyn Probe>(), 2 * size_of::<usize>());

    // Niche optimization: the null pattern encodes the None case
    probe::<Option<&u8>>("Option<&u8>");
    probe::<Option<Box<u64>>>("Option<Box<u64>>");
    assert_eq!(size_of::<Option<&u8>>(), size_of::<&u8>());

    println!("\n=== Integers ===");
    probe::<i8>("i8");
    probe::<i16>("i16");
    probe::<i32>("i32");
    probe::<i64>("i64");
    probe::<i128>("i128");
    // usize is the native word length
    probe::<usize>("usize");
    // Unsigned types match their signed counterparts
    assert_eq!(size_of::<u32>(), size_of::<i32>());
    assert_eq!(size_of::<u64>(), size_of::<i64>());

    println!("\n=== Floats, char, bool ===");
    probe::<f32>("f32");
    probe::<f64>("f64");
    probe::<char>("char (a scalar value)");
    probe::<bool>("bool");

    println!("\n=== Composite Layout ===");
    probe::<Empty>("Empty (ZST)");
    assert_eq!(size_of::<Empty>(), 0);
    probe::<Packed>("Packed (rust layout)");
    probe::<CPadded>("CPadded (repr(C))");
    // Rust layout may beat declaration order; repr(C) may not
    assert!(size_of::<Packed>() <= size_of::<CPadded>());

    println!("\n=== Values vs Types ===");
    let word = "twelve bytes";
    println!(
        "size_of_val({:?}) = {} (the pointed-to bytes, not the reference)",
        word,
        size_of_val(word)
    );

    println!("\n=== Key Points ===");
    println!("1. References and thin pointers are one word; fat pointers are two");
    println!("2. Zero-sized types exist only in the type system");
    println!("3. Niches make Option of a pointer free");
    println!("4. repr(C) trades packing for a predictable layout");
}
