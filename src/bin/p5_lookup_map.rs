//! Pattern 5: Fixed Lookup Map
//! Example: Closed Key Set with a Recoverable Miss
//!
//! Run with: cargo run --bin p5_lookup_map

use stdlib_patterns::FixedMap;

/// The complete color table: built once, never modified.
const COLORS: FixedMap<&str, i32, 3> =
    FixedMap::new([("red", 1), ("blue", 2), ("green", 3)]);

fn main() {
    println!("=== Hits ===\n");
    for key in ["red", "blue", "green"] {
        match COLORS.at(&key) {
            Ok(value) => println!("{}: {}", key, value),
            Err(e) => eprintln!("{}", e),
        }
    }

    assert_eq!(COLORS.at(&"red"), Ok(&1));
    assert_eq!(COLORS.at(&"blue"), Ok(&2));

    println!("\n=== Miss ===");
    // A miss is a value-level error to report, not a reason to terminate
    let key = "purple";
    match COLORS.at(&key) {
        Ok(value) => println!("{}: {}", key, value),
        Err(e) => println!("lookup failed: {}", e),
    }
    assert!(COLORS.at(&"purple").is_err());

    println!("\n=== Table Contents ===");
    for (key, value) in COLORS.iter() {
        println!("  {} -> {}", key, value);
    }
    println!("{} entries, scanned in insertion order", COLORS.len());
}
