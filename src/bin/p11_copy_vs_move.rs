//! Pattern 11: Copy vs Move
//! Example: Counting Clones and Drops Across Initialization Styles
//!
//! Run with: cargo run --bin p11_copy_vs_move

use std::sync::atomic::{AtomicUsize, Ordering};

static CREATED: AtomicUsize = AtomicUsize::new(0);
static CLONED: AtomicUsize = AtomicUsize::new(0);
static DROPPED: AtomicUsize = AtomicUsize::new(0);

/// A value that tallies every constructor, clone, and drop.
struct Tracked {
    data: i32,
}

impl Tracked {
    fn new(data: i32) -> Self {
        CREATED.fetch_add(1, Ordering::Relaxed);
        Tracked { data }
    }

    fn report(label: &str) {
        println!(
            "{:<24} created={} cloned={} dropped={}",
            label,
            CREATED.load(Ordering::Relaxed),
            CLONED.load(Ordering::Relaxed),
            DROPPED.load(Ordering::Relaxed)
        );
    }

    fn reset() {
        CREATED.store(0, Ordering::Relaxed);
        CLONED.store(0, Ordering::Relaxed);
        DROPPED.store(0, Ordering::Relaxed);
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        CLONED.fetch_add(1, Ordering::Relaxed);
        Tracked { data: self.data }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        DROPPED.fetch_add(1, Ordering::Relaxed);
    }
}

fn main() {
    println!("=== Clone into the Array ===\n");
    {
        let m1 = Tracked::new(10);
        let m2 = Tracked::new(20);
        let _array = [m1.clone(), m2.clone()];
        // m1, m2, and both clones all drop at the end of this scope
    }
    Tracked::report("explicit clones:");
    assert_eq!(CLONED.load(Ordering::Relaxed), 2);
    assert_eq!(DROPPED.load(Ordering::Relaxed), 4);
    Tracked::reset();

    println!("\n=== Move into the Array ===");
    {
        let m1 = Tracked::new(10);
        let m2 = Tracked::new(20);
        // Ownership transfers; no clone runs and m1/m2 are gone as names
        let _array = [m1, m2];
    }
    Tracked::report("moves:");
    assert_eq!(CLONED.load(Ordering::Relaxed), 0);
    assert_eq!(DROPPED.load(Ordering::Relaxed), 2);
    Tracked::reset();

    println!("\n=== Construct in Place ===");
    {
        // No named temporaries at all: each element is built where it lands
        let _array = [Tracked::new(10), Tracked::new(20)];
    }
    Tracked::report("direct initialization:");
    assert_eq!(CREATED.load(Ordering::Relaxed), 2);
    assert_eq!(DROPPED.load(Ordering::Relaxed), 2);
    Tracked::reset();

    println!("\n=== Moves Invalidate the Source ===");
    let s1 = String::from("hello");
    let s2 = s1; // s1 is moved, not copied
    // println!("{}", s1);  // would not compile: value used after move
    println!("s2 owns the data: {}", s2);

    let s3 = String::from("world");
    take_ownership(s3);
    // s3 is gone here as well; the function's scope dropped it

    println!("\n=== Key Points ===");
    println!("1. A move transfers ownership: no clone, source name dead");
    println!("2. Cloning is always a visible, explicit call");
    println!("3. Building values in place avoids the temporaries entirely");
    println!("4. Every value drops exactly once, wherever it ends up");
}

fn take_ownership(s: String) {
    println!("took: {}", s);
} // s drops here
