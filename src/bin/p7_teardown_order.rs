//! Pattern 7: Deterministic Teardown Order
//! Example: Layered Values Release Most-Derived-First
//!
//! Run with: cargo run --bin p7_teardown_order
//!
//! A layered value (a specialized vector wrapping a paged vector wrapping a
//! core) tears down in a fixed order: the outermost layer's Drop runs
//! first, then each contained layer in turn. First constructed, last
//! destructed, without any dynamic dispatch.

/// Innermost layer: owns the name every layer reports under.
struct VectorCore {
    name: String,
}

impl VectorCore {
    fn new(name: &str) -> Self {
        VectorCore { name: name.to_string() }
    }

    fn info(&self, msg: &str) {
        println!("[core]-[{}]: {}", self.name, msg);
    }
}

impl Drop for VectorCore {
    fn drop(&mut self) {
        self.info("released");
    }
}

/// Middle layer: a core plus paging bookkeeping.
struct PagedVector {
    core: VectorCore,
    pages: usize,
}

impl PagedVector {
    fn new(name: &str, pages: usize) -> Self {
        PagedVector {
            core: VectorCore::new(name),
            pages,
        }
    }

    fn info(&self, msg: &str) {
        println!("[paged]-[{}]: {} ({} pages)", self.core.name, msg, self.pages);
    }
}

impl Drop for PagedVector {
    fn drop(&mut self) {
        self.info("released");
    }
}

/// Outermost layer: a paged vector plus fixed extra storage.
struct ExtendedVector {
    paged: PagedVector,
    extra: [i32; 4],
}

impl ExtendedVector {
    fn new(name: &str) -> Self {
        ExtendedVector {
            paged: PagedVector::new(name, 8),
            extra: [0; 4],
        }
    }

    fn info(&self, msg: &str) {
        println!(
            "[extended]-[{}]: {} (+{} slots)",
            self.paged.core.name,
            msg,
            self.extra.len()
        );
    }
}

impl Drop for ExtendedVector {
    fn drop(&mut self) {
        self.info("released");
    }
}

/// The closed set of vector kinds. Behavior differences that a class
/// hierarchy would express with virtual dispatch live in one match.
enum AnyVector {
    Core(VectorCore),
    Paged(PagedVector),
    Extended(ExtendedVector),
}

impl AnyVector {
    fn info(&self, msg: &str) {
        match self {
            AnyVector::Core(v) => v.info(msg),
            AnyVector::Paged(v) => v.info(msg),
            AnyVector::Extended(v) => v.info(msg),
        }
    }
}

fn main() {
    println!("=== Teardown Order of a Layered Value ===\n");
    {
        let vector = ExtendedVector::new("F_BODY");
        vector.info("in use");
    }
    // Printed order: extended, paged, core. A value's own Drop runs
    // before its fields', fields in declaration order.

    println!("\n=== Closed Kind Set, One Dispatch Site ===");
    let vectors = vec![
        AnyVector::Core(VectorCore::new("plain")),
        AnyVector::Paged(PagedVector::new("paged", 2)),
        AnyVector::Extended(ExtendedVector::new("extended")),
    ];
    for vector in &vectors {
        vector.info("data");
    }

    println!("\ndropping the collection:");
    drop(vectors);

    println!("\n=== Key Points ===");
    println!("1. Drop on the value runs before Drop on its fields");
    println!("2. The release sequence is fixed at compile time, per kind");
    println!("3. A closed kind set needs a match, not virtual dispatch");
}
