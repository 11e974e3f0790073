//! # Standard-Library Facility Patterns
//!
//! Standalone examples of standard-library facilities and the language
//! mechanics underneath them. The library half of the crate holds the two
//! components with real contracts (an owning fixed-size container with
//! random-access cursors, and a fixed lookup map) plus the stateless
//! reduction and sequence-algorithm utilities. Everything else is a
//! self-contained demo program.
//!
//! ## Patterns Covered
//!
//! 1. **Owning Sequence Container** ([`dyn_array`])
//!    - Heap buffer with a single owner and deterministic release
//!    - Deep copy vs ownership transfer
//!    - Bounds-checked access: panicking and recoverable forms
//!
//! 2. **Random-Access Cursors** ([`cursor`])
//!    - Pointer-style positions with O(1) arithmetic
//!    - The traversal capability ladder, one standard trait at a time
//!
//! 3. **Reductions and Scans** ([`numeric`])
//!    - Folds, prefix sums, inner products, adjacent differences
//!    - A rayon-parallel reduction that agrees with the sequential fold
//!
//! 4. **Sequence Algorithms** ([`algorithm`])
//!    - Boundary-returning remove/unique and their truncating forms
//!
//! 5. **Fixed Lookup Map** ([`lookup`])
//!    - Build-once/read-many table, lookup miss as a recoverable error
//!
//! 6–12. **Language mechanics** (demo programs only): enums and
//! discriminants, deterministic teardown order, partial application,
//! uniform invocation, type sizes, copy vs move, bounded generics.
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_dyn_array
//! cargo run --bin p2_cursor
//! cargo run --bin p3_numeric
//! cargo run --bin p4_algorithms
//! cargo run --bin p5_lookup_map
//! cargo run --bin p6_enums
//! cargo run --bin p7_teardown_order
//! cargo run --bin p8_partial_application
//! cargo run --bin p9_uniform_invocation
//! cargo run --bin p10_type_sizes
//! cargo run --bin p11_copy_vs_move
//! cargo run --bin p12_bounded_generics
//! ```

pub mod algorithm;
pub mod cursor;
pub mod dyn_array;
pub mod lookup;
pub mod numeric;

pub use cursor::{Cursor, CursorMut, Iter, IterMut};
pub use dyn_array::{DynArray, IndexError};
pub use lookup::{FixedMap, KeyNotFound};
