//! Pattern 8: Functional Composition
//! Example: One Call Surface over Every Callable Shape
//!
//! Run with: cargo run --bin p9_uniform_invocation

/// Invokes any single-argument callable. Free functions, closures, function
/// pointers, and fully-qualified methods all satisfy the same Fn bound, so
/// one generic call site covers them all.
fn invoke<F, A, R>(callable: F, arg: A) -> R
where
    F: FnOnce(A) -> R,
{
    callable(arg)
}

fn double(x: i32) -> i32 {
    x * 2
}

fn main() {
    let values = vec![10, 10, 10];

    println!("=== Uniform Invocation ===\n");

    // Free function
    println!("invoke(double, 21) = {}", invoke(double, 21));

    // Closure
    let add_one = |x: i32| x + 1;
    println!("invoke(closure, 41) = {}", invoke(add_one, 41));

    // Function pointer (the same item, coerced)
    let pointer: fn(i32) -> i32 = double;
    assert_eq!(invoke(pointer, 21), invoke(double, 21));
    println!("invoke(fn pointer, 21) = {}", invoke(pointer, 21));

    // Method, fully qualified: the receiver becomes the argument
    let len = invoke(Vec::<i32>::len, &values);
    assert_eq!(len, values.len());
    println!("invoke(Vec::len, &values) = {}", len);

    // The same method through a reference-to-reference, as generic code
    // often receives it
    let via_ref = invoke(|v: &Vec<i32>| v.len(), &values);
    assert_eq!(via_ref, len);

    println!("\n=== Key Points ===");
    println!("1. Fn bounds make the callable's shape irrelevant at the call site");
    println!("2. Method calls desugar to functions taking the receiver first");
    println!("3. Function items coerce to pointers; both satisfy the bound");
}
