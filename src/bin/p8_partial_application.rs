//! Pattern 8: Functional Composition
//! Example: Partial Application with Closures
//!
//! Run with: cargo run --bin p8_partial_application

fn print_x_y_z(x: i32, y: i32, z: i32) {
    println!("x={}, y={}, z={}", x, y, z);
}

fn main() {
    println!("=== Binding Every Argument ===\n");
    // A closure capturing fixed values for all positions: call with none
    let print_1_2_3 = || print_x_y_z(1, 2, 3);
    print_1_2_3();

    println!("\n=== Binding Some Arguments ===");
    // The free argument stays a parameter; the fixed ones are captured
    let print_1_y_3 = |y| print_x_y_z(1, y, 3);
    print_1_y_3(0); // = print_x_y_z(1, 0, 3)

    println!("\n=== Reordering Arguments ===");
    let print_z_y_x = |z, y, x| print_x_y_z(x, y, z);
    print_z_y_x(1, 2, 3); // = print_x_y_z(3, 2, 1)

    println!("\n=== Capturing by Reference ===");
    let greeting = String::from("partially applied");
    let announce = || println!("closure over a local: {}", greeting);
    announce();
    announce(); // borrows, so callable repeatedly

    println!("\n=== Method References ===");
    // A method is a plain function value with the receiver as its first
    // argument; binding the receiver gives a zero-argument callable.
    let values: Vec<i32> = (1..=5).collect();
    let vec_len = Vec::<i32>::len;
    assert_eq!(vec_len(&values), values.len());
    println!("Vec::len as a function value: {}", vec_len(&values));

    let len_of_values = || values.len();
    assert_eq!(len_of_values(), 5);
    println!("receiver bound by capture:    {}", len_of_values());

    println!("\n=== Key Points ===");
    println!("1. A closure captures the fixed argument positions");
    println!("2. Remaining parameters are supplied later, in declared order");
    println!("3. Methods are function values; capturing binds the receiver");
}
