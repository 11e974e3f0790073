//! Pattern 6: Enums and Discriminants
//! Example: Field-less Enums, Explicit Representations, Casts
//!
//! Run with: cargo run --bin p6_enums

/// Field-less enum: discriminants default to 0, 1, 2, ...
/// There is no implicit conversion to the integer; the cast is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

/// Explicit representation and explicit discriminant values.
/// `as` converts to the underlying type; the reverse direction needs a
/// match (or TryFrom), since not every u8 is a Letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Letter {
    A = b'a',
    B = b'b',
    C = b'c',
}

impl Letter {
    fn from_byte(byte: u8) -> Option<Letter> {
        match byte {
            b'a' => Some(Letter::A),
            b'b' => Some(Letter::B),
            b'c' => Some(Letter::C),
            _ => None,
        }
    }
}

fn main() {
    println!("=== Default Discriminants ===\n");
    let sum = Color::Red as i32 + Color::Green as i32 + Color::Blue as i32;
    println!(
        "Red={} Green={} Blue={} (sum {})",
        Color::Red as i32,
        Color::Green as i32,
        Color::Blue as i32,
        sum
    );
    assert_eq!(sum, 3);

    println!("\n=== Explicit repr and Values ===");
    // println!("{}", Letter::A) without the cast would not compile:
    // enums have no implicit integer (or char) conversion
    println!("Letter::A as char = {}", Letter::A as u8 as char);
    println!("Letter::C as u8   = {}", Letter::C as u8);
    assert_eq!(Letter::A as u8, b'a');

    println!("\n=== Back from the Underlying Type ===");
    for byte in [b'a', b'c', b'z'] {
        match Letter::from_byte(byte) {
            Some(letter) => println!("{} -> {:?}", byte as char, letter),
            None => println!("{} -> no Letter with this value", byte as char),
        }
    }

    println!("\n=== Key Points ===");
    println!("1. Casts to the discriminant are always explicit");
    println!("2. repr + explicit values pin the underlying representation");
    println!("3. Integer-to-enum goes through a total match, never a cast");
}
