//! Pattern 12: Bounded Generics
//! Example: A Particle Type Constrained by Traits and a Const Dimension
//!
//! Run with: cargo run --bin p12_bounded_generics

use std::fmt;
use std::ops::AddAssign;

/// A simulation particle generic over its id type, coordinate type, and
/// spatial dimension. The bounds say exactly what the type needs: ids are
/// integers in spirit (displayable, copyable), coordinates support the
/// arithmetic the integrator uses.
#[derive(Debug, Clone, Copy)]
struct Particle<I, F, const DIM: usize>
where
    I: fmt::Display + Copy,
    F: fmt::Display + Copy + AddAssign,
{
    id: I,
    mass: F,
    position: [F; DIM],
    velocity: [F; DIM],
}

impl<I, F, const DIM: usize> Particle<I, F, DIM>
where
    I: fmt::Display + Copy,
    F: fmt::Display + Copy + AddAssign,
{
    fn step(&mut self) {
        for (x, u) in self.position.iter_mut().zip(self.velocity) {
            *x += u;
        }
    }
}

// Display only for the planar case; other dimensions keep Debug
impl<I, F> fmt::Display for Particle<I, F, 2>
where
    I: fmt::Display + Copy,
    F: fmt::Display + Copy + AddAssign,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle {} with x=({}, {}), u=({}, {}) and m={}",
            self.id,
            self.position[0],
            self.position[1],
            self.velocity[0],
            self.velocity[1],
            self.mass
        )
    }
}

fn main() {
    println!("=== A Planar Particle ===\n");
    let mut particle = Particle::<i32, f32, 2> {
        id: 10,
        mass: 5.0,
        position: [3.0, 4.0],
        velocity: [1.0, 2.0],
    };
    println!("{}", particle);

    particle.step();
    println!("{}  (after one step)", particle);

    println!("\n=== Other Instantiations ===");
    // Different id/coordinate types and a different dimension, same code
    let line = Particle::<u64, f64, 1> {
        id: 1,
        mass: 2.5,
        position: [0.0],
        velocity: [9.8],
    };
    println!("{:?}", line);

    println!("\n=== Key Points ===");
    println!("1. Trait bounds state the capabilities the type actually uses");
    println!("2. The dimension is a const parameter: arrays, not Vecs");
    println!("3. Impls can target one instantiation, like Display for DIM = 2");
}
