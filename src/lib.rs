//! Cross-platform 3D math primitives.
//!
//! Vector, quaternion, matrix and transform value types over a 4-lane `f32`
//! register, with the SIMD backend selected at build time in preference
//! order SSE4.1 > SSE3 > SSE2 > NEON > scalar. All operations are pure
//! functions over immutable values; preconditions like unit length or
//! non-zero length are caller contracts, not runtime checks.

#[macro_use]
mod macros;

mod simd;

pub mod euler;
pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod vector;
