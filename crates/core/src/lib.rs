//! Three-Component Single-Precision Vector
//!
//! A plain `Copy` value type holding three `f32` components, together with
//! the small fixed set of operations geometry and physics code composes on
//! top of: assignment, zeroing, addition, subtraction, equality, squared
//! length, and length.
//!
//! All arithmetic is standard IEEE-754 single precision. NaN and infinity
//! are valid component values and propagate through every operation instead
//! of being sanitized.
//!
//! ## Example
//!
//! ```
//! use vec3f_core::Vector3f;
//!
//! let mut v = Vector3f::new(3.0, 4.0, 0.0);
//! assert_eq!(v.length(), 5.0);
//!
//! v += Vector3f::new(1.0, 1.0, 1.0);
//! assert_eq!(v, Vector3f::new(4.0, 5.0, 1.0));
//!
//! v.set_zero();
//! assert_eq!(v.length_squared(), 0.0);
//! ```
//!
//! The companion `vec3f-ffi` crate re-exposes these operations under a
//! C ABI with pointer-shaped signatures; `Vector3f` is `#[repr(C)]` so it
//! crosses that boundary unchanged.

pub mod vector3;

// Re-export the vector type
pub use vector3::Vector3f;
