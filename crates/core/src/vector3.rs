//! The [`Vector3f`] value type and its arithmetic.
//!
//! Everything in this module is closed-form IEEE-754 single-precision
//! arithmetic over fixed-size data: no allocation, no locking, no I/O.
//! Operations either read components or overwrite an existing vector's
//! components in place, and every operation is O(1).

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};
use std::ptr;

/// A vector of three `f32` components.
///
/// Plain value semantics: copying duplicates all three components, and
/// copies never share mutable state. Components are accessible as the
/// fields `x`, `y`, `z` and positionally via `v[0]`, `v[1]`, `v[2]`.
///
/// `==` compares component-wise under IEEE-754 equality, so `NaN != NaN`
/// and `+0.0 == -0.0`. See [`are_equal`](Self::are_equal) for the
/// identity-aware variant.
///
/// The `#[repr(C)]` layout is exactly three consecutive 32-bit floats
/// (12 bytes, 4-byte aligned), so the type can cross a C boundary
/// unchanged.
///
/// # Example
///
/// ```
/// use vec3f_core::Vector3f;
///
/// let a = Vector3f::new(1.0, 2.0, 3.0);
/// let b = Vector3f::new(4.0, 5.0, 6.0);
/// assert_eq!(a + b, Vector3f::new(5.0, 7.0, 9.0));
/// assert_eq!((a + b) - b, a);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3f {
    /// Component 0.
    pub x: f32,
    /// Component 1.
    pub y: f32,
    /// Component 2.
    pub z: f32,
}

impl Vector3f {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its three components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Overwrite the three components with the given values.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Overwrite the three components with zero.
    ///
    /// Equivalent to `set(0.0, 0.0, 0.0)`.
    #[inline]
    pub fn set_zero(&mut self) {
        self.set(0.0, 0.0, 0.0);
    }

    /// Identity-aware equality: `true` iff `self` and `other` are the same
    /// reference, or all three corresponding components compare equal under
    /// IEEE-754 `==`.
    ///
    /// The reference short-circuit is observable only around NaN: a vector
    /// compared against its own reference is always equal, while two
    /// distinct vectors holding NaN never are. `+0.0` and `-0.0` compare
    /// equal on both paths.
    ///
    /// ```
    /// use vec3f_core::Vector3f;
    ///
    /// let v = Vector3f::new(f32::NAN, 0.0, 0.0);
    /// let w = v; // the copy carries the NaN but is a distinct object
    /// assert!(v.are_equal(&v));
    /// assert!(!v.are_equal(&w));
    /// ```
    #[inline]
    #[must_use]
    pub fn are_equal(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self == other
    }

    /// The squared Euclidean length, `x*x + y*y + z*z`.
    ///
    /// The terms are summed left to right in component order, so rounding
    /// is deterministic across conforming platforms. Non-negative for
    /// finite inputs; may be `+Inf` or NaN when components are infinite
    /// or NaN.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// The Euclidean length: the square root of [`length_squared`].
    ///
    /// NaN if any component is NaN; `+Inf` if the squared length
    /// overflows.
    ///
    /// [`length_squared`]: Self::length_squared
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }
}

impl Add for Vector3f {
    type Output = Self;

    /// Component-wise sum. Operands pass by value, so the result may be
    /// written back over either operand without hazard.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Vector3f {
    /// In-place form of `+`; `v += v` doubles each component.
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3f {
    type Output = Self;

    /// Component-wise difference. Not commutative.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl SubAssign for Vector3f {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Index<usize> for Vector3f {
    type Output = f32;

    /// Positional component access: indices 0, 1, 2 map to `x`, `y`, `z`.
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3f index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector3f {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3f index out of range: {index}"),
        }
    }
}

impl From<[f32; 3]> for Vector3f {
    #[inline]
    fn from(components: [f32; 3]) -> Self {
        Self {
            x: components[0],
            y: components[1],
            z: components[2],
        }
    }
}

impl From<Vector3f> for [f32; 3] {
    #[inline]
    fn from(v: Vector3f) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// TESTS
// ============================================================================
