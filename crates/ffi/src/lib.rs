use std::ptr;

pub use vec3f_core::Vector3f;

// ============================================================================
// VECTOR C API
// ============================================================================
//
// Pointer-shaped wrappers over the core vector operations. Writes go
// through `target` pointers and operands are read through `const`
// pointers, so callers keep C-style in-place semantics; operands are
// copied out before the target is written, which makes every aliasing
// combination of the pointers well defined.
//
// Pointer validity is a caller precondition. It is checked by debug
// assertions in debug builds and is undefined behavior when violated in
// release builds; violations are never reported through return values.

/// Overwrite the components of a vector with the given values.
///
/// # Parameters
/// - `target`: Vector to overwrite
/// - `x`: New component 0
/// - `y`: New component 1
/// - `z`: New component 2
///
/// # Safety
/// `target` must be a valid, non-null, properly aligned pointer to a
/// `Vector3f` writable for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn vec3f_set(target: *mut Vector3f, x: f32, y: f32, z: f32) {
    debug_assert!(!target.is_null(), "vec3f_set: target must not be null");

    (*target).set(x, y, z);
}

/// Overwrite the components of a vector with zero.
///
/// Equivalent to `vec3f_set(target, 0.0, 0.0, 0.0)`.
///
/// # Parameters
/// - `target`: Vector to overwrite
///
/// # Safety
/// `target` must be a valid, non-null, properly aligned pointer to a
/// `Vector3f` writable for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn vec3f_set_zero(target: *mut Vector3f) {
    debug_assert!(!target.is_null(), "vec3f_set_zero: target must not be null");

    (*target).set_zero();
}

/// Store the component-wise sum of two vectors in `target`.
///
/// `target` may alias either operand or both; in particular
/// `vec3f_add(v, v, v)` doubles every component of `v`.
///
/// # Parameters
/// - `target`: Vector receiving the sum
/// - `operand1`: Augend
/// - `operand2`: Addend
///
/// # Safety
/// All three pointers must be valid, non-null, properly aligned pointers
/// to `Vector3f` values, with `target` writable for the duration of the
/// call.
#[no_mangle]
pub unsafe extern "C" fn vec3f_add(
    target: *mut Vector3f,
    operand1: *const Vector3f,
    operand2: *const Vector3f,
) {
    debug_assert!(!target.is_null(), "vec3f_add: target must not be null");
    debug_assert!(!operand1.is_null(), "vec3f_add: operand1 must not be null");
    debug_assert!(!operand2.is_null(), "vec3f_add: operand2 must not be null");

    // Copy both operands out before writing so target may alias them.
    let (a, b) = (*operand1, *operand2);
    *target = a + b;
}

/// Store the component-wise difference of two vectors in `target`.
///
/// Computes `operand1 - operand2`. `target` may alias either operand or
/// both.
///
/// # Parameters
/// - `target`: Vector receiving the difference
/// - `operand1`: Minuend
/// - `operand2`: Subtrahend
///
/// # Safety
/// All three pointers must be valid, non-null, properly aligned pointers
/// to `Vector3f` values, with `target` writable for the duration of the
/// call.
#[no_mangle]
pub unsafe extern "C" fn vec3f_subtract(
    target: *mut Vector3f,
    operand1: *const Vector3f,
    operand2: *const Vector3f,
) {
    debug_assert!(!target.is_null(), "vec3f_subtract: target must not be null");
    debug_assert!(!operand1.is_null(), "vec3f_subtract: operand1 must not be null");
    debug_assert!(!operand2.is_null(), "vec3f_subtract: operand2 must not be null");

    let (a, b) = (*operand1, *operand2);
    *target = a - b;
}

/// Compare two vectors for equality.
///
/// Equal when both operands are the same pointer, or when all three
/// corresponding components compare equal under IEEE-754 `==`. Distinct
/// vectors holding NaN therefore compare unequal, while a vector compared
/// against its own pointer is always equal; `+0.0` and `-0.0` compare
/// equal.
///
/// # Parameters
/// - `operand1`: First vector
/// - `operand2`: Second vector
///
/// # Returns
/// `true` if the vectors are equal, `false` otherwise
///
/// # Safety
/// Both pointers must be valid, non-null, properly aligned pointers to
/// `Vector3f` values.
#[no_mangle]
pub unsafe extern "C" fn vec3f_are_equal(
    operand1: *const Vector3f,
    operand2: *const Vector3f,
) -> bool {
    debug_assert!(
        !operand1.is_null(),
        "vec3f_are_equal: operand1 must not be null"
    );
    debug_assert!(
        !operand2.is_null(),
        "vec3f_are_equal: operand2 must not be null"
    );

    ptr::eq(operand1, operand2) || *operand1 == *operand2
}

/// The squared Euclidean length of a vector.
///
/// Terms are summed in component order, so rounding is deterministic
/// across conforming platforms.
///
/// # Parameters
/// - `operand`: Vector to measure
///
/// # Returns
/// The squared length; infinite or NaN inputs propagate
///
/// # Safety
/// `operand` must be a valid, non-null, properly aligned pointer to a
/// `Vector3f` value.
#[no_mangle]
pub unsafe extern "C" fn vec3f_get_squared_length(operand: *const Vector3f) -> f32 {
    debug_assert!(
        !operand.is_null(),
        "vec3f_get_squared_length: operand must not be null"
    );

    (*operand).length_squared()
}

/// The Euclidean length of a vector.
///
/// # Parameters
/// - `operand`: Vector to measure
///
/// # Returns
/// The length; infinite or NaN inputs propagate
///
/// # Safety
/// `operand` must be a valid, non-null, properly aligned pointer to a
/// `Vector3f` value.
#[no_mangle]
pub unsafe extern "C" fn vec3f_get_length(operand: *const Vector3f) -> f32 {
    debug_assert!(
        !operand.is_null(),
        "vec3f_get_length: operand must not be null"
    );

    (*operand).length()
}

// ============================================================================
// TESTS
// ============================================================================
