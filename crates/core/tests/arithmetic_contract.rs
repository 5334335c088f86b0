//! Arithmetic contract tests
//!
//! End-to-end checks of the vector operations against worked examples,
//! plus randomized add/subtract round trips. RNGs are seeded so any
//! failure reproduces exactly.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vec3f_core::Vector3f;

fn random_integer_vector(rng: &mut StdRng) -> Vector3f {
    Vector3f::new(
        f32::from(rng.random_range(-1000i16..=1000)),
        f32::from(rng.random_range(-1000i16..=1000)),
        f32::from(rng.random_range(-1000i16..=1000)),
    )
}

fn random_float_vector(rng: &mut StdRng) -> Vector3f {
    Vector3f::new(
        rng.random_range(-1000.0..1000.0),
        rng.random_range(-1000.0..1000.0),
        rng.random_range(-1000.0..1000.0),
    )
}

#[test]
fn test_three_four_zero_has_length_five() {
    let mut v = Vector3f::ZERO;
    v.set(3.0, 4.0, 0.0);
    assert_eq!(v.length(), 5.0);
}

#[test]
fn test_add_then_subtract_restores_operand() {
    let a = Vector3f::new(1.0, 2.0, 3.0);
    let b = Vector3f::new(4.0, 5.0, 6.0);

    let mut t = a + b;
    assert_eq!(t, Vector3f::new(5.0, 7.0, 9.0));

    t -= b;
    assert_eq!(t, a);
}

#[test]
fn test_zero_vector_has_exactly_zero_length() {
    let mut v = Vector3f::new(8.0, -6.0, 2.5);
    v.set_zero();
    assert_eq!(v.length_squared(), 0.0);
    assert_eq!(v.length(), 0.0);
}

#[test]
fn test_aliased_add_doubles_components() {
    let mut v = Vector3f::new(1.0, 1.0, 1.0);
    v += v;
    assert_eq!(v, Vector3f::new(2.0, 2.0, 2.0));
}

#[test]
fn test_equality_scenarios() {
    let a = Vector3f::new(1.0, 2.0, 3.0);
    let b = Vector3f::new(1.0, 2.0, 3.0);
    let c = Vector3f::new(1.0, 2.0, 4.0);

    assert!(a.are_equal(&a));
    assert!(a.are_equal(&b));
    assert!(b.are_equal(&a));
    assert!(!a.are_equal(&c));
}

#[test]
fn test_integer_component_round_trip_is_exact() {
    // Small-integer components stay exact through one add and one
    // subtract, so the round trip must restore the operand bit for bit.
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let a = random_integer_vector(&mut rng);
        let b = random_integer_vector(&mut rng);
        let roundtripped = (a + b) - b;
        assert_eq!(roundtripped, a, "a = {a}, b = {b}");
    }
}

#[test]
fn test_float_component_round_trip_within_rounding() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let a = random_float_vector(&mut rng);
        let b = random_float_vector(&mut rng);
        let roundtripped = (a + b) - b;
        for i in 0..3 {
            assert_abs_diff_eq!(roundtripped[i], a[i], epsilon = 1e-3);
        }
    }
}

#[test]
fn test_length_matches_f64_reference() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1000 {
        let v = random_float_vector(&mut rng);
        let reference = (f64::from(v.x) * f64::from(v.x)
            + f64::from(v.y) * f64::from(v.y)
            + f64::from(v.z) * f64::from(v.z))
        .sqrt();
        assert_relative_eq!(
            f64::from(v.length()),
            reference,
            max_relative = 1e-5,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_in_place_ops_match_value_ops() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..1000 {
        let a = random_float_vector(&mut rng);
        let b = random_float_vector(&mut rng);

        let mut sum = a;
        sum += b;
        assert_eq!(sum, a + b);

        let mut diff = a;
        diff -= b;
        assert_eq!(diff, a - b);
    }
}
