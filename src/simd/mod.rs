//! Backend tier selection.
//!
//! Exactly one backend is selected per build, in preference order
//! SSE4.1 > SSE3 > SSE2 > NEON > scalar. The SSE rungs live in one module and
//! are separated by `cfg(target_feature)`; there is no runtime dispatch
//! anywhere. All backends expose the same function surface and must agree
//! numerically (within floating-point rounding) with the scalar reference.

// Always built: the portable tier, and the reference the accelerated
// backends are tested against.
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) mod scalar;

#[cfg(target_arch = "x86_64")]
pub(crate) mod sse;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub(crate) mod neon;

#[cfg(target_arch = "x86_64")]
pub(crate) use sse as backend;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub(crate) use neon as backend;

#[cfg(not(any(
    target_arch = "x86_64",
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub(crate) use scalar as backend;

#[cfg(test)]
mod tests {
    use super::{backend, scalar};
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    fn sample_a() -> [f32; 4] {
        [0.3, -1.25, 2.5, 0.75]
    }

    fn sample_b() -> [f32; 4] {
        [-2.0, 0.5, 1.125, -0.25]
    }

    fn assert_lanes_eq(actual: [f32; 4], expected: [f32; 4]) {
        for i in 0..4 {
            assert_abs_diff_eq!(actual[i], expected[i], epsilon = EPSILON);
        }
    }

    #[test]
    fn backend_constructors_agree_with_scalar() {
        let lanes = sample_a();
        assert_lanes_eq(
            backend::to_array(backend::new(lanes[0], lanes[1], lanes[2], lanes[3])),
            lanes,
        );
        assert_lanes_eq(backend::to_array(backend::from_array(&lanes)), lanes);
        assert_lanes_eq(backend::to_array(backend::splat(1.5)), [1.5; 4]);
    }

    #[test]
    fn backend_aligned_load_reads_all_lanes() {
        #[repr(align(16))]
        struct Aligned([f32; 4]);

        let buffer = Aligned(sample_b());
        let loaded = unsafe { backend::from_aligned(buffer.0.as_ptr()) };
        assert_lanes_eq(backend::to_array(loaded), buffer.0);
    }

    #[test]
    fn backend_arithmetic_agrees_with_scalar() {
        let a = sample_a();
        let b = sample_b();
        let (ba, bb) = (backend::from_array(&a), backend::from_array(&b));

        assert_lanes_eq(backend::to_array(backend::add(ba, bb)), scalar::add(a, b));
        assert_lanes_eq(backend::to_array(backend::sub(ba, bb)), scalar::sub(a, b));
        assert_lanes_eq(backend::to_array(backend::neg(ba)), scalar::neg(a));
        assert_lanes_eq(backend::to_array(backend::mul(ba, bb)), scalar::mul(a, b));
        assert_lanes_eq(
            backend::to_array(backend::scale(ba, -3.5)),
            scalar::scale(a, -3.5),
        );
    }

    #[test]
    fn backend_dot_agrees_with_scalar() {
        let a = sample_a();
        let b = sample_b();
        let dot = backend::dot(backend::from_array(&a), backend::from_array(&b));
        assert_abs_diff_eq!(dot, scalar::dot(a, b), epsilon = EPSILON);
    }

    #[test]
    fn backend_conjugate_agrees_with_scalar() {
        let q = sample_a();
        assert_lanes_eq(
            backend::to_array(backend::quat_conjugate(backend::from_array(&q))),
            scalar::quat_conjugate(q),
        );
    }

    #[test]
    fn backend_hamilton_product_agrees_with_scalar() {
        let a = sample_a();
        let b = sample_b();
        let product = backend::quat_mul(backend::from_array(&a), backend::from_array(&b));
        assert_lanes_eq(backend::to_array(product), scalar::quat_mul(a, b));
    }

    #[test]
    fn backend_rotation_agrees_with_scalar() {
        // 90 degrees about z, applied to a skew direction.
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let q = [0.0, 0.0, half, half];
        let v = [1.0, 2.0, 3.0, 0.0];
        let rotated = backend::quat_rotate_vector(backend::from_array(&q), backend::from_array(&v));
        assert_lanes_eq(backend::to_array(rotated), scalar::quat_rotate_vector(q, v));
    }

    #[test]
    fn backend_rotation_keeps_w_lane_zero() {
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let q = backend::from_array(&[half, 0.0, 0.0, half]);
        let v = backend::from_array(&[-0.5, 4.0, 1.25, 0.0]);
        let rotated = backend::to_array(backend::quat_rotate_vector(q, v));
        assert_eq!(rotated[3], 0.0);
    }
}
