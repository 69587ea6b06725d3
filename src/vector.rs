//! Vectors.

use crate::simd::backend;
use bytemuck::{Pod, Zeroable};
use core::fmt;

/// A 4-dimensional vector of `f32` lanes (x, y, z, w).
///
/// The lanes are stored in the 128-bit register type of the SIMD backend
/// selected at build time, so the type is 16-byte aligned on SIMD targets.
/// Values are immutable once constructed; every operation returns a new
/// vector.
///
/// A vector with a zero w lane is a *directional* vector, the operand and
/// result type of quaternion rotation.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[derive(Clone, Copy)]
pub struct Vector4 {
    inner: backend::Repr,
}

// The backend repr is always four f32 lanes with no padding, whatever the
// register type, so the plain-old-data contract holds.
unsafe impl Zeroable for Vector4 {}
unsafe impl Pod for Vector4 {}

impl Vector4 {
    /// Creates a new vector with the given lanes.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            inner: backend::new(x, y, z, w),
        }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(0.0)
    }

    /// Creates a new vector with the same value in all lanes.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self {
            inner: backend::splat(value),
        }
    }

    /// The unit vector along the x-axis, as a directional vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The unit vector along the y-axis, as a directional vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The unit vector along the z-axis, as a directional vector.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The unit vector along the w-axis.
    #[inline]
    pub fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Loads 4 floats from the given array. No alignment beyond that of
    /// `f32` is required.
    #[inline]
    pub fn from_array(array: &[f32; 4]) -> Self {
        Self {
            inner: backend::from_array(array),
        }
    }

    /// Loads 4 floats from the given pointer using the fast aligned-load
    /// path of the selected backend.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 4 consecutive `f32` values and must be
    /// 16-byte aligned. Passing a misaligned pointer is undefined behavior on
    /// SIMD backends.
    #[inline]
    pub unsafe fn from_aligned(ptr: *const f32) -> Self {
        Self {
            inner: unsafe { backend::from_aligned(ptr) },
        }
    }

    /// The lanes as an array `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        backend::to_array(self.inner)
    }

    /// The x lane.
    #[inline]
    pub fn x(&self) -> f32 {
        self.to_array()[0]
    }

    /// The y lane.
    #[inline]
    pub fn y(&self) -> f32 {
        self.to_array()[1]
    }

    /// The z lane.
    #[inline]
    pub fn z(&self) -> f32 {
        self.to_array()[2]
    }

    /// The w lane.
    #[inline]
    pub fn w(&self) -> f32 {
        self.to_array()[3]
    }

    /// This vector with the w lane set to zero, making it directional.
    #[inline]
    pub fn with_w_zero(&self) -> Self {
        let [x, y, z, _] = self.to_array();
        Self::new(x, y, z, 0.0)
    }

    /// Computes this vector scaled by the given factor.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            inner: backend::scale(self.inner, factor),
        }
    }

    /// Computes the lane-wise product with another vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self {
            inner: backend::mul(self.inner, other.inner),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        backend::dot(self.inner, other.inner)
    }

    /// Computes the length (Euclidean norm) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Computes the squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector.
    ///
    /// A zero-length input is a precondition violation: the division produces
    /// non-finite lanes rather than an error.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.scaled(1.0 / self.length())
    }

    #[inline]
    pub(crate) fn repr(&self) -> backend::Repr {
        self.inner
    }

    #[inline]
    pub(crate) fn from_repr(inner: backend::Repr) -> Self {
        Self { inner }
    }
}

impl Default for Vector4 {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl PartialEq for Vector4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.debug_struct("Vector4")
            .field("x", &x)
            .field("y", &y)
            .field("z", &z)
            .field("w", &w)
            .finish()
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(array: [f32; 4]) -> Self {
        Self::from_array(&array)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.to_array()
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::from_repr(backend::add(a.inner, b.inner))
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::from_repr(backend::sub(a.inner, b.inner))
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, factor| {
    a.scaled(*factor)
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |this| {
    Vector4::from_repr(backend::neg(this.inner))
});

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    let a = a.to_array();
    let b = b.to_array();
    (0..4).all(|i| f32::abs_diff_eq(&a[i], &b[i], epsilon))
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    let a = a.to_array();
    let b = b.to_array();
    (0..4).all(|i| f32::relative_eq(&a[i], &b[i], epsilon, max_relative))
});

const _: () = assert!(size_of::<Vector4>() == 4 * size_of::<f32>());

#[cfg(any(
    target_arch = "x86_64",
    all(target_arch = "aarch64", target_feature = "neon")
))]
const _: () = assert!(align_of::<Vector4>() == 16);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn vector4_new_and_accessors_work() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.w(), 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn vector4_zeros_and_splat_work() {
        assert_eq!(Vector4::zeros().to_array(), [0.0; 4]);
        assert_eq!(Vector4::splat(2.5).to_array(), [2.5; 4]);
    }

    #[test]
    fn vector4_from_array_matches_new() {
        let v = Vector4::from_array(&[0.5, -1.0, 2.0, -3.5]);
        assert_eq!(v, Vector4::new(0.5, -1.0, 2.0, -3.5));
    }

    #[test]
    fn vector4_aligned_load_works() {
        #[repr(align(16))]
        struct Aligned([f32; 4]);

        let buffer = Aligned([4.0, 3.0, 2.0, 1.0]);
        let v = unsafe { Vector4::from_aligned(buffer.0.as_ptr()) };
        assert_eq!(v.to_array(), buffer.0);
    }

    #[test]
    fn vector4_addition_and_subtraction_work() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.5, -1.0, 2.0, -2.0);
        assert_eq!((&a + &b).to_array(), [1.5, 1.0, 5.0, 2.0]);
        assert_eq!((&a - &b).to_array(), [0.5, 3.0, 1.0, 6.0]);
    }

    #[test]
    fn vector4_negation_negates_all_lanes() {
        let v = -Vector4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(v.to_array(), [-1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn vector4_scaling_works() {
        let v = Vector4::new(1.0, -2.0, 0.5, 4.0);
        assert_eq!((&v * 2.0).to_array(), [2.0, -4.0, 1.0, 8.0]);
        assert_eq!(v.scaled(-1.0), -v);
    }

    #[test]
    fn vector4_component_mul_works() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(2.0, 0.5, -1.0, 0.0);
        assert_eq!(a.component_mul(&b).to_array(), [2.0, 1.0, -3.0, 0.0]);
    }

    #[test]
    fn vector4_dot_and_length_work() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        assert_abs_diff_eq!(a.dot(&b), 70.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.length_squared(), 30.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.length(), 30.0_f32.sqrt(), epsilon = EPSILON);
    }

    #[test]
    fn vector4_normalized_has_unit_length() {
        let v = Vector4::new(3.0, -4.0, 12.0, 0.0);
        assert_abs_diff_eq!(v.normalized().length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn vector4_with_w_zero_clears_only_w() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0).with_w_zero();
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn vector4_layout_is_four_floats() {
        assert_eq!(size_of::<Vector4>(), 16);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn vector4_serde_roundtrip_works() {
        let v = Vector4::new(1.0, -2.0, 3.5, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
