//! Quaternions.

use crate::{matrix::Matrix4, simd::backend, vector::Vector4};
use bytemuck::{Pod, Zeroable};

/// When the cosine of the angle between two quaternions is within this
/// distance of 1, slerp falls back to a normalized linear interpolation to
/// avoid dividing by a near-zero sine.
const SLERP_LERP_THRESHOLD: f32 = 1e-5;

/// A quaternion with imaginary lanes (x, y, z) and real lane w.
///
/// This is the general, possibly non-unit quaternion. For quaternions known
/// to represent rotations, use [`UnitQuaternion`].
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    inner: Vector4,
}

/// A quaternion of unit length, representing a pure rotation.
///
/// The unit-length invariant is a caller contract: no constructor validates
/// it, and [`slerp`](Self::slerp), [`rotate_vector`](Self::rotate_vector) and
/// [`inverse`](Self::inverse) produce well-defined but physically meaningless
/// results when it is violated.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct UnitQuaternion {
    inner: Quaternion,
}

impl Quaternion {
    /// Creates a quaternion from the given lanes.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector(Vector4::new(x, y, z, w))
    }

    /// Creates a quaternion with all lanes zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_vector(Vector4::zeros())
    }

    /// Creates the identity quaternion (0, 0, 0, 1), representing no
    /// rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::from_vector(Vector4::unit_w())
    }

    /// Loads a quaternion from 4 floats in memory. No alignment beyond that
    /// of `f32` is required.
    #[inline]
    pub fn from_array(array: &[f32; 4]) -> Self {
        Self::from_vector(Vector4::from_array(array))
    }

    /// Loads a quaternion from 4 floats in memory using the fast
    /// aligned-load path of the selected backend.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 4 consecutive `f32` values and must be
    /// 16-byte aligned. Passing a misaligned pointer is undefined behavior on
    /// SIMD backends.
    #[inline]
    pub unsafe fn from_aligned(ptr: *const f32) -> Self {
        Self::from_vector(unsafe { Vector4::from_aligned(ptr) })
    }

    /// Creates a quaternion from the lanes of the given vector.
    #[inline]
    pub fn from_vector(vector: Vector4) -> Self {
        Self { inner: vector }
    }

    /// The lanes of the quaternion as a vector.
    #[inline]
    pub fn as_vector(&self) -> &Vector4 {
        &self.inner
    }

    /// The real (scalar) part.
    #[inline]
    pub fn real(&self) -> f32 {
        self.inner.w()
    }

    /// The imaginary part as a directional vector (x, y, z, 0).
    #[inline]
    pub fn imag(&self) -> Vector4 {
        self.inner.with_w_zero()
    }

    /// Computes the conjugate (-x, -y, -z, w). Defined for any quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_vector(Vector4::from_repr(backend::quat_conjugate(
            self.inner.repr(),
        )))
    }

    /// Computes the multiplicative inverse.
    ///
    /// The general formula `conjugate / length_squared` is used, so non-unit
    /// quaternions invert correctly. For a unit quaternion this equals the
    /// conjugate. A zero-length input is a precondition violation: the
    /// division produces non-finite lanes rather than an error.
    #[inline]
    pub fn inverse(&self) -> Self {
        let inv_norm = 1.0 / self.length_squared();
        Self::from_vector(self.conjugate().inner.scaled(inv_norm))
    }

    /// Computes this quaternion with all lanes negated. The negation of a
    /// unit quaternion represents the same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::from_vector(-self.inner)
    }

    /// Computes the normalized version of the quaternion.
    ///
    /// A zero-length input is a precondition violation: the division
    /// produces non-finite lanes rather than an error.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from_vector(self.inner.normalized())
    }

    /// Computes the length of the quaternion.
    #[inline]
    pub fn length(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the squared length of the quaternion.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.inner.length_squared()
    }
}

impl From<Quaternion> for Vector4 {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        quaternion.inner
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_vector(&a.inner + &b.inner)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_vector(&a.inner - &b.inner)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_vector(Vector4::from_repr(backend::quat_mul(
        a.inner.repr(),
        b.inner.repr(),
    )))
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |this| { this.negated() });

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    Vector4::abs_diff_eq(&a.inner, &b.inner, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    Vector4::relative_eq(&a.inner, &b.inner, epsilon, max_relative)
});

impl UnitQuaternion {
    /// Creates the identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self {
            inner: Quaternion::identity(),
        }
    }

    /// Wraps the given quaternion without checking that it is unit length.
    ///
    /// The caller must guarantee unit length for the rotation operations to
    /// be meaningful; nothing is validated.
    #[inline]
    pub fn unchecked_from(quaternion: Quaternion) -> Self {
        Self { inner: quaternion }
    }

    /// Normalizes the given quaternion into a unit quaternion.
    #[inline]
    pub fn normalized_from(quaternion: Quaternion) -> Self {
        Self {
            inner: quaternion.normalized(),
        }
    }

    /// Creates the rotation of `angle` radians about the given axis.
    ///
    /// The axis must be a unit directional vector.
    #[inline]
    pub fn from_axis_angle(axis: &Vector4, angle: f32) -> Self {
        let (sin, cos) = (0.5 * angle).sin_cos();
        let imag = axis.scaled(sin);
        Self::unchecked_from(Quaternion::new(imag.x(), imag.y(), imag.z(), cos))
    }

    /// Computes the inverse rotation.
    ///
    /// For a unit quaternion the inverse is the conjugate, so no division is
    /// involved.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::unchecked_from(self.inner.conjugate())
    }

    /// Computes this quaternion with all lanes negated, which represents the
    /// same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::unchecked_from(self.inner.negated())
    }

    /// The real (scalar) part.
    #[inline]
    pub fn real(&self) -> f32 {
        self.inner.real()
    }

    /// The imaginary part as a directional vector (x, y, z, 0).
    #[inline]
    pub fn imag(&self) -> Vector4 {
        self.inner.imag()
    }

    /// The underlying general quaternion.
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion {
        self.inner
    }

    /// Interpolates along the shorter great-circle arc between this rotation
    /// and `other`, for `t` in [0, 1].
    ///
    /// When the two quaternions point into opposite half-spaces, `other` is
    /// negated first so the interpolation never takes the long way around
    /// (a quaternion and its negation represent the same rotation). Nearly
    /// identical inputs are interpolated linearly and renormalized to avoid
    /// dividing by a near-zero sine; the trigonometric branch does not
    /// renormalize its result.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let start = self.inner.as_vector();
        let mut end = *other.inner.as_vector();

        let mut cos_theta = start.dot(&end);
        if cos_theta < 0.0 {
            end = -end;
            cos_theta = -cos_theta;
        }

        if cos_theta > 1.0 - SLERP_LERP_THRESHOLD {
            let lerped = &start.scaled(1.0 - t) + &end.scaled(t);
            return Self::unchecked_from(Quaternion::from_vector(lerped.normalized()));
        }

        let theta = cos_theta.acos();
        let inv_sin_theta = 1.0 / theta.sin();
        let start_weight = ((1.0 - t) * theta).sin() * inv_sin_theta;
        let end_weight = (t * theta).sin() * inv_sin_theta;

        Self::unchecked_from(Quaternion::from_vector(
            &start.scaled(start_weight) + &end.scaled(end_weight),
        ))
    }

    /// Rotates the given directional vector (w = 0) by this rotation.
    ///
    /// Implements the sandwich product `q * v * conjugate(q)` without
    /// materializing an intermediate with a nonzero w lane; the result's
    /// w lane is exactly 0.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector4) -> Vector4 {
        Vector4::from_repr(backend::quat_rotate_vector(
            self.inner.as_vector().repr(),
            vector.repr(),
        ))
    }

    /// Computes the rotation matrix applying this rotation.
    #[inline]
    pub fn to_rotation_matrix(&self) -> Matrix4 {
        Matrix4::from_columns(
            self.rotate_vector(&Vector4::unit_x()),
            self.rotate_vector(&Vector4::unit_y()),
            self.rotate_vector(&Vector4::unit_z()),
            Vector4::unit_w(),
        )
    }
}

impl Default for UnitQuaternion {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(
    Mul,
    mul,
    UnitQuaternion,
    UnitQuaternion,
    UnitQuaternion,
    |a, b| { UnitQuaternion::unchecked_from(&a.inner * &b.inner) }
);

impl_abs_diff_eq!(UnitQuaternion, |a, b, epsilon| {
    Quaternion::abs_diff_eq(&a.inner, &b.inner, epsilon)
});

impl_relative_eq!(UnitQuaternion, |a, b, epsilon, max_relative| {
    Quaternion::relative_eq(&a.inner, &b.inner, epsilon, max_relative)
});

const _: () = assert!(size_of::<Quaternion>() == 4 * size_of::<f32>());
const _: () = assert!(size_of::<UnitQuaternion>() == 4 * size_of::<f32>());
