//! Rigid transforms built on the quaternion algebra.

use crate::{
    quaternion::{Quaternion, UnitQuaternion},
    vector::Vector4,
};
use bytemuck::{Pod, Zeroable};

/// A rotation followed by a uniform scale and a translation.
///
/// The translation vector carries the scale factor in its w lane, keeping the
/// whole transform in 8 floats.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Transform {
    rotation: UnitQuaternion,
    translation_scale: Vector4,
}

/// A rigid transform encoded as a dual quaternion.
///
/// The real part is the rotation (unit length by caller contract) and the
/// dual part encodes the translation.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct DualQuaternion {
    real: Quaternion,
    dual: Quaternion,
}

impl Transform {
    /// Creates the identity transform (no rotation, no translation, unit
    /// scale).
    #[inline]
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation_scale: Vector4::unit_w(),
        }
    }

    /// Creates a transform from a rotation, a translation (directional
    /// vector) and a uniform scale factor.
    #[inline]
    pub fn new(rotation: UnitQuaternion, translation: &Vector4, scale: f32) -> Self {
        let [x, y, z, _] = translation.to_array();
        Self {
            rotation,
            translation_scale: Vector4::new(x, y, z, scale),
        }
    }

    /// The rotation part.
    #[inline]
    pub fn rotation(&self) -> &UnitQuaternion {
        &self.rotation
    }

    /// The translation part, as a directional vector.
    #[inline]
    pub fn translation(&self) -> Vector4 {
        self.translation_scale.with_w_zero()
    }

    /// The uniform scale factor.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.translation_scale.w()
    }

    /// Applies scale and rotation to the given directional vector.
    /// Directions are not translated.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector4) -> Vector4 {
        self.rotation.rotate_vector(&vector.scaled(self.scale()))
    }

    /// Applies the full transform (scale, then rotation, then translation)
    /// to the given point.
    #[inline]
    pub fn transform_point(&self, point: &Vector4) -> Vector4 {
        &self.transform_vector(point) + &self.translation()
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl DualQuaternion {
    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self {
            real: Quaternion::identity(),
            dual: Quaternion::zeros(),
        }
    }

    /// Creates a dual quaternion from a rotation and a translation
    /// (directional vector).
    #[inline]
    pub fn from_rotation_translation(rotation: &UnitQuaternion, translation: &Vector4) -> Self {
        let real = rotation.to_quaternion();
        let translation = Quaternion::from_vector(translation.with_w_zero());
        let dual = Quaternion::from_vector((&translation * &real).as_vector().scaled(0.5));
        Self { real, dual }
    }

    /// The rotation part.
    #[inline]
    pub fn rotation(&self) -> UnitQuaternion {
        UnitQuaternion::unchecked_from(self.real)
    }

    /// The translation part, as a directional vector.
    #[inline]
    pub fn translation(&self) -> Vector4 {
        let doubled = (&self.dual * &self.real.conjugate()).as_vector().scaled(2.0);
        doubled.with_w_zero()
    }

    /// Applies the transform (rotation, then translation) to the given
    /// point.
    #[inline]
    pub fn transform_point(&self, point: &Vector4) -> Vector4 {
        &self.rotation().rotate_vector(point) + &self.translation()
    }
}

impl Default for DualQuaternion {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

const _: () = assert!(size_of::<Transform>() == 8 * size_of::<f32>());
const _: () = assert!(size_of::<DualQuaternion>() == 8 * size_of::<f32>());

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn transform_identity_leaves_points_unchanged() {
        let p = Vector4::new(1.0, -2.0, 3.0, 0.0);
        assert_eq!(Transform::identity().transform_point(&p), p);
    }

    #[test]
    fn transform_accessors_return_parts() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector4::unit_y(), 0.4);
        let translation = Vector4::new(1.0, 2.0, 3.0, 0.0);
        let transform = Transform::new(rotation, &translation, 2.5);
        assert_eq!(*transform.rotation(), rotation);
        assert_eq!(transform.translation(), translation);
        assert_eq!(transform.scale(), 2.5);
    }

    #[test]
    fn transform_applies_scale_rotation_translation_in_order() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector4::unit_z(), FRAC_PI_2);
        let translation = Vector4::new(10.0, 0.0, 0.0, 0.0);
        let transform = Transform::new(rotation, &translation, 2.0);

        // (1, 0, 0): scaled to (2, 0, 0), rotated to (0, 2, 0), then
        // translated.
        let p = transform.transform_point(&Vector4::unit_x());
        assert_abs_diff_eq!(p, Vector4::new(10.0, 2.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn transform_does_not_translate_directions() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector4::unit_z(), FRAC_PI_2);
        let translation = Vector4::new(5.0, 5.0, 5.0, 0.0);
        let transform = Transform::new(rotation, &translation, 1.0);
        let v = transform.transform_vector(&Vector4::unit_x());
        assert_abs_diff_eq!(v, Vector4::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn dual_quaternion_identity_leaves_points_unchanged() {
        let p = Vector4::new(0.5, 1.5, -2.0, 0.0);
        assert_eq!(DualQuaternion::identity().transform_point(&p), p);
    }

    #[test]
    fn dual_quaternion_roundtrips_rotation_and_translation() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector4::unit_x(), 0.7);
        let translation = Vector4::new(1.0, -2.0, 0.5, 0.0);
        let dq = DualQuaternion::from_rotation_translation(&rotation, &translation);

        assert_abs_diff_eq!(
            dq.rotation().to_quaternion(),
            rotation.to_quaternion(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(dq.translation(), translation, epsilon = EPSILON);
    }

    #[test]
    fn dual_quaternion_transforms_points_like_rotate_then_translate() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector4::unit_z(), FRAC_PI_2);
        let translation = Vector4::new(0.0, 0.0, 3.0, 0.0);
        let dq = DualQuaternion::from_rotation_translation(&rotation, &translation);

        let p = dq.transform_point(&Vector4::unit_x());
        assert_abs_diff_eq!(p, Vector4::new(0.0, 1.0, 3.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn transform_layouts_are_eight_floats() {
        assert_eq!(size_of::<Transform>(), 32);
        assert_eq!(size_of::<DualQuaternion>(), 32);
    }
}
