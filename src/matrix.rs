//! Matrices.

use crate::vector::Vector4;
use bytemuck::{Pod, Zeroable};

/// A 4x4 column-major matrix.
///
/// Each column is a [`Vector4`], so the matrix inherits the lane layout and
/// alignment of the selected backend.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    column_1: Vector4,
    column_2: Vector4,
    column_3: Vector4,
    column_4: Vector4,
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_columns(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self {
            column_1,
            column_2,
            column_3,
            column_4,
        }
    }

    /// The first column of the matrix.
    #[inline]
    pub fn column_1(&self) -> &Vector4 {
        &self.column_1
    }

    /// The second column of the matrix.
    #[inline]
    pub fn column_2(&self) -> &Vector4 {
        &self.column_2
    }

    /// The third column of the matrix.
    #[inline]
    pub fn column_3(&self) -> &Vector4 {
        &self.column_3
    }

    /// The fourth column of the matrix.
    #[inline]
    pub fn column_4(&self) -> &Vector4 {
        &self.column_4
    }

    /// Applies the matrix to the given vector.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector4) -> Vector4 {
        let [x, y, z, w] = vector.to_array();
        &(&(&self.column_1.scaled(x) + &self.column_2.scaled(y)) + &self.column_3.scaled(z))
            + &self.column_4.scaled(w)
    }
}

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |matrix, vector| {
    matrix.transform_vector(vector)
});

const _: () = assert!(size_of::<Matrix4>() == 16 * size_of::<f32>());
