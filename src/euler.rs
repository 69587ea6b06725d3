//! Euler angles and rotation-order identifiers.

use crate::vector::Vector4;
use bytemuck::{Pod, Zeroable};

const EVEN: u32 = 0;
const ODD: u32 = 1;
const NO_REPEAT: u32 = 0;
const REPEAT: u32 = 1;
const STATIC_FRAME: u32 = 0;
const ROTATING_FRAME: u32 = 1;

/// Packs the rotation-order parameters into an order identifier.
///
/// Consumers depend on the specific numeric identifier values, so this
/// packing must never change.
const fn pack_order(inner_axis: u32, parity: u32, repeat: u32, frame: u32) -> u32 {
    (((((inner_axis << 1) + parity) << 1) + repeat) << 1) + frame
}

/// Identifier for the order and method in which the three rotations of a
/// Euler angle triple are applied.
///
/// The three upper-case letters denote the axes the rotations are applied
/// around. The trailing lower-case letter denotes the frame of reference:
/// `s` applies each consecutive rotation in the unrotated (static) coordinate
/// system, `r` in the rotated one.
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    #[default]
    Xyzs = pack_order(0, EVEN, NO_REPEAT, STATIC_FRAME),
    Xyxs = pack_order(0, EVEN, REPEAT, STATIC_FRAME),
    Xzys = pack_order(0, ODD, NO_REPEAT, STATIC_FRAME),
    Xzxs = pack_order(0, ODD, REPEAT, STATIC_FRAME),
    Yzxs = pack_order(1, EVEN, NO_REPEAT, STATIC_FRAME),
    Yzys = pack_order(1, EVEN, REPEAT, STATIC_FRAME),
    Yxzs = pack_order(1, ODD, NO_REPEAT, STATIC_FRAME),
    Yxys = pack_order(1, ODD, REPEAT, STATIC_FRAME),
    Zxys = pack_order(2, EVEN, NO_REPEAT, STATIC_FRAME),
    Zxzs = pack_order(2, EVEN, REPEAT, STATIC_FRAME),
    Zyxs = pack_order(2, ODD, NO_REPEAT, STATIC_FRAME),
    Zyzs = pack_order(2, ODD, REPEAT, STATIC_FRAME),
    Zyxr = pack_order(0, EVEN, NO_REPEAT, ROTATING_FRAME),
    Xyxr = pack_order(0, EVEN, REPEAT, ROTATING_FRAME),
    Yzxr = pack_order(0, ODD, NO_REPEAT, ROTATING_FRAME),
    Xzxr = pack_order(0, ODD, REPEAT, ROTATING_FRAME),
    Xzyr = pack_order(1, EVEN, NO_REPEAT, ROTATING_FRAME),
    Yzyr = pack_order(1, EVEN, REPEAT, ROTATING_FRAME),
    Zxyr = pack_order(1, ODD, NO_REPEAT, ROTATING_FRAME),
    Yxyr = pack_order(1, ODD, REPEAT, ROTATING_FRAME),
    Yxzr = pack_order(2, EVEN, NO_REPEAT, ROTATING_FRAME),
    Zxzr = pack_order(2, EVEN, REPEAT, ROTATING_FRAME),
    Xyzr = pack_order(2, ODD, NO_REPEAT, ROTATING_FRAME),
    Zyzr = pack_order(2, ODD, REPEAT, ROTATING_FRAME),
}

impl EulerOrder {
    /// The packed numeric identifier of this order.
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Looks up the order with the given packed identifier.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            0 => Self::Xyzs,
            1 => Self::Zyxr,
            2 => Self::Xyxs,
            3 => Self::Xyxr,
            4 => Self::Xzys,
            5 => Self::Yzxr,
            6 => Self::Xzxs,
            7 => Self::Xzxr,
            8 => Self::Yzxs,
            9 => Self::Xzyr,
            10 => Self::Yzys,
            11 => Self::Yzyr,
            12 => Self::Yxzs,
            13 => Self::Zxyr,
            14 => Self::Yxys,
            15 => Self::Yxyr,
            16 => Self::Zxys,
            17 => Self::Yxzr,
            18 => Self::Zxzs,
            19 => Self::Zxzr,
            20 => Self::Zyxs,
            21 => Self::Xyzr,
            22 => Self::Zyzs,
            23 => Self::Zyzr,
            _ => return None,
        })
    }

    /// Whether each consecutive rotation is applied in the rotated frame of
    /// reference rather than the static one.
    #[inline]
    pub const fn rotating_frame(self) -> bool {
        self.bits() & 1 == 1
    }

    /// Whether the first and third rotation share an axis.
    #[inline]
    pub const fn repeats(self) -> bool {
        (self.bits() >> 1) & 1 == 1
    }

    /// Whether the axis order has odd parity.
    #[inline]
    pub const fn odd_parity(self) -> bool {
        (self.bits() >> 2) & 1 == 1
    }

    /// The index (0 = x, 1 = y, 2 = z) of the first rotation axis.
    #[inline]
    pub const fn inner_axis(self) -> u32 {
        self.bits() >> 3
    }
}

/// Three Euler angles in the x, y and z lanes, with the packed
/// [`EulerOrder`] identifier stored as bits in the w lane.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct EulerAngles {
    inner: Vector4,
}

impl EulerAngles {
    /// Creates a Euler angle triple (in radians) with the given rotation
    /// order.
    #[inline]
    pub fn new(first: f32, second: f32, third: f32, order: EulerOrder) -> Self {
        Self {
            inner: Vector4::new(first, second, third, f32::from_bits(order.bits())),
        }
    }

    /// The first rotation angle.
    #[inline]
    pub fn first(&self) -> f32 {
        self.inner.x()
    }

    /// The second rotation angle.
    #[inline]
    pub fn second(&self) -> f32 {
        self.inner.y()
    }

    /// The third rotation angle.
    #[inline]
    pub fn third(&self) -> f32 {
        self.inner.z()
    }

    /// The rotation order, or [`None`] if the w lane does not hold a valid
    /// order identifier (only possible for values not created with
    /// [`new`](Self::new)).
    #[inline]
    pub fn order(&self) -> Option<EulerOrder> {
        EulerOrder::from_bits(self.inner.w().to_bits())
    }
}

const _: () = assert!(size_of::<EulerAngles>() == 4 * size_of::<f32>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_order_identifiers_have_expected_values() {
        // The packed values form the public contract.
        assert_eq!(EulerOrder::Xyzs.bits(), 0);
        assert_eq!(EulerOrder::Xyxs.bits(), 2);
        assert_eq!(EulerOrder::Yzxs.bits(), 8);
        assert_eq!(EulerOrder::Zxys.bits(), 16);
        assert_eq!(EulerOrder::Zyzs.bits(), 22);
        assert_eq!(EulerOrder::Zyxr.bits(), 1);
        assert_eq!(EulerOrder::Zyzr.bits(), 23);
    }

    #[test]
    fn euler_order_default_is_xyz_static() {
        assert_eq!(EulerOrder::default(), EulerOrder::Xyzs);
    }

    #[test]
    fn euler_order_bits_roundtrip_through_lookup() {
        for bits in 0..24 {
            let order = EulerOrder::from_bits(bits).unwrap();
            assert_eq!(order.bits(), bits);
        }
        assert_eq!(EulerOrder::from_bits(24), None);
    }

    #[test]
    fn euler_order_field_decoding_works() {
        assert!(!EulerOrder::Xyzs.rotating_frame());
        assert!(EulerOrder::Zyxr.rotating_frame());
        assert!(EulerOrder::Xyxs.repeats());
        assert!(!EulerOrder::Xzys.repeats());
        assert!(EulerOrder::Xzys.odd_parity());
        assert_eq!(EulerOrder::Yzxs.inner_axis(), 1);
        assert_eq!(EulerOrder::Zxys.inner_axis(), 2);
    }

    #[test]
    fn euler_angles_store_angles_and_order() {
        let angles = EulerAngles::new(0.1, 0.2, 0.3, EulerOrder::Zxzr);
        assert_eq!(angles.first(), 0.1);
        assert_eq!(angles.second(), 0.2);
        assert_eq!(angles.third(), 0.3);
        assert_eq!(angles.order(), Some(EulerOrder::Zxzr));
    }

    #[test]
    fn euler_angles_layout_is_four_floats() {
        assert_eq!(size_of::<EulerAngles>(), 16);
    }
}
