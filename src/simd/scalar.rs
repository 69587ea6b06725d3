//! Portable scalar backend.
//!
//! Plain `[f32; 4]` arithmetic with no alignment requirements. This is the
//! fallback tier for targets without a supported SIMD instruction set, and the
//! numeric reference the accelerated backends are tested against.

pub type Repr = [f32; 4];

#[inline]
pub fn new(x: f32, y: f32, z: f32, w: f32) -> Repr {
    [x, y, z, w]
}

#[inline]
pub fn splat(value: f32) -> Repr {
    [value; 4]
}

#[inline]
pub fn from_array(array: &[f32; 4]) -> Repr {
    *array
}

/// # Safety
///
/// `ptr` must be valid for reading 4 consecutive `f32` values. Alignment
/// beyond that of `f32` is not required by this backend.
#[inline]
pub unsafe fn from_aligned(ptr: *const f32) -> Repr {
    unsafe { ptr.cast::<[f32; 4]>().read_unaligned() }
}

#[inline]
pub fn to_array(v: Repr) -> [f32; 4] {
    v
}

#[inline]
pub fn add(a: Repr, b: Repr) -> Repr {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

#[inline]
pub fn sub(a: Repr, b: Repr) -> Repr {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
}

#[inline]
pub fn neg(a: Repr) -> Repr {
    [-a[0], -a[1], -a[2], -a[3]]
}

#[inline]
pub fn mul(a: Repr, b: Repr) -> Repr {
    [a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]]
}

#[inline]
pub fn scale(a: Repr, s: f32) -> Repr {
    [a[0] * s, a[1] * s, a[2] * s, a[3] * s]
}

#[inline]
pub fn dot(a: Repr, b: Repr) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Negates the imaginary lanes, leaving the real lane untouched.
#[inline]
pub fn quat_conjugate(q: Repr) -> Repr {
    [-q[0], -q[1], -q[2], q[3]]
}

/// Hamilton product. The right-hand operand is the rotation applied first.
#[inline]
pub fn quat_mul(a: Repr, b: Repr) -> Repr {
    let [x0, y0, z0, w0] = a;
    let [x1, y1, z1, w1] = b;
    [
        w0 * x1 + x0 * w1 + y0 * z1 - z0 * y1,
        w0 * y1 + y0 * w1 + z0 * x1 - x0 * z1,
        w0 * z1 + z0 * w1 + x0 * y1 - y0 * x1,
        w0 * w1 - x0 * x1 - y0 * y1 - z0 * z1,
    ]
}

/// Rotates the directional vector `v` (w = 0) by the unit quaternion `q`.
///
/// Uses the double-cross expansion of the sandwich product
/// `q * v * conjugate(q)`, which never materializes an intermediate with a
/// nonzero w lane: the result's w lane is exactly 0.
#[inline]
pub fn quat_rotate_vector(q: Repr, v: Repr) -> Repr {
    let t = scale(cross(q, v), 2.0);
    add(add(v, scale(t, q[3])), cross(q, t))
}

#[inline]
fn cross(a: Repr, b: Repr) -> Repr {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
        0.0,
    ]
}
