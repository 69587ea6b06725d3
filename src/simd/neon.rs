//! aarch64 NEON backend.
//!
//! NEON is mandatory on aarch64, so this tier is selected for every aarch64
//! build. Lane permutations are built from `vextq` rotations patched up with
//! `vcopyq_laneq`.

#[allow(clippy::wildcard_imports)]
use core::arch::aarch64::*;

pub type Repr = float32x4_t;

#[inline]
pub fn new(x: f32, y: f32, z: f32, w: f32) -> Repr {
    from_array(&[x, y, z, w])
}

#[inline]
pub fn splat(value: f32) -> Repr {
    vdupq_n_f32(value)
}

#[inline]
pub fn from_array(array: &[f32; 4]) -> Repr {
    unsafe { vld1q_f32(array.as_ptr()) }
}

/// # Safety
///
/// `ptr` must be valid for reading 4 consecutive `f32` values and must be
/// 16-byte aligned.
#[inline]
pub unsafe fn from_aligned(ptr: *const f32) -> Repr {
    unsafe { vld1q_f32(ptr) }
}

#[inline]
pub fn to_array(v: Repr) -> [f32; 4] {
    let mut out = [0.0; 4];
    unsafe { vst1q_f32(out.as_mut_ptr(), v) };
    out
}

#[inline]
pub fn add(a: Repr, b: Repr) -> Repr {
    vaddq_f32(a, b)
}

#[inline]
pub fn sub(a: Repr, b: Repr) -> Repr {
    vsubq_f32(a, b)
}

#[inline]
pub fn neg(a: Repr) -> Repr {
    vnegq_f32(a)
}

#[inline]
pub fn mul(a: Repr, b: Repr) -> Repr {
    vmulq_f32(a, b)
}

#[inline]
pub fn scale(a: Repr, s: f32) -> Repr {
    vmulq_n_f32(a, s)
}

#[inline]
pub fn dot(a: Repr, b: Repr) -> f32 {
    vaddvq_f32(vmulq_f32(a, b))
}

/// Negates the imaginary lanes, leaving the real lane untouched.
#[inline]
pub fn quat_conjugate(q: Repr) -> Repr {
    vsetq_lane_f32::<3>(vgetq_lane_f32::<3>(q), vnegq_f32(q))
}

/// Hamilton product. The right-hand operand is the rotation applied first.
///
/// Same partial-product layout as the SSE backend:
/// ```text
/// x = w0*x1 + x0*w1 + y0*z1 - z0*y1
/// y = w0*y1 + y0*w1 + z0*x1 - x0*z1
/// z = w0*z1 + z0*w1 + x0*y1 - y0*x1
/// w = w0*w1 - x0*x1 - y0*y1 - z0*z1
/// ```
#[inline]
pub fn quat_mul(a: Repr, b: Repr) -> Repr {
    let a_xyzx = vcopyq_laneq_f32::<3, 0>(a, a);
    let a_yzxy = vcopyq_laneq_f32::<3, 1>(yzxw(a), a);
    let a_zxyz = vcopyq_laneq_f32::<3, 2>(zxyw(a), a);
    let a_wwww = vdupq_laneq_f32::<3>(a);

    let b_wwwx = vcopyq_laneq_f32::<3, 0>(vdupq_laneq_f32::<3>(b), b);
    let b_zxyy = vcopyq_laneq_f32::<3, 1>(zxyw(b), b);
    let b_yzxz = vcopyq_laneq_f32::<3, 2>(yzxw(b), b);

    let t0 = vmulq_f32(a_wwww, b);
    let t1 = negate_w(vmulq_f32(a_xyzx, b_wwwx));
    let t2 = negate_w(vmulq_f32(a_yzxy, b_zxyy));
    let t3 = vmulq_f32(a_zxyz, b_yzxz);

    vsubq_f32(vaddq_f32(vaddq_f32(t0, t1), t2), t3)
}

/// Rotates the directional vector `v` (w = 0) by the unit quaternion `q`.
///
/// Uses the double-cross expansion of the sandwich product
/// `q * v * conjugate(q)`. Every intermediate keeps a zero w lane, so the
/// result's w lane is exactly 0.
#[inline]
pub fn quat_rotate_vector(q: Repr, v: Repr) -> Repr {
    let t = scale(cross(q, v), 2.0);
    let q_wwww = vdupq_laneq_f32::<3>(q);
    vaddq_f32(vaddq_f32(v, vmulq_f32(q_wwww, t)), cross(q, t))
}

#[inline]
fn cross(a: Repr, b: Repr) -> Repr {
    // cross(a, b) = yzx(a * yzx(b) - yzx(a) * b); the w lanes cancel to 0.
    yzxw(vsubq_f32(vmulq_f32(a, yzxw(b)), vmulq_f32(yzxw(a), b)))
}

/// Permutes `[x, y, z, w]` into `[y, z, x, w]`.
#[inline]
fn yzxw(v: Repr) -> Repr {
    let r = vextq_f32::<1>(v, v);
    let r = vcopyq_laneq_f32::<2, 0>(r, v);
    vcopyq_laneq_f32::<3, 3>(r, v)
}

/// Permutes `[x, y, z, w]` into `[z, x, y, w]`.
#[inline]
fn zxyw(v: Repr) -> Repr {
    let r = vextq_f32::<2>(v, v);
    let r = vcopyq_laneq_f32::<1, 0>(r, v);
    let r = vcopyq_laneq_f32::<2, 1>(r, v);
    vcopyq_laneq_f32::<3, 3>(r, v)
}

#[inline]
fn negate_w(v: Repr) -> Repr {
    vsetq_lane_f32::<3>(-vgetq_lane_f32::<3>(v), v)
}
