//! x86_64 SSE backend.
//!
//! SSE2 is the x86_64 baseline; the dot product kernel is upgraded to the
//! SSE3 horizontal add or the SSE4.1 dot-product instruction when the
//! corresponding target feature is enabled at build time.

#[allow(clippy::wildcard_imports)]
use core::arch::x86_64::*;

pub type Repr = __m128;

#[inline]
pub fn new(x: f32, y: f32, z: f32, w: f32) -> Repr {
    // _mm_set_ps takes lanes from high to low.
    unsafe { _mm_set_ps(w, z, y, x) }
}

#[inline]
pub fn splat(value: f32) -> Repr {
    unsafe { _mm_set1_ps(value) }
}

#[inline]
pub fn from_array(array: &[f32; 4]) -> Repr {
    unsafe { _mm_loadu_ps(array.as_ptr()) }
}

/// # Safety
///
/// `ptr` must be valid for reading 4 consecutive `f32` values and must be
/// 16-byte aligned.
#[inline]
pub unsafe fn from_aligned(ptr: *const f32) -> Repr {
    unsafe { _mm_load_ps(ptr) }
}

#[inline]
pub fn to_array(v: Repr) -> [f32; 4] {
    let mut out = [0.0; 4];
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), v) };
    out
}

#[inline]
pub fn add(a: Repr, b: Repr) -> Repr {
    unsafe { _mm_add_ps(a, b) }
}

#[inline]
pub fn sub(a: Repr, b: Repr) -> Repr {
    unsafe { _mm_sub_ps(a, b) }
}

#[inline]
pub fn neg(a: Repr) -> Repr {
    unsafe { _mm_xor_ps(a, _mm_set1_ps(-0.0)) }
}

#[inline]
pub fn mul(a: Repr, b: Repr) -> Repr {
    unsafe { _mm_mul_ps(a, b) }
}

#[inline]
pub fn scale(a: Repr, s: f32) -> Repr {
    unsafe { _mm_mul_ps(a, _mm_set1_ps(s)) }
}

#[inline]
pub fn dot(a: Repr, b: Repr) -> f32 {
    #[cfg(target_feature = "sse4.1")]
    {
        unsafe { _mm_cvtss_f32(_mm_dp_ps::<0xF1>(a, b)) }
    }
    #[cfg(all(target_feature = "sse3", not(target_feature = "sse4.1")))]
    {
        unsafe {
            let prod = _mm_mul_ps(a, b);
            let sums = _mm_hadd_ps(prod, prod);
            _mm_cvtss_f32(_mm_hadd_ps(sums, sums))
        }
    }
    #[cfg(not(target_feature = "sse3"))]
    {
        unsafe {
            let prod = _mm_mul_ps(a, b);
            // _MM_SHUFFLE(2, 3, 0, 1)
            let shuf = _mm_shuffle_ps::<0b10_11_00_01>(prod, prod);
            let sums = _mm_add_ps(prod, shuf);
            let high = _mm_movehl_ps(sums, sums);
            _mm_cvtss_f32(_mm_add_ss(sums, high))
        }
    }
}

/// Negates the imaginary lanes, leaving the real lane untouched.
#[inline]
pub fn quat_conjugate(q: Repr) -> Repr {
    unsafe { _mm_xor_ps(q, _mm_set_ps(0.0, -0.0, -0.0, -0.0)) }
}

/// Hamilton product. The right-hand operand is the rotation applied first.
///
/// The four partial products follow the sign pattern
/// ```text
/// x = w0*x1 + x0*w1 + y0*z1 - z0*y1
/// y = w0*y1 + y0*w1 + z0*x1 - x0*z1
/// z = w0*z1 + z0*w1 + x0*y1 - y0*x1
/// w = w0*w1 - x0*x1 - y0*y1 - z0*z1
/// ```
/// with the sign flips on the w lane done by an xor mask.
#[inline]
pub fn quat_mul(a: Repr, b: Repr) -> Repr {
    unsafe {
        let w_sign = _mm_set_ps(-0.0, 0.0, 0.0, 0.0);

        // _MM_SHUFFLE(0, 2, 1, 0)
        let a_xyzx = _mm_shuffle_ps::<0b00_10_01_00>(a, a);
        // _MM_SHUFFLE(1, 0, 2, 1)
        let a_yzxy = _mm_shuffle_ps::<0b01_00_10_01>(a, a);
        // _MM_SHUFFLE(2, 1, 0, 2)
        let a_zxyz = _mm_shuffle_ps::<0b10_01_00_10>(a, a);
        // _MM_SHUFFLE(3, 3, 3, 3)
        let a_wwww = _mm_shuffle_ps::<0b11_11_11_11>(a, a);

        // _MM_SHUFFLE(0, 3, 3, 3)
        let b_wwwx = _mm_shuffle_ps::<0b00_11_11_11>(b, b);
        // _MM_SHUFFLE(1, 1, 0, 2)
        let b_zxyy = _mm_shuffle_ps::<0b01_01_00_10>(b, b);
        // _MM_SHUFFLE(2, 0, 2, 1)
        let b_yzxz = _mm_shuffle_ps::<0b10_00_10_01>(b, b);

        let t0 = _mm_mul_ps(a_wwww, b);
        let t1 = _mm_xor_ps(_mm_mul_ps(a_xyzx, b_wwwx), w_sign);
        let t2 = _mm_xor_ps(_mm_mul_ps(a_yzxy, b_zxyy), w_sign);
        let t3 = _mm_mul_ps(a_zxyz, b_yzxz);

        _mm_sub_ps(_mm_add_ps(_mm_add_ps(t0, t1), t2), t3)
    }
}

/// Rotates the directional vector `v` (w = 0) by the unit quaternion `q`.
///
/// Uses the double-cross expansion of the sandwich product
/// `q * v * conjugate(q)`. Every intermediate keeps a zero w lane, so the
/// result's w lane is exactly 0.
#[inline]
pub fn quat_rotate_vector(q: Repr, v: Repr) -> Repr {
    unsafe {
        let t = scale(cross(q, v), 2.0);
        // _MM_SHUFFLE(3, 3, 3, 3)
        let q_wwww = _mm_shuffle_ps::<0b11_11_11_11>(q, q);
        _mm_add_ps(_mm_add_ps(v, _mm_mul_ps(q_wwww, t)), cross(q, t))
    }
}

#[inline]
fn cross(a: Repr, b: Repr) -> Repr {
    // cross(a, b) = yzx(a * yzx(b) - yzx(a) * b); the w lanes cancel to 0.
    unsafe {
        // _MM_SHUFFLE(3, 0, 2, 1)
        let a_yzxw = _mm_shuffle_ps::<0b11_00_10_01>(a, a);
        let b_yzxw = _mm_shuffle_ps::<0b11_00_10_01>(b, b);
        let prod = _mm_sub_ps(_mm_mul_ps(a, b_yzxw), _mm_mul_ps(a_yzxw, b));
        _mm_shuffle_ps::<0b11_00_10_01>(prod, prod)
    }
}
