//! Scalar approximation core.
//!
//! Bounded-error replacements for the float functions a transform pipeline
//! leans on. Everything here funnels into two primitives:
//! [`fsrra`](crate::hw::fsrra) for roots and reciprocals, and the IEEE-754
//! bit pattern itself for `pow2`/`log2`.
//!
//! None of these functions handle NaN or infinity, and the integer-based
//! rounding family is only valid within `±2^31`. Every function with a
//! meaningful exact counterpart has an `*_exact` sibling; use it for
//! constants and for reference checks.

use crate::float_ops;
use crate::hw;

/// `log2(e)`
const LOG2_E: f32 = 1.442_695_04;
/// `ln(2)`
const LN_2: f32 = 0.693_147_18;
/// Exponent bias tuned to spread the piecewise-linear error evenly.
const POW2_BIAS: f32 = 126.942_695_04;

#[inline]
pub fn abs(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & 0x7fff_ffff)
}

#[inline]
pub fn copysign(x: f32, sign: f32) -> f32 {
    f32::from_bits((x.to_bits() & 0x7fff_ffff) | (sign.to_bits() & 0x8000_0000))
}

#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    if x < lo { lo } else if x > hi { hi } else { x }
}

/// Truncation toward zero through an integer conversion.
#[inline]
pub fn trunc(x: f32) -> f32 {
    x as i32 as f32
}

#[inline]
pub fn floor(x: f32) -> f32 {
    let t = trunc(x);
    if x < t { t - 1.0 } else { t }
}

#[inline]
pub fn ceil(x: f32) -> f32 {
    let t = trunc(x);
    if x > t { t + 1.0 } else { t }
}

/// Rounds half away from zero.
#[inline]
pub fn round(x: f32) -> f32 {
    let a = abs(x);
    let t = a as u32 as f32;
    let r = if a - t >= 0.5 { t + 1.0 } else { t };
    copysign(r, x)
}

/// `num - trunc(num / denom) * denom`.
///
/// The quotient uses exact division. The FSRRA reciprocal is off by up to
/// 0.1%, which for `|num / denom|` past a few hundred moves the truncated
/// quotient by a whole step. [`remainder`] and [`remquo`] do the same.
#[inline]
pub fn fmod(num: f32, denom: f32) -> f32 {
    num - trunc(num / denom) * denom
}

/// `num - round(num / denom) * denom`, with [`round`]'s half-away tie rule.
#[inline]
pub fn remainder(num: f32, denom: f32) -> f32 {
    num - round(num / denom) * denom
}

/// [`remainder`] together with the rounded quotient.
#[inline]
pub fn remquo(num: f32, denom: f32) -> (f32, i32) {
    let quo = round(num / denom);
    (num - quo * denom, quo as i32)
}

/// `a * b + c` in one rounding step.
#[inline]
pub fn fma(a: f32, b: f32, c: f32) -> f32 {
    float_ops::fma_f32(a, b, c)
}

/// Positive difference.
#[inline]
pub fn fdim(x: f32, y: f32) -> f32 {
    if x > y { x - y } else { 0.0 }
}

#[inline]
pub fn hypot(x: f32, y: f32) -> f32 {
    sqrt(x * x + y * y)
}

/// Linear interpolation, exact at both `t = 0` and `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Interpolates across a triangle with barycentric weights `u` (towards
/// `b`) and `v` (towards `c`).
#[inline]
pub fn barycentric_lerp(a: f32, b: f32, c: f32, u: f32, v: f32) -> f32 {
    fma(u, b - a, fma(v, c - a, a))
}

/// Approximate `1 / sqrt(x)`. Undefined for `x <= 0`.
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    hw::fsrra(x)
}

/// `x * inv_sqrt(x)`, with no special case for zero.
#[inline]
pub fn sqrt_fsrra(x: f32) -> f32 {
    hw::fsrra(x) * x
}

/// Approximate square root. `sqrt(0) == 0`.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    if x == 0.0 { 0.0 } else { sqrt_fsrra(x) }
}

/// `inv_sqrt(x * x)`: the magnitude of `1 / x`, sign dropped.
#[inline]
pub fn inv_fsrra(x: f32) -> f32 {
    hw::fsrra(x * x)
}

/// Approximate `1 / x`.
#[inline]
pub fn inv(x: f32) -> f32 {
    let r = inv_fsrra(x);
    if x < 0.0 { -r } else { r }
}

/// Approximate `num / denom`.
#[inline]
pub fn div(num: f32, denom: f32) -> f32 {
    num * inv(denom)
}

/// `num * inv_fsrra(denom)`: skips the sign fix-up, so the result carries
/// the sign of `num` only. For denominators known to be positive.
#[inline]
pub fn div_fsrra(num: f32, denom: f32) -> f32 {
    num * inv_fsrra(denom)
}

/// 4-wide dot product in one fused inner product.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn dot8(x1: f32, y1: f32, z1: f32, w1: f32, x2: f32, y2: f32, z2: f32, w2: f32) -> f32 {
    hw::fipr([x1, y1, z1, w1], [x2, y2, z2, w2])
}

/// Squared magnitude of a 4-vector.
#[inline]
pub fn mag_sqr4(x: f32, y: f32, z: f32, w: f32) -> f32 {
    let v = [x, y, z, w];
    hw::fipr(v, v)
}

/// `2^p`, reading `p` straight into the exponent field.
///
/// Exponents below -126 clamp to the smallest normal.
#[inline]
pub fn pow2(p: f32) -> f32 {
    let p = if p < -126.0 { -126.0 } else { p };
    f32::from_bits(((1u32 << 23) as f32 * (p + POW2_BIAS)) as u32)
}

/// `log2(x)` from the bit pattern of `x`. `x` must be positive.
#[inline]
pub fn log2(x: f32) -> f32 {
    debug_assert!(x >= 0.0, "log2 of negative {}", x);
    x.to_bits() as f32 * 1.192_092_9e-7 - POW2_BIAS
}

#[inline]
pub fn log(x: f32) -> f32 {
    LN_2 * log2(x)
}

#[inline]
pub fn pow(x: f32, p: f32) -> f32 {
    pow2(p * log2(x))
}

#[inline]
pub fn exp(p: f32) -> f32 {
    pow2(LOG2_E * p)
}

/// Linear congruential generator. Advances `seed` and returns a value in
/// `[0, 1)`.
#[inline]
pub fn rand(seed: &mut u32) -> f32 {
    *seed = 0x0026_9ec3_u32.wrapping_add(seed.wrapping_mul(0x0003_43fd));
    f32::from_bits((*seed >> 9) | 0x3f80_0000) - 1.0
}

/// [`rand`] mapped onto `[min, max)`.
#[inline]
pub fn rand_range(seed: &mut u32, min: f32, max: f32) -> f32 {
    min + rand(seed) * (max - min)
}

macro_rules! exact_fallbacks {
    ($($name:ident => $op:ident($($arg:ident),+);)*) => {
        ::paste::paste! {
            $(
                #[doc = concat!("Exact `", stringify!($name), "`, for constant operands and reference checks.")]
                #[inline]
                pub fn [<$name _exact>]($($arg: f32),+) -> f32 {
                    float_ops::$op($($arg),+)
                }
            )*
        }
    };
}

exact_fallbacks! {
    sqrt => sqrt_f32(x);
    floor => floor_f32(x);
    ceil => ceil_f32(x);
    round => round_f32(x);
    hypot => hypot_f32(x, y);
    pow2 => exp2_f32(p);
    log2 => log2_f32(x);
    log => ln_f32(x);
    pow => powf_f32(x, p);
    exp => exp_f32(p);
}

/// Exact `1 / sqrt(x)`.
#[inline]
pub fn inv_sqrt_exact(x: f32) -> f32 {
    1.0 / float_ops::sqrt_f32(x)
}

/// Exact `1 / x`.
#[inline]
pub fn inv_exact(x: f32) -> f32 {
    1.0 / x
}

/// Exact `num / denom`.
#[inline]
pub fn div_exact(num: f32, denom: f32) -> f32 {
    num / denom
}
