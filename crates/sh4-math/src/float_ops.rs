// Exact float backend for the `*_exact` siblings and the FSCA table.
// In std mode, use inherent float methods. In no_std, use libm.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("sh4-math needs either the `std` or the `libm` feature");

#[cfg(feature = "std")]
mod imp {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        x.sin()
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        x.cos()
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        x.tan()
    }
    #[inline(always)]
    pub fn asin_f32(x: f32) -> f32 {
        x.asin()
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        x.acos()
    }
    #[inline(always)]
    pub fn atan_f32(x: f32) -> f32 {
        x.atan()
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn floor_f32(x: f32) -> f32 {
        x.floor()
    }
    #[inline(always)]
    pub fn ceil_f32(x: f32) -> f32 {
        x.ceil()
    }
    #[inline(always)]
    pub fn round_f32(x: f32) -> f32 {
        x.round()
    }
    #[inline(always)]
    pub fn exp_f32(x: f32) -> f32 {
        x.exp()
    }
    #[inline(always)]
    pub fn exp2_f32(x: f32) -> f32 {
        x.exp2()
    }
    #[inline(always)]
    pub fn ln_f32(x: f32) -> f32 {
        x.ln()
    }
    #[inline(always)]
    pub fn log2_f32(x: f32) -> f32 {
        x.log2()
    }
    #[inline(always)]
    pub fn powf_f32(x: f32, p: f32) -> f32 {
        x.powf(p)
    }
    #[inline(always)]
    pub fn hypot_f32(x: f32, y: f32) -> f32 {
        x.hypot(y)
    }
    #[inline(always)]
    pub fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
        a.mul_add(b, c)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod imp {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        libm::tanf(x)
    }
    #[inline(always)]
    pub fn asin_f32(x: f32) -> f32 {
        libm::asinf(x)
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        libm::acosf(x)
    }
    #[inline(always)]
    pub fn atan_f32(x: f32) -> f32 {
        libm::atanf(x)
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
    #[inline(always)]
    pub fn floor_f32(x: f32) -> f32 {
        libm::floorf(x)
    }
    #[inline(always)]
    pub fn ceil_f32(x: f32) -> f32 {
        libm::ceilf(x)
    }
    #[inline(always)]
    pub fn round_f32(x: f32) -> f32 {
        libm::roundf(x)
    }
    #[inline(always)]
    pub fn exp_f32(x: f32) -> f32 {
        libm::expf(x)
    }
    #[inline(always)]
    pub fn exp2_f32(x: f32) -> f32 {
        libm::exp2f(x)
    }
    #[inline(always)]
    pub fn ln_f32(x: f32) -> f32 {
        libm::logf(x)
    }
    #[inline(always)]
    pub fn log2_f32(x: f32) -> f32 {
        libm::log2f(x)
    }
    #[inline(always)]
    pub fn powf_f32(x: f32, p: f32) -> f32 {
        libm::powf(x, p)
    }
    #[inline(always)]
    pub fn hypot_f32(x: f32, y: f32) -> f32 {
        libm::hypotf(x, y)
    }
    #[inline(always)]
    pub fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
        libm::fmaf(a, b, c)
    }
}

pub(crate) use imp::*;
