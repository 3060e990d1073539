//! sh4-math: Fast approximate 3D math for SH4-class FPUs
//!
//! Scalars, vectors, quaternions and matrices built on the handful of
//! fused instructions an SH4 offers: a reciprocal square root (FSRRA), a
//! combined sine and cosine (FSCA), a 4-wide inner product (FIPR) and a
//! 4x4 matrix-vector transform (FTRV) against a dedicated bank of sixteen
//! registers, the active matrix. [`hw`] carries software forms of those
//! instructions so everything above them runs and tests on any target.
//!
//! # Design principles
//! - Approximate by default: every fast routine has a documented error
//!   bound and, where one exists, an `*_exact` sibling
//! - No runtime error channel; preconditions are debug assertions and the
//!   division-prone operations come with `*_safe` variants
//! - The active matrix is an owned value ([`Xmtrx`]), not hidden global
//!   state; every method documents which registers it clobbers
//! - `#[repr(C)]` everywhere; `Mat4x4` is 8-byte aligned for paired moves
//! - `no_std` first; `std` or `libm` supplies the exact fallbacks

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod float_ops;

pub mod circle;
pub mod fpscr;
pub mod hw;
pub mod scalar;
pub mod trig;
pub mod xmtrx;

mod mat2;
mod mat3;
mod mat3x4;
mod mat4;
mod mat4x3;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use circle::{circle_matrix, CircleStep};
pub use fpscr::{FpuException, Fpscr, RoundingMode};
pub use mat2::Mat2x2;
pub use mat3::Mat3x3;
pub use mat3x4::Mat3x4;
pub use mat4::Mat4x4;
pub use mat4x3::Mat4x3;
pub use quat::{Quat, SLERP_PHI_EPSILON};
pub use trig::{SinCos, FSCA_DEG_FACTOR, FSCA_ERROR_MAX, FSCA_RAD_FACTOR, PI};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use xmtrx::{Xf, Xmtrx};

// Each of these is viewed as raw f32s or 8-byte register pairs somewhere.
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ty),* $(,)?) => {
            $(
                // SAFETY: All fields are f32 or f32 aggregates, #[repr(C)], no padding
                unsafe impl bytemuck::Zeroable for $t {}
                unsafe impl bytemuck::Pod for $t {}
            )*
        };
    }

    impl_pod!(Vec2, Vec3, Vec4, Quat, SinCos, Mat2x2, Mat3x3, Mat4x3, Mat3x4, Mat4x4);
}

const _: () = {
    assert!(core::mem::size_of::<Mat4x4>() == 64);
    assert!(core::mem::align_of::<Mat4x4>() == 8);
    assert!(core::mem::size_of::<Mat2x2>() == 16);
    assert!(core::mem::size_of::<Mat4x3>() == 48);
    assert!(core::mem::size_of::<Mat3x4>() == 48);
    assert!(core::mem::size_of::<Quat>() == 16);
};
