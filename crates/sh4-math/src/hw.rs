//! Software forms of the SH4 FPU instructions every approximation in this
//! crate is built on.
//!
//! On the real part each of these is a single instruction. Here they are
//! plain functions with the same inputs, outputs and error envelope, so the
//! layers above behave the same on any target.

use crate::float_ops;

/// One full turn in FSCA angle units.
pub const FSCA_TURN: u32 = 0x1_0000;

/// `FSRRA`: approximate `1 / sqrt(x)`.
///
/// Undefined for `x <= 0`; the result is finite garbage rather than a
/// trap.
#[inline]
pub fn fsrra(x: f32) -> f32 {
    let half = 0.5 * x;
    let mut y = f32::from_bits(0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

/// `FSCA`: sine and cosine of a binary angle where `0x10000` is one turn.
///
/// Returns `(sin, cos)`. Both are within [`FSCA_ERROR_MAX`](crate::FSCA_ERROR_MAX)
/// of the exact values.
#[inline]
pub fn fsca(angle: u16) -> (f32, f32) {
    let radians = angle as f64 * (core::f64::consts::TAU / FSCA_TURN as f64);
    let (s, c) = float_ops::sin_cos_f64(radians);
    (s as f32, c as f32)
}

/// `FTRC` followed by a read of FPUL's low half: truncates toward zero
/// and keeps the low 16 bits, the form FSCA consumes.
#[inline]
pub fn ftrc_u16(x: f32) -> u16 {
    (x as i32) as u16
}

/// `FIPR`: 4-wide inner product.
#[inline]
pub fn fipr(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// `FTRV`: column-major 4x4 matrix times a 4-vector.
#[inline]
pub fn ftrv(m: &[f32; 16], v: [f32; 4]) -> [f32; 4] {
    [
        m[0] * v[0] + m[4] * v[1] + m[8] * v[2] + m[12] * v[3],
        m[1] * v[0] + m[5] * v[1] + m[9] * v[2] + m[13] * v[3],
        m[2] * v[0] + m[6] * v[1] + m[10] * v[2] + m[14] * v[3],
        m[3] * v[0] + m[7] * v[1] + m[11] * v[2] + m[15] * v[3],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fsrra_relative_error() {
        for &x in &[1e-6_f32, 0.01, 0.5, 1.0, 2.0, 3.0, 10.0, 1234.5, 1e12] {
            let exact = 1.0 / float_ops::sqrt_f32(x);
            let approx = fsrra(x);
            assert!(((approx - exact) / exact).abs() < 1e-5, "fsrra({}) = {} vs {}", x, approx, exact);
        }
    }

    #[test]
    fn fsca_quadrants() {
        assert_eq!(fsca(0), (0.0, 1.0));
        let (s, c) = fsca(0x4000);
        assert!((s - 1.0).abs() < 1e-7 && c.abs() < 1e-7);
        let (s, c) = fsca(0x8000);
        assert!(s.abs() < 1e-7 && (c + 1.0).abs() < 1e-7);
        let (s, c) = fsca(0xc000);
        assert!((s + 1.0).abs() < 1e-7 && c.abs() < 1e-7);
    }

    #[test]
    fn ftrc_wraps_to_low_half() {
        assert_eq!(ftrc_u16(16384.9), 16384);
        assert_eq!(ftrc_u16(65536.0), 0);
        assert_eq!(ftrc_u16(-16384.0), 0xc000);
    }

    #[test]
    fn ftrv_identity_and_translation() {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        m[12] = 5.0;
        assert_eq!(ftrv(&m, [1.0, 2.0, 3.0, 1.0]), [6.0, 2.0, 3.0, 1.0]);
        assert_eq!(ftrv(&m, [1.0, 2.0, 3.0, 0.0]), [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn fipr_dot() {
        assert_eq!(fipr([1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]), 70.0);
    }
}
