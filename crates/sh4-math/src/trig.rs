//! Trigonometry on top of the FSCA sine/cosine primitive.
//!
//! Forward functions cost one FSCA plus at most one reciprocal. Inverse
//! functions use a two-term rational fit of `atan` on `[-1, 1]`, reflected
//! outside it, with a worst-case error of about `5e-3` radians.

use crate::float_ops;
use crate::hw;
use crate::scalar;

pub const PI: f32 = core::f32::consts::PI;
pub const FRAC_PI_2: f32 = core::f32::consts::FRAC_PI_2;

/// Radians to FSCA binary angle units.
pub const FSCA_RAD_FACTOR: f32 = 10430.378_35;
/// Degrees to FSCA binary angle units.
pub const FSCA_DEG_FACTOR: f32 = 182.044_444_43;
/// Largest absolute error of an FSCA sine or cosine.
pub const FSCA_ERROR_MAX: f32 = 4.768_371_58e-7;

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * (180.0 / PI)
}

/// Sine and cosine of one angle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinCos {
    pub sin: f32,
    pub cos: f32,
}

impl SinCos {
    #[inline]
    pub fn new(sin: f32, cos: f32) -> Self { Self { sin, cos } }

    #[inline]
    pub fn tan(self) -> f32 { scalar::div(self.sin, self.cos) }

    #[inline]
    pub fn sec(self) -> f32 { scalar::inv(self.cos) }

    #[inline]
    pub fn csc(self) -> f32 { scalar::inv(self.sin) }

    #[inline]
    pub fn cot(self) -> f32 { scalar::div(self.cos, self.sin) }
}

impl From<(f32, f32)> for SinCos {
    fn from((sin, cos): (f32, f32)) -> Self { Self::new(sin, cos) }
}

/// Sine and cosine of a binary angle (`0x10000` per turn).
#[inline]
pub fn sincos_u16(angle: u16) -> SinCos {
    hw::fsca(angle).into()
}

/// Sine and cosine of an angle in radians.
///
/// The angle is truncated to a binary angle first, so inputs beyond about
/// `±2^31 / FSCA_RAD_FACTOR` saturate.
#[inline]
pub fn sincos(radians: f32) -> SinCos {
    sincos_u16(hw::ftrc_u16(radians * FSCA_RAD_FACTOR))
}

#[inline]
pub fn sincos_deg(degrees: f32) -> SinCos {
    sincos_u16(hw::ftrc_u16(degrees * FSCA_DEG_FACTOR))
}

macro_rules! forward_trig {
    ($($name:ident => $sc:expr;)*) => {
        ::paste::paste! {
            $(
                #[inline]
                pub fn $name(radians: f32) -> f32 {
                    let f: fn(SinCos) -> f32 = $sc;
                    f(sincos(radians))
                }

                #[inline]
                pub fn [<$name _deg>](degrees: f32) -> f32 {
                    let f: fn(SinCos) -> f32 = $sc;
                    f(sincos_deg(degrees))
                }
            )*
        }
    };
}

forward_trig! {
    sin => |sc| sc.sin;
    cos => |sc| sc.cos;
    tan => SinCos::tan;
    sec => SinCos::sec;
    csc => SinCos::csc;
    cot => SinCos::cot;
}

/// `atan` on `[-1, 1]`.
#[inline]
pub fn atan_unit(x: f32) -> f32 {
    scalar::fma(-0.191_947_95, x * x, 0.972_394_11) * x
}

/// `atan` for `x > 1`, by reflection through `atan(1/x)`.
#[inline]
fn atan_q1(x: f32) -> f32 {
    FRAC_PI_2 - atan_unit(scalar::inv_fsrra(x))
}

#[inline]
pub fn atan(x: f32) -> f32 {
    if x > 1.0 {
        atan_q1(x)
    } else if x < -1.0 {
        -atan_q1(x)
    } else {
        atan_unit(x)
    }
}

/// Four-quadrant arctangent of `y / x`.
pub fn atan2(y: f32, x: f32) -> f32 {
    if x == 0.0 {
        return if y > 0.0 {
            FRAC_PI_2
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        };
    }
    let a = atan(scalar::div(y, x));
    if x > 0.0 {
        a
    } else if y < 0.0 {
        a - PI
    } else {
        a + PI
    }
}

/// `atan(x / sqrt(1 - x²))`. Saturates to `±π/2` at and beyond `|x| = 1`.
#[inline]
pub fn asin(x: f32) -> f32 {
    let d = 1.0 - x * x;
    if d <= 0.0 {
        return scalar::copysign(FRAC_PI_2, x);
    }
    atan(x * scalar::inv_sqrt(d))
}

#[inline]
pub fn acos(x: f32) -> f32 {
    FRAC_PI_2 - asin(x)
}

#[inline]
pub fn asec(x: f32) -> f32 {
    acos(scalar::inv(x))
}

#[inline]
pub fn acsc(x: f32) -> f32 {
    asin(scalar::inv(x))
}

#[inline]
pub fn acot(x: f32) -> f32 {
    atan(scalar::inv(x))
}

macro_rules! exact_trig {
    ($($name:ident => $op:ident($($arg:ident),+);)*) => {
        ::paste::paste! {
            $(
                #[doc = concat!("Exact `", stringify!($name), "`.")]
                #[inline]
                pub fn [<$name _exact>]($($arg: f32),+) -> f32 {
                    float_ops::$op($($arg),+)
                }
            )*
        }
    };
}

exact_trig! {
    sin => sin_f32(x);
    cos => cos_f32(x);
    tan => tan_f32(x);
    asin => asin_f32(x);
    acos => acos_f32(x);
    atan => atan_f32(x);
    atan2 => atan2_f32(y, x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATAN_TOL: f32 = 6e-3;

    #[test]
    fn sincos_zero_and_quarter_turn() {
        assert_eq!(sincos(0.0), SinCos::new(0.0, 1.0));
        let sc = sincos(FRAC_PI_2);
        assert!((sc.sin - 1.0).abs() <= FSCA_ERROR_MAX);
        assert!(sc.cos.abs() <= FSCA_ERROR_MAX);
    }

    #[test]
    fn degrees_and_radians_agree() {
        for &d in &[0.0_f32, 30.0, 45.0, 90.0, 135.0, 270.0] {
            let a = sincos_deg(d);
            let b = sincos(deg_to_rad(d));
            assert!((a.sin - b.sin).abs() < 1e-3, "sin at {} deg", d);
            assert!((a.cos - b.cos).abs() < 1e-3, "cos at {} deg", d);
        }
        assert!((rad_to_deg(PI) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn forward_functions_track_exact() {
        for i in -20..20 {
            let x = i as f32 * 0.15;
            assert!((sin(x) - sin_exact(x)).abs() < 2e-4, "sin({})", x);
            assert!((cos(x) - cos_exact(x)).abs() < 2e-4, "cos({})", x);
        }
        assert!((tan(0.5) - tan_exact(0.5)).abs() < 1e-3);
        assert!((sec(0.5) - 1.0 / cos_exact(0.5)).abs() < 1e-3);
        assert!((csc(0.5) - 1.0 / sin_exact(0.5)).abs() < 1e-3);
        assert!((cot(0.5) - 1.0 / tan_exact(0.5)).abs() < 1e-3);
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-3);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn negative_angles_wrap() {
        let sc = sincos(-FRAC_PI_2);
        assert!((sc.sin + 1.0).abs() < 1e-3);
        assert!(sc.cos.abs() < 1e-3);
    }

    #[test]
    fn inverse_functions_track_exact() {
        for i in -40..=40 {
            let x = i as f32 * 0.1;
            assert!((atan(x) - atan_exact(x)).abs() < ATAN_TOL, "atan({})", x);
        }
        for i in -9..=9 {
            let x = i as f32 * 0.1;
            assert!((asin(x) - asin_exact(x)).abs() < ATAN_TOL, "asin({})", x);
            assert!((acos(x) - acos_exact(x)).abs() < ATAN_TOL, "acos({})", x);
        }
        assert!((acot(2.0) - atan_exact(0.5)).abs() < ATAN_TOL);
        assert!((asec(2.0) - acos_exact(0.5)).abs() < ATAN_TOL);
        assert!((acsc(2.0) - asin_exact(0.5)).abs() < ATAN_TOL);
    }

    #[test]
    fn asin_saturates_at_the_boundary() {
        assert_eq!(asin(1.0), FRAC_PI_2);
        assert_eq!(asin(-1.0), -FRAC_PI_2);
        assert_eq!(acos(1.0), 0.0);
    }

    #[test]
    fn atan2_quadrants() {
        let cases = [(1.0_f32, 1.0_f32), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0), (2.0, 0.5), (0.0, -3.0)];
        for &(y, x) in &cases {
            assert!((atan2(y, x) - atan2_exact(y, x)).abs() < ATAN_TOL, "atan2({}, {})", y, x);
        }
        assert_eq!(atan2(1.0, 0.0), FRAC_PI_2);
        assert_eq!(atan2(-1.0, 0.0), -FRAC_PI_2);
        assert_eq!(atan2(0.0, 0.0), 0.0);
    }
}
