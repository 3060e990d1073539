use crate::scalar;
use crate::trig::{self, SinCos};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self { Self { x, y } }

    #[inline]
    pub fn zero() -> Self { Self::new(0.0, 0.0) }

    #[inline]
    pub fn splat(v: f32) -> Self { Self::new(v, v) }

    #[inline]
    pub fn x() -> Self { Self::new(1.0, 0.0) }

    #[inline]
    pub fn y() -> Self { Self::new(0.0, 1.0) }

    /// Unit vector `(cos, sin)`.
    #[inline]
    pub fn from_sincos(sc: SinCos) -> Self { Self::new(sc.cos, sc.sin) }

    #[inline]
    pub fn from_angle(radians: f32) -> Self { Self::from_sincos(trig::sincos(radians)) }

    #[inline]
    pub fn from_angle_deg(degrees: f32) -> Self { Self::from_sincos(trig::sincos_deg(degrees)) }

    /// Builds a vector from components picked by index. Every index must be
    /// below 2.
    #[inline]
    pub fn swizzle(self, x: usize, y: usize) -> Self {
        debug_assert!(x < 2 && y < 2, "swizzle index out of range: ({}, {})", x, y);
        let a = self.as_array();
        Self::new(a[x], a[y])
    }

    #[inline]
    pub fn extend(self, z: f32) -> crate::Vec3 {
        crate::Vec3::new(self.x, self.y, z)
    }

    #[inline]
    pub fn extend4(self, z: f32, w: f32) -> crate::Vec4 {
        crate::Vec4::new(self.x, self.y, z, w)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// z component of the 3D cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn magnitude_sqr(self) -> f32 { self.dot(self) }

    #[inline]
    pub fn magnitude(self) -> f32 { scalar::sqrt(self.magnitude_sqr()) }

    /// `1 / magnitude`. Garbage for the zero vector.
    #[inline]
    pub fn magnitude_inv(self) -> f32 { scalar::inv_sqrt(self.magnitude_sqr()) }

    /// `1 / magnitude`, or 0 for the zero vector.
    #[inline]
    pub fn magnitude_inv_safe(self) -> f32 {
        let m = self.magnitude_sqr();
        if m > 0.0 { scalar::inv_sqrt(m) } else { 0.0 }
    }

    /// Assumes a nonzero magnitude.
    #[inline]
    pub fn normalize(self) -> Self { self * self.magnitude_inv() }

    /// The zero vector normalizes to itself.
    #[inline]
    pub fn normalize_safe(self) -> Self { self * self.magnitude_inv_safe() }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let m = self.magnitude_sqr();
        if m > 0.0 { Some(self * scalar::inv_sqrt(m)) } else { None }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 { (self - other).magnitude() }

    #[inline]
    pub fn distance_sqr(self, other: Self) -> f32 { (self - other).magnitude_sqr() }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(scalar::lerp(self.x, other.x, t), scalar::lerp(self.y, other.y, t))
    }

    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Componentwise approximate division.
    #[inline]
    pub fn hadamard_div(self, other: Self) -> Self {
        Self::new(scalar::div(self.x, other.x), scalar::div(self.y, other.y))
    }

    #[inline]
    pub fn abs(self) -> Self { Self::new(scalar::abs(self.x), scalar::abs(self.y)) }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(scalar::min(self.x, other.x), scalar::min(self.y, other.y))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(scalar::max(self.x, other.x), scalar::max(self.y, other.y))
    }

    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        Self::new(scalar::clamp(self.x, min, max), scalar::clamp(self.y, min, max))
    }

    #[inline]
    pub fn min_element(self) -> f32 { scalar::min(self.x, self.y) }

    #[inline]
    pub fn max_element(self) -> f32 { scalar::max(self.x, self.y) }

    /// `incidence - 2 (normal · incidence) normal`. `normal` must be unit
    /// length.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self + normal * normal.dot(self * -2.0)
    }

    /// Refraction through a surface with unit `normal` and index ratio
    /// `eta`. Total internal reflection gives the zero vector.
    #[inline]
    pub fn refract(self, normal: Self, eta: f32) -> Self {
        let d = self.dot(normal);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            return Self::zero();
        }
        self * eta - normal * (eta * d + scalar::sqrt(k))
    }

    /// Projection onto `onto`, which must be nonzero.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        onto * scalar::div_fsrra(self.dot(onto), onto.magnitude_sqr())
    }

    /// Projection onto `onto`, or zero when `onto` is zero.
    #[inline]
    pub fn project_safe(self, onto: Self) -> Self {
        let m = onto.magnitude_sqr();
        if m > 0.0 { onto * scalar::div_fsrra(self.dot(onto), m) } else { Self::zero() }
    }

    /// Signed angle from `self` to `other`, counter-clockwise positive.
    #[inline]
    pub fn angle_between(self, other: Self) -> f32 {
        trig::atan2(self.cross(other), self.dot(other))
    }

    /// Angle from the +x axis.
    #[inline]
    pub fn angle(self) -> f32 { trig::atan2(self.y, self.x) }

    /// Construct from a slice (panics if len < 2)
    #[inline]
    pub fn from_slice(s: &[f32]) -> Self { Self::new(s[0], s[1]) }

    #[inline]
    pub fn as_array(&self) -> [f32; 2] { [self.x, self.y] }

    #[inline]
    pub fn as_slice(&self) -> &[f32] { bytemuck::cast_slice(core::slice::from_ref(self)) }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(core::slice::from_mut(self))
    }

    /// Borrows the first two floats of `s` as a `Vec2` (panics if len < 2).
    #[inline]
    pub fn view(s: &[f32]) -> &Self { bytemuck::from_bytes(bytemuck::cast_slice(&s[..2])) }

    #[inline]
    pub fn view_mut(s: &mut [f32]) -> &mut Self {
        bytemuck::from_bytes_mut(bytemuck::cast_slice_mut(&mut s[..2]))
    }
}

impl Default for Vec2 {
    fn default() -> Self { Self::zero() }
}

impl From<[f32; 2]> for Vec2 {
    fn from(a: [f32; 2]) -> Self { Self::new(a[0], a[1]) }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self { [v.x, v.y] }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { self * scalar::inv(rhs) }
}

impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { self.x += rhs.x; self.y += rhs.y; }
}

impl SubAssign for Vec2 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { self.x -= rhs.x; self.y -= rhs.y; }
}

impl MulAssign<f32> for Vec2 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { self.x *= rhs; self.y *= rhs; }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Vec2) -> Vec2 { rhs * self }
}

impl core::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn cross_is_signed_area() {
        assert_eq!(Vec2::x().cross(Vec2::y()), 1.0);
        assert_eq!(Vec2::y().cross(Vec2::x()), -1.0);
    }

    #[test]
    fn normalize_and_safe_zero() {
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!((n.magnitude() - 1.0).abs() < 1e-3);
        assert_eq!(Vec2::zero().normalize_safe(), Vec2::zero());
        assert_eq!(Vec2::zero().try_normalize(), None);
    }

    #[test]
    fn angles() {
        assert!((Vec2::y().angle() - FRAC_PI_2).abs() < 6e-3);
        assert!((Vec2::x().angle_between(Vec2::y()) - FRAC_PI_2).abs() < 6e-3);
        assert!((Vec2::y().angle_between(Vec2::x()) + FRAC_PI_2).abs() < 6e-3);
        let v = Vec2::from_angle(FRAC_PI_2);
        assert!(v.x.abs() < 1e-3 && (v.y - 1.0).abs() < 1e-3);
        let v = Vec2::from_angle_deg(180.0);
        assert!((v.x + 1.0).abs() < 1e-3 && v.y.abs() < 1e-3);
    }

    #[test]
    fn reflect_and_refract() {
        let r = Vec2::new(1.0, -1.0).reflect(Vec2::y());
        assert_eq!(r, Vec2::new(1.0, 1.0));
        let i = Vec2::new(0.0, -1.0);
        let t = i.refract(Vec2::y(), 1.0);
        assert!((t.x - i.x).abs() < 1e-3 && (t.y - i.y).abs() < 1e-3);
        let grazing = Vec2::new(1.0, -0.1).normalize();
        assert_eq!(grazing.refract(Vec2::y(), 1.5), Vec2::zero());
    }

    #[test]
    fn projection() {
        let p = Vec2::new(2.0, 3.0).project(Vec2::new(4.0, 0.0));
        assert!((p.x - 2.0).abs() < 1e-3 && p.y.abs() < 1e-6);
        assert_eq!(Vec2::new(2.0, 3.0).project_safe(Vec2::zero()), Vec2::zero());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "swizzle index out of range")]
    fn swizzle_rejects_index_past_y() {
        let _ = Vec2::new(1.0, 2.0).swizzle(2, 0);
    }

    #[test]
    fn swizzle_and_views() {
        assert_eq!(Vec2::new(1.0, 2.0).swizzle(1, 1), Vec2::new(2.0, 2.0));
        let mut buf = [5.0_f32, 6.0, 7.0];
        assert_eq!(*Vec2::view(&buf[1..]), Vec2::new(6.0, 7.0));
        Vec2::view_mut(&mut buf).x = 9.0;
        assert_eq!(buf[0], 9.0);
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = Vec2::new(0.3, -7.1);
        let b = Vec2::new(11.0, 2.5);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v * 2.0, 2.0 * v);
    }
}
