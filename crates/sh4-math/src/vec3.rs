use crate::scalar;
use crate::trig::{self, SinCos};
use crate::vec2::Vec2;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self { Self { x, y, z } }

    #[inline]
    pub fn zero() -> Self { Self::new(0.0, 0.0, 0.0) }

    #[inline]
    pub fn splat(v: f32) -> Self { Self::new(v, v, v) }

    #[inline]
    pub fn x() -> Self { Self::new(1.0, 0.0, 0.0) }

    #[inline]
    pub fn y() -> Self { Self::new(0.0, 1.0, 0.0) }

    #[inline]
    pub fn z() -> Self { Self::new(0.0, 0.0, 1.0) }

    #[inline]
    pub fn from_vec2(v: Vec2, z: f32) -> Self { Self::new(v.x, v.y, z) }

    /// Direction from azimuth (around +z, from +x) and elevation (towards +z).
    #[inline]
    pub fn from_sincos(azimuth: SinCos, elevation: SinCos) -> Self {
        Self::new(azimuth.cos * elevation.cos, azimuth.sin * elevation.cos, elevation.sin)
    }

    #[inline]
    pub fn from_angles(azimuth: f32, elevation: f32) -> Self {
        Self::from_sincos(trig::sincos(azimuth), trig::sincos(elevation))
    }

    #[inline]
    pub fn from_angles_deg(azimuth: f32, elevation: f32) -> Self {
        Self::from_sincos(trig::sincos_deg(azimuth), trig::sincos_deg(elevation))
    }

    #[inline]
    pub fn xy(self) -> Vec2 { Vec2::new(self.x, self.y) }

    #[inline]
    pub fn xy_mut(&mut self) -> &mut Vec2 { Vec2::view_mut(self.as_mut_slice()) }

    /// Builds a vector from components picked by index. Every index must be
    /// below 3.
    #[inline]
    pub fn swizzle(self, x: usize, y: usize, z: usize) -> Self {
        debug_assert!(x < 3 && y < 3 && z < 3, "swizzle index out of range: ({}, {}, {})", x, y, z);
        let a = self.as_array();
        Self::new(a[x], a[y], a[z])
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: f32) -> crate::Vec4 {
        crate::Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        scalar::dot8(self.x, self.y, self.z, 0.0, rhs.x, rhs.y, rhs.z, 0.0)
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn magnitude_sqr(self) -> f32 { scalar::mag_sqr4(self.x, self.y, self.z, 0.0) }

    #[inline]
    pub fn magnitude(self) -> f32 { scalar::sqrt(self.magnitude_sqr()) }

    #[inline]
    pub fn magnitude_inv(self) -> f32 { scalar::inv_sqrt(self.magnitude_sqr()) }

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
        Self::new(
            scalar::lerp(self.x, other.x, t),
            scalar::lerp(self.y, other.y, t),
            scalar::lerp(self.z, other.z, t),
        )
    }

    /// Returns the element-wise product (Hadamard product)
    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Componentwise `div(self, inv(other))`.
    ///
    /// The denominator is inverted twice, so for nonzero `other` this
    /// evaluates to roughly `self * other`, unlike [`Vec2::hadamard_div`]
    /// and [`Vec4::hadamard_div`](crate::Vec4::hadamard_div).
    #[inline]
    pub fn hadamard_div(self, other: Self) -> Self {
        Self::new(
            scalar::div(self.x, scalar::inv(other.x)),
            scalar::div(self.y, scalar::inv(other.y)),
            scalar::div(self.z, scalar::inv(other.z)),
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(scalar::abs(self.x), scalar::abs(self.y), scalar::abs(self.z))
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(scalar::min(self.x, other.x), scalar::min(self.y, other.y), scalar::min(self.z, other.z))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(scalar::max(self.x, other.x), scalar::max(self.y, other.y), scalar::max(self.z, other.z))
    }

    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        Self::new(
            scalar::clamp(self.x, min, max),
            scalar::clamp(self.y, min, max),
            scalar::clamp(self.z, min, max),
        )
    }

    #[inline]
    pub fn min_element(self) -> f32 { scalar::min(self.x, scalar::min(self.y, self.z)) }

    #[inline]
    pub fn max_element(self) -> f32 { scalar::max(self.x, scalar::max(self.y, self.z)) }

    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self + normal * normal.dot(self * -2.0)
    }

    /// Total internal reflection gives the zero vector.
    #[inline]
    pub fn refract(self, normal: Self, eta: f32) -> Self {
        let d = self.dot(normal);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            return Self::zero();
        }
        self * eta - normal * (eta * d + scalar::sqrt(k))
    }

    #[inline]
    pub fn project(self, onto: Self) -> Self {
        onto * scalar::div_fsrra(self.dot(onto), onto.magnitude_sqr())
    }

    #[inline]
    pub fn project_safe(self, onto: Self) -> Self {
        let m = onto.magnitude_sqr();
        if m > 0.0 { onto * scalar::div_fsrra(self.dot(onto), m) } else { Self::zero() }
    }

    /// Unsigned angle in `[0, π]`.
    #[inline]
    pub fn angle_between(self, other: Self) -> f32 {
        trig::atan2(self.cross(other).magnitude(), self.dot(other))
    }

    /// Angles between the vector and each of the +x, +y and +z axes.
    #[inline]
    pub fn angles(self) -> Self {
        Self::new(
            trig::atan2(Vec2::new(self.y, self.z).magnitude(), self.x),
            trig::atan2(Vec2::new(self.z, self.x).magnitude(), self.y),
            trig::atan2(Vec2::new(self.x, self.y).magnitude(), self.z),
        )
    }

    /// Construct from a slice (panics if len < 3)
    #[inline]
    pub fn from_slice(s: &[f32]) -> Self { Self::new(s[0], s[1], s[2]) }

    #[inline]
    pub fn as_array(&self) -> [f32; 3] { [self.x, self.y, self.z] }

    #[inline]
    pub fn as_slice(&self) -> &[f32] { bytemuck::cast_slice(core::slice::from_ref(self)) }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(core::slice::from_mut(self))
    }

    #[inline]
    pub fn view(s: &[f32]) -> &Self { bytemuck::from_bytes(bytemuck::cast_slice(&s[..3])) }

    #[inline]
    pub fn view_mut(s: &mut [f32]) -> &mut Self {
        bytemuck::from_bytes_mut(bytemuck::cast_slice_mut(&mut s[..3]))
    }
}

impl Default for Vec3 {
    fn default() -> Self { Self::zero() }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self { [v.x, v.y, v.z] }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { self * scalar::inv(rhs) }
}

impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs;
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { rhs * self }
}

impl core::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn cross_product() {
        let z = Vec3::x().cross(Vec3::y());
        assert_eq!(z, Vec3::z());
        // Anti-commutative
        assert_eq!(Vec3::y().cross(Vec3::x()), -z);
    }

    #[test]
    fn normalize() {
        let n = Vec3::new(1.0, 2.0, 2.0).normalize();
        assert!((n.magnitude() - 1.0).abs() < 1e-3);
        assert_eq!(Vec3::zero().normalize_safe(), Vec3::zero());
    }

    #[test]
    fn hadamard_div_double_inverts() {
        let q = Vec3::new(2.0, 3.0, 4.0).hadamard_div(Vec3::new(2.0, 2.0, 0.5));
        assert!((q.x - 4.0).abs() < 1e-3);
        assert!((q.y - 6.0).abs() < 1e-3);
        assert!((q.z - 2.0).abs() < 1e-3);
    }

    #[test]
    fn angle_between_is_well_conditioned() {
        assert!((Vec3::x().angle_between(Vec3::y()) - FRAC_PI_2).abs() < 6e-3);
        assert!(Vec3::x().angle_between(Vec3::x() * 3.0).abs() < 1e-6);
        assert!((Vec3::x().angle_between(-Vec3::x()) - PI).abs() < 1e-6);
    }

    #[test]
    fn direction_angles() {
        let a = Vec3::z().angles();
        assert!((a.x - FRAC_PI_2).abs() < 6e-3);
        assert!((a.y - FRAC_PI_2).abs() < 6e-3);
        assert!(a.z.abs() < 1e-6);
    }

    #[test]
    fn from_angles_points_up() {
        let v = Vec3::from_angles_deg(0.0, 90.0);
        assert!(v.x.abs() < 1e-3 && v.y.abs() < 1e-3 && (v.z - 1.0).abs() < 1e-3);
        let v = Vec3::from_angles(FRAC_PI_2, 0.0);
        assert!(v.x.abs() < 1e-3 && (v.y - 1.0).abs() < 1e-3 && v.z.abs() < 1e-6);
    }

    #[test]
    fn embedded_xy() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        v.xy_mut().y = 7.0;
        assert_eq!(v, Vec3::new(1.0, 7.0, 3.0));
        assert_eq!(Vec3::from_vec2(Vec2::new(4.0, 5.0), 6.0), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn swizzle_reorders() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).swizzle(2, 0, 1), Vec3::new(3.0, 1.0, 2.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "swizzle index out of range")]
    fn swizzle_rejects_index_past_z() {
        let _ = Vec3::new(1.0, 2.0, 3.0).swizzle(0, 3, 1);
    }

    #[test]
    fn refract_bends_toward_normal() {
        // 45 degrees from air into glass: sin(t) = sin(45) / 1.5
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = i.refract(Vec3::y(), 1.0 / 1.5);
        let want = Vec3::new(0.471_404_5, -0.881_917_1, 0.0);
        assert!((t - want).magnitude() < 5e-3, "{} vs {}", t, want);
        assert!((t.magnitude() - 1.0).abs() < 5e-3, "{}", t);
    }

    #[test]
    fn refract_total_internal_reflection_is_zero() {
        let grazing = Vec3::new(1.0, -0.1, 0.0).normalize();
        assert_eq!(grazing.refract(Vec3::y(), 1.5), Vec3::zero());
        let steep = Vec3::new(0.0, -0.6, 0.8);
        assert_eq!(steep.refract(Vec3::y(), 2.0), Vec3::zero());
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, 2.0 * v);
    }
}
