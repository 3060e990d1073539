use crate::scalar;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self { Self { x, y, z, w } }

    #[inline]
    pub fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }

    #[inline]
    pub fn splat(v: f32) -> Self { Self::new(v, v, v, v) }

    #[inline]
    pub fn x() -> Self { Self::new(1.0, 0.0, 0.0, 0.0) }

    #[inline]
    pub fn y() -> Self { Self::new(0.0, 1.0, 0.0, 0.0) }

    #[inline]
    pub fn z() -> Self { Self::new(0.0, 0.0, 1.0, 0.0) }

    #[inline]
    pub fn w() -> Self { Self::new(0.0, 0.0, 0.0, 1.0) }

    #[inline]
    pub fn from_vec3(v: Vec3, w: f32) -> Self { Self::new(v.x, v.y, v.z, w) }

    #[inline]
    pub fn from_vec2s(xy: Vec2, zw: Vec2) -> Self { Self::new(xy.x, xy.y, zw.x, zw.y) }

    /// Drops w.
    #[inline]
    pub fn xyz(self) -> Vec3 { Vec3::new(self.x, self.y, self.z) }

    #[inline]
    pub fn xy(self) -> Vec2 { Vec2::new(self.x, self.y) }

    #[inline]
    pub fn zw(self) -> Vec2 { Vec2::new(self.z, self.w) }

    #[inline]
    pub fn xyz_mut(&mut self) -> &mut Vec3 { Vec3::view_mut(self.as_mut_slice()) }

    #[inline]
    pub fn xy_mut(&mut self) -> &mut Vec2 { Vec2::view_mut(self.as_mut_slice()) }

    #[inline]
    pub fn zw_mut(&mut self) -> &mut Vec2 { Vec2::view_mut(&mut self.as_mut_slice()[2..]) }

    /// Builds a vector from components picked by index. Every index must be
    /// below 4.
    #[inline]
    pub fn swizzle(self, x: usize, y: usize, z: usize, w: usize) -> Self {
        debug_assert!(x < 4 && y < 4 && z < 4 && w < 4, "swizzle index out of range: ({}, {}, {}, {})", x, y, z, w);
        let a = self.as_array();
        Self::new(a[x], a[y], a[z], a[w])
    }

    /// One FIPR.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        scalar::dot8(self.x, self.y, self.z, self.w, rhs.x, rhs.y, rhs.z, rhs.w)
    }

    #[inline]
    pub fn magnitude_sqr(self) -> f32 { scalar::mag_sqr4(self.x, self.y, self.z, self.w) }

    #[inline]
    pub fn magnitude(self) -> f32 { scalar::sqrt(self.magnitude_sqr()) }

    #[inline]
    pub fn magnitude_inv(self) -> f32 { scalar::inv_sqrt(self.magnitude_sqr()) }

    #[inline]
    pub fn magnitude_inv_safe(self) -> f32 {
        let m = self.magnitude_sqr();
        if m > 0.0 { scalar::inv_sqrt(m) } else { 0.0 }
    }

    #[inline]
    pub fn normalize(self) -> Self { self * self.magnitude_inv() }

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
            scalar::lerp(self.w, other.w, t),
        )
    }

    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z, self.w * other.w)
    }

    #[inline]
    pub fn hadamard_div(self, other: Self) -> Self {
        Self::new(
            scalar::div(self.x, other.x),
            scalar::div(self.y, other.y),
            scalar::div(self.z, other.z),
            scalar::div(self.w, other.w),
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(scalar::abs(self.x), scalar::abs(self.y), scalar::abs(self.z), scalar::abs(self.w))
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(
            scalar::min(self.x, other.x),
            scalar::min(self.y, other.y),
            scalar::min(self.z, other.z),
            scalar::min(self.w, other.w),
        )
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            scalar::max(self.x, other.x),
            scalar::max(self.y, other.y),
            scalar::max(self.z, other.z),
            scalar::max(self.w, other.w),
        )
    }

    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        Self::new(
            scalar::clamp(self.x, min, max),
            scalar::clamp(self.y, min, max),
            scalar::clamp(self.z, min, max),
            scalar::clamp(self.w, min, max),
        )
    }

    #[inline]
    pub fn min_element(self) -> f32 {
        scalar::min(scalar::min(self.x, self.y), scalar::min(self.z, self.w))
    }

    #[inline]
    pub fn max_element(self) -> f32 {
        scalar::max(scalar::max(self.x, self.y), scalar::max(self.z, self.w))
    }

    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self + normal * normal.dot(self * -2.0)
    }

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

    /// Construct from a slice (panics if len < 4)
    #[inline]
    pub fn from_slice(s: &[f32]) -> Self { Self::new(s[0], s[1], s[2], s[3]) }

    #[inline]
    pub fn as_array(&self) -> [f32; 4] { [self.x, self.y, self.z, self.w] }

    #[inline]
    pub fn as_slice(&self) -> &[f32] { bytemuck::cast_slice(core::slice::from_ref(self)) }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(core::slice::from_mut(self))
    }

    #[inline]
    pub fn view(s: &[f32]) -> &Self { bytemuck::from_bytes(bytemuck::cast_slice(&s[..4])) }

    #[inline]
    pub fn view_mut(s: &mut [f32]) -> &mut Self {
        bytemuck::from_bytes_mut(bytemuck::cast_slice_mut(&mut s[..4]))
    }
}

impl Default for Vec4 {
    fn default() -> Self { Self::zero() }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self { [v.x, v.y, v.z, v.w] }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { self * scalar::inv(rhs) }
}

impl AddAssign for Vec4 {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z; self.w += rhs.w;
    }
}

impl SubAssign for Vec4 {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z; self.w -= rhs.w;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline] fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs; self.w *= rhs;
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline] fn mul(self, rhs: Vec4) -> Vec4 { rhs * self }
}

impl core::fmt::Display for Vec4 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
