use crate::mat3::Mat3x3;
use crate::mat4::Mat4x4;
use crate::scalar;
use crate::trig;
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use crate::xmtrx;
use core::ops::{Add, Mul, Neg, Sub};

/// Angles at or below this are treated as "no rotation" by [`Quat::slerp`].
pub const SLERP_PHI_EPSILON: f32 = 1e-5;

/// Below this angle [`Quat::slerp`] blends linearly without normalizing.
/// FSCA resolves angles to about 1e-4 radians, too coarse for the sine
/// weights over so short an arc.
const SLERP_LINEAR_PHI: f32 = 0.05;

/// Quaternion: w + xi + yj + zk
///
/// Scalar part first. Represents a rotation when unit length; nothing
/// enforces that, so normalize after accumulating products.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    #[inline]
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    #[inline]
    pub fn from_parts(w: f32, v: Vec3) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Quaternion from axis-angle representation. `axis` must be unit
    /// length.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let sc = trig::sincos(angle * 0.5);
        Self::from_parts(sc.cos, axis * sc.sin)
    }

    /// `qx · qy · qz`, the same rotation as `Rx · Ry · Rz`.
    pub fn from_angles_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::from_axis_angle(Vec3::x(), x) * Self::from_axis_angle(Vec3::y(), y) * Self::from_axis_angle(Vec3::z(), z)
    }

    /// `qz · qy · qx`.
    pub fn from_angles_zyx(z: f32, y: f32, x: f32) -> Self {
        Self::from_axis_angle(Vec3::z(), z) * Self::from_axis_angle(Vec3::y(), y) * Self::from_axis_angle(Vec3::x(), x)
    }

    /// `qy · qx · qz`.
    pub fn from_angles_yxz(y: f32, x: f32, z: f32) -> Self {
        Self::from_axis_angle(Vec3::y(), y) * Self::from_axis_angle(Vec3::x(), x) * Self::from_axis_angle(Vec3::z(), z)
    }

    /// Rotation taking the local `+z` axis to `forward`, with local `+y`
    /// as close to `up` as the two allow. `up` must not be parallel to
    /// `forward`.
    pub fn from_look_axis(forward: Vec3, up: Vec3) -> Self {
        let f = forward.normalize();
        let l = up.cross(f).normalize();
        let u = f.cross(l);
        Mat3x3::from_cols(l, u, f).to_quat()
    }

    /// Shortest-arc rotation taking the direction of `v1` to that of `v2`.
    ///
    /// Opposite vectors have no unique shortest arc; a half turn about an
    /// arbitrary axis perpendicular to `v1` is returned.
    pub fn from_rotated_axis(v1: Vec3, v2: Vec3) -> Self {
        let norms = scalar::sqrt(v1.magnitude_sqr() * v2.magnitude_sqr());
        let w = norms + v1.dot(v2);
        if w <= 1e-6 * norms {
            let helper = if scalar::abs(v1.x) < 0.9 { Vec3::x() } else { Vec3::y() };
            return Self::from_parts(0.0, v1.cross(helper).normalize());
        }
        Self::from_parts(w, v1.cross(v2)).normalize()
    }

    /// Rotation angle in radians, in `[0, 2π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        2.0 * trig::acos(scalar::clamp(self.w, -1.0, 1.0))
    }

    /// Unit rotation axis, or zero for the identity rotation.
    #[inline]
    pub fn axis(self) -> Vec3 {
        let s2 = 1.0 - self.w * self.w;
        if s2 <= 0.0 {
            return Vec3::zero();
        }
        self.xyz() * scalar::inv_sqrt(s2)
    }

    #[inline]
    pub fn axis_angle(self) -> (Vec3, f32) {
        (self.axis(), self.angle())
    }

    /// Vector part.
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xyz_mut(&mut self) -> &mut Vec3 {
        Vec3::view_mut(&mut self.as_mut_slice()[1..])
    }

    #[inline]
    pub fn as_array(&self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(core::slice::from_mut(self))
    }

    #[inline]
    pub fn magnitude_sqr(self) -> f32 {
        scalar::mag_sqr4(self.w, self.x, self.y, self.z)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        scalar::sqrt(self.magnitude_sqr())
    }

    #[inline]
    pub fn magnitude_inv(self) -> f32 {
        scalar::inv_sqrt(self.magnitude_sqr())
    }

    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(self.magnitude_inv())
    }

    /// Normalizes, or returns the identity for a zero quaternion.
    #[inline]
    pub fn normalize_safe(self) -> Self {
        let m = self.magnitude_sqr();
        if m == 0.0 {
            return Self::identity();
        }
        self.scale(scalar::inv_sqrt(m))
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate().scale(scalar::inv(self.magnitude_sqr()))
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.w + other.w, self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn scale(self, f: f32) -> Self {
        Self::new(self.w * f, self.x * f, self.y * f, self.z * f)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        scalar::dot8(self.w, self.x, self.y, self.z, other.w, other.x, other.y, other.z)
    }

    /// Hamilton product. Every component is one inner product against
    /// `other` as stored, with `self` permuted around it.
    pub fn mult(self, other: Self) -> Self {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let (ow, ox, oy, oz) = (other.w, other.x, other.y, other.z);
        Self::new(
            scalar::dot8(w, -x, -y, -z, ow, ox, oy, oz),
            scalar::dot8(x, w, -z, y, ow, ox, oy, oz),
            scalar::dot8(y, z, w, -x, ow, ox, oy, oz),
            scalar::dot8(z, -y, x, w, ow, ox, oy, oz),
        )
    }

    /// Rotates `v` with the double cross product
    /// `v + 2·(w·(a × v) + a × (a × v))`.
    #[inline]
    pub fn transform_vec3(self, v: Vec3) -> Vec3 {
        let a = self.xyz();
        let t = a.cross(v);
        v + (t * self.w + a.cross(t)) * 2.0
    }

    /// Componentwise blend, taking the short way round. The result is not
    /// normalized; see [`nlerp`](Self::nlerp).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let a = if self.dot(other) < 0.0 { -self } else { self };
        Self::new(
            scalar::lerp(a.w, other.w, t),
            scalar::lerp(a.x, other.x, t),
            scalar::lerp(a.y, other.y, t),
            scalar::lerp(a.z, other.z, t),
        )
    }

    #[inline]
    pub fn nlerp(self, other: Self, t: f32) -> Self {
        self.lerp(other, t).normalize()
    }

    /// Spherical linear interpolation
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut q = self;
        let mut c = q.dot(other);

        // Ensure shortest path
        if c < 0.0 {
            q = -q;
            c = -c;
        }

        let phi = trig::acos(scalar::min(c, 1.0));
        if phi <= SLERP_PHI_EPSILON {
            return q;
        }
        if phi < SLERP_LINEAR_PHI {
            // Exact for identical endpoints, where acos(1 - ulp) is ~3e-4.
            return q + (other - q) * t;
        }

        let s = scalar::inv_fsrra(trig::sin(phi));
        q.scale(trig::sin((1.0 - t) * phi) * s).add(other.scale(trig::sin(t * phi) * s))
    }

    /// Columns of the rotation matrix. `self` must be unit length.
    pub fn to_mat3(self) -> Mat3x3 {
        let [l, u, f] = xmtrx::quat_rotation(self);
        Mat3x3::from_cols(l, u, f)
    }

    pub fn to_mat4(self) -> Mat4x4 {
        let [l, u, f] = xmtrx::quat_rotation(self);
        Mat4x4::from_cols(l.extend(0.0), u.extend(0.0), f.extend(0.0), Vec4::w())
    }

    #[inline]
    pub fn from_mat3(m: &Mat3x3) -> Self {
        m.to_quat()
    }

    #[inline]
    pub fn from_mat4(m: &Mat4x4) -> Self {
        m.to_quat()
    }
}

impl Default for Quat {
    fn default() -> Self { Self::identity() }
}

impl From<[f32; 4]> for Quat {
    #[inline]
    fn from(a: [f32; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl From<Quat> for Mat4x4 {
    #[inline]
    fn from(q: Quat) -> Self { q.to_mat4() }
}

impl From<Quat> for Mat3x3 {
    #[inline]
    fn from(q: Quat) -> Self { q.to_mat3() }
}

impl Add for Quat {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Quat::add(self, rhs) }
}

impl Sub for Quat {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Quat {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.w, -self.x, -self.y, -self.z) }
}

impl Mul for Quat {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mult(rhs) }
}

impl Mul<f32> for Quat {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { self.scale(rhs) }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { self.transform_vec3(rhs) }
}

impl core::fmt::Display for Quat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}
