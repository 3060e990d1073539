use crate::mat4::Mat4x4;
use crate::quat::Quat;
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use core::ops::{Add, Index, Mul, Neg, Sub};

/// 3x3 matrix, column-major storage.
///
/// Columns share the names of the first three [`Mat4x4`] columns.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x3 {
    pub left: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Mat3x3 {
    /// Construct from individual elements (row-major argument order for readability).
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self {
            left: Vec3::new(m00, m10, m20),
            up: Vec3::new(m01, m11, m21),
            forward: Vec3::new(m02, m12, m22),
        }
    }

    #[inline]
    pub fn from_cols(left: Vec3, up: Vec3, forward: Vec3) -> Self {
        Self { left, up, forward }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_cols(Vec3::x(), Vec3::y(), Vec3::z())
    }

    /// The upper-left 3x3 of a 4x4 matrix.
    #[inline]
    pub fn from_mat4(m: &Mat4x4) -> Self {
        Self::from_cols(m.left.xyz(), m.up.xyz(), m.forward.xyz())
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.col(col).as_array()[row]
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        match i {
            0 => self.left,
            1 => self.up,
            _ => self.forward,
        }
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.get(i, 0), self.get(i, 1), self.get(i, 2))
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Triple product of the columns.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.left.dot(self.up.cross(self.forward))
    }

    /// `M · v`, one inner product per row.
    #[inline]
    pub fn trans_vec3(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Rotation quaternion of an orthonormal matrix.
    pub fn to_quat(&self) -> Quat {
        Mat4x4::from_cols(
            self.left.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            Vec4::w(),
        )
        .to_quat()
    }

    pub fn mul_mat(&self, rhs: &Mat3x3) -> Mat3x3 {
        Self::from_cols(self.trans_vec3(rhs.left), self.trans_vec3(rhs.up), self.trans_vec3(rhs.forward))
    }
}

impl Index<(usize, usize)> for Mat3x3 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        let c = match col {
            0 => &self.left,
            1 => &self.up,
            _ => &self.forward,
        };
        match row {
            0 => &c.x,
            1 => &c.y,
            _ => &c.z,
        }
    }
}

impl Default for Mat3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Add for Mat3x3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.left + rhs.left, self.up + rhs.up, self.forward + rhs.forward)
    }
}

impl Sub for Mat3x3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.left - rhs.left, self.up - rhs.up, self.forward - rhs.forward)
    }
}

impl Neg for Mat3x3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols(-self.left, -self.up, -self.forward)
    }
}

impl Mul<f32> for Mat3x3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols(self.left * rhs, self.up * rhs, self.forward * rhs)
    }
}

impl Mul<Vec3> for Mat3x3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.trans_vec3(rhs)
    }
}

impl Mul for Mat3x3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}
