use crate::vec2::Vec2;
use core::ops::Mul;

/// 2x2 matrix, column-major storage, pair-aligned like [`Mat4x4`](crate::Mat4x4).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(8))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2x2 {
    pub c0: Vec2,
    pub c1: Vec2,
}

impl Mat2x2 {
    /// Row-major argument order.
    #[inline]
    pub fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self { c0: Vec2::new(m00, m10), c1: Vec2::new(m01, m11) }
    }

    #[inline]
    pub fn from_cols(c0: Vec2, c1: Vec2) -> Self {
        Self { c0, c1 }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.as_array()[col * 2 + row]
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.c0.x, self.c0.y, self.c1.x, self.c1.y)
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.c0.cross(self.c1)
    }

    #[inline]
    pub fn trans_vec2(&self, v: Vec2) -> Vec2 {
        self.c0 * v.x + self.c1 * v.y
    }
}

impl Default for Mat2x2 {
    fn default() -> Self { Self::identity() }
}

impl Mul<Vec2> for Mat2x2 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Vec2) -> Vec2 { self.trans_vec2(rhs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_constructor() {
        let m = Mat2x2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.as_array(), &[1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.determinant(), -2.0);
        assert_eq!(m * Vec2::new(1.0, 1.0), Vec2::new(3.0, 7.0));
        assert_eq!(m.transpose().get(0, 1), 3.0);
    }
}
