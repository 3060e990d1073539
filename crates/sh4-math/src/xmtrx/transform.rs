//! Vector transforms through the active matrix and in-place whole-matrix
//! operations.

use super::Xmtrx;
use crate::hw;
use crate::quat::Quat;
use crate::scalar;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

impl Xmtrx {
    /// One FTRV.
    #[inline]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        self.debug_check_mode();
        let [x, y, z, w] = hw::ftrv(self.regs(), v.as_array());
        Vec4::new(x, y, z, w)
    }

    /// Direction transform: `w = 0`, so translation is ignored.
    #[inline]
    pub fn transform_vec3(&self, v: Vec3) -> Vec3 {
        self.transform_vec4(v.extend(0.0)).xyz()
    }

    #[inline]
    pub fn transform_vec2(&self, v: Vec2) -> Vec2 {
        self.transform_vec4(v.extend4(0.0, 0.0)).xy()
    }

    /// Point transform: `w = 1`. No perspective divide.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        self.transform_vec4(p.extend(1.0)).xyz()
    }

    pub fn transpose(&mut self) {
        self.m = self.m.transpose();
    }

    pub fn negate(&mut self) {
        for r in self.regs_mut() {
            *r = -*r;
        }
    }

    pub fn abs(&mut self) {
        for r in self.regs_mut() {
            *r = scalar::abs(*r);
        }
    }

    /// Rotation quaternion of the upper-left 3x3, which must be
    /// orthonormal.
    #[inline]
    pub fn to_quat(&self) -> Quat {
        self.m.to_quat()
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m.determinant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4::Mat4x4;

    #[test]
    fn vector_widths() {
        let mut x = Xmtrx::new();
        x.init_translation(1.0, 2.0, 3.0);
        assert_eq!(x.transform_point3(Vec3::zero()), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(x.transform_vec3(Vec3::x()), Vec3::x());
        assert_eq!(x.transform_vec2(Vec2::new(4.0, 5.0)), Vec2::new(4.0, 5.0));
        assert_eq!(x.transform_vec4(Vec4::w()), Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn in_place_ops() {
        let mut x = Xmtrx::new();
        x.init_diagonal(-1.0, 2.0, -3.0, 4.0);
        x.negate();
        assert_eq!(*x.matrix(), Mat4x4::diagonal(1.0, -2.0, 3.0, -4.0));
        x.abs();
        assert_eq!(*x.matrix(), Mat4x4::diagonal(1.0, 2.0, 3.0, 4.0));
        assert!((x.determinant() - 24.0).abs() < 1e-4);

        x.write_col(3, Vec4::new(7.0, 8.0, 9.0, 1.0));
        x.transpose();
        assert_eq!(x.read_row(3), Vec4::new(7.0, 8.0, 9.0, 1.0));
    }

    #[test]
    fn rotation_round_trips_through_quat() {
        let mut x = Xmtrx::new();
        x.init_rotation_z(0.9);
        let q = x.to_quat();
        let mut y = Xmtrx::new();
        y.init_rotation_quat(q);
        for c in 0..3 {
            let (a, b) = (x.read_col(c), y.read_col(c));
            assert!((a - b).magnitude() < 1e-3, "column {} differs: {} vs {}", c, a, b);
        }
    }
}
