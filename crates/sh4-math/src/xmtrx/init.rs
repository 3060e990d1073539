//! Whole-matrix initializers and partial setters.
//!
//! `init_*` overwrite all sixteen registers without reading them. `set_*`
//! overwrite only the registers they name and leave the rest as they were.

use super::Xmtrx;
use crate::mat4::Mat4x4;
use crate::quat::Quat;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

impl Xmtrx {
    /// Fast identity: every off-diagonal register is produced by scaling
    /// its old contents by zero, so a NaN already in the file survives.
    /// Use [`init_identity_safe`](Self::init_identity_safe) after loading
    /// untrusted data.
    pub fn init_identity(&mut self) {
        let id = Mat4x4::identity();
        for (r, i) in self.regs_mut().iter_mut().zip(id.as_array()) {
            *r = *r * 0.0 + i;
        }
    }

    /// Identity written from constants, regardless of prior contents.
    pub fn init_identity_safe(&mut self) {
        self.m = Mat4x4::identity();
    }

    pub fn init_zero(&mut self) {
        self.init_fill(0.0);
    }

    pub fn init_one(&mut self) {
        self.init_fill(1.0);
    }

    pub fn init_fill(&mut self, value: f32) {
        *self.regs_mut() = [value; 16];
    }

    pub fn init_diagonal(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.m = Mat4x4::diagonal(x, y, z, w);
    }

    /// Upper-triangular matrix from columns of growing height.
    pub fn init_upper_diagonal(&mut self, c0: f32, c1: Vec2, c2: Vec3, c3: Vec4) {
        self.m = Mat4x4::from_cols(
            Vec4::new(c0, 0.0, 0.0, 0.0),
            c1.extend4(0.0, 0.0),
            c2.extend(0.0),
            c3,
        );
    }

    /// Lower-triangular matrix from columns of shrinking height, each
    /// starting on the diagonal.
    pub fn init_lower_diagonal(&mut self, c0: Vec4, c1: Vec3, c2: Vec2, c3: f32) {
        self.m = Mat4x4::from_cols(
            c0,
            Vec4::new(0.0, c1.x, c1.y, c1.z),
            Vec4::new(0.0, 0.0, c2.x, c2.y),
            Vec4::new(0.0, 0.0, 0.0, c3),
        );
    }

    pub fn init_scale(&mut self, x: f32, y: f32, z: f32) {
        self.init_diagonal(x, y, z, 1.0);
    }

    pub fn init_translation(&mut self, x: f32, y: f32, z: f32) {
        self.m = Mat4x4::identity();
        self.m.pos = Vec4::new(x, y, z, 1.0);
    }

    pub fn init_rotation_x(&mut self, angle: f32) {
        let sc = self.sincos(angle);
        self.m = Mat4x4::from_cols(
            Vec4::x(),
            Vec4::new(0.0, sc.cos, sc.sin, 0.0),
            Vec4::new(0.0, -sc.sin, sc.cos, 0.0),
            Vec4::w(),
        );
    }

    pub fn init_rotation_y(&mut self, angle: f32) {
        let sc = self.sincos(angle);
        self.m = Mat4x4::from_cols(
            Vec4::new(sc.cos, 0.0, -sc.sin, 0.0),
            Vec4::y(),
            Vec4::new(sc.sin, 0.0, sc.cos, 0.0),
            Vec4::w(),
        );
    }

    pub fn init_rotation_z(&mut self, angle: f32) {
        let sc = self.sincos(angle);
        self.m = Mat4x4::from_cols(
            Vec4::new(sc.cos, sc.sin, 0.0, 0.0),
            Vec4::new(-sc.sin, sc.cos, 0.0, 0.0),
            Vec4::z(),
            Vec4::w(),
        );
    }

    /// `Rx · Ry · Rz`.
    pub fn init_rotation_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.init_rotation_x(x);
        self.apply_rotation_y(y);
        self.apply_rotation_z(z);
    }

    /// `Rz · Ry · Rx`.
    pub fn init_rotation_zyx(&mut self, z: f32, y: f32, x: f32) {
        self.init_rotation_z(z);
        self.apply_rotation_y(y);
        self.apply_rotation_x(x);
    }

    /// `Ry · Rx · Rz`.
    pub fn init_rotation_yxz(&mut self, y: f32, x: f32, z: f32) {
        self.init_rotation_y(y);
        self.apply_rotation_x(x);
        self.apply_rotation_z(z);
    }

    /// Rotation of `angle` radians about the unit vector `axis`.
    pub fn init_rotation(&mut self, axis: Vec3, angle: f32) {
        let sc = self.sincos(angle);
        self.m = axis_angle_matrix(axis, sc.sin, sc.cos);
    }

    pub fn init_rotation_quat(&mut self, q: Quat) {
        self.m = Mat4x4::identity();
        self.set_rotation_quat(q);
    }

    /// The cross-product matrix `[v]×`, so that `[v]× · u = v × u`, with
    /// `w` passed through.
    pub fn init_symmetric_skew(&mut self, x: f32, y: f32, z: f32) {
        self.m = skew_matrix(x, y, z);
    }

    /// `a · bᵀ`.
    pub fn init_outer_product(&mut self, a: Vec4, b: Vec4) {
        self.m = Mat4x4::from_cols(a * b.x, a * b.y, a * b.z, a * b.w);
    }

    /// Writes XF12..XF14 only.
    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        *self.m.pos.xyz_mut() = Vec3::new(x, y, z);
    }

    /// Writes XF0, XF5, XF10 and XF15 only.
    pub fn set_diagonal(&mut self, x: f32, y: f32, z: f32, w: f32) {
        let r = self.regs_mut();
        r[0] = x;
        r[5] = y;
        r[10] = z;
        r[15] = w;
    }

    /// Writes the upper-left 3x3 only. `q` must be unit length.
    pub fn set_rotation_quat(&mut self, q: Quat) {
        let r = quat_rotation(q);
        *self.m.left.xyz_mut() = r[0];
        *self.m.up.xyz_mut() = r[1];
        *self.m.forward.xyz_mut() = r[2];
    }
}

/// Columns of the rotation matrix of a unit quaternion.
pub(crate) fn quat_rotation(q: Quat) -> [Vec3; 3] {
    let (w, x, y, z) = (q.w, q.x, q.y, q.z);
    [
        Vec3::new(1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y + w * z), 2.0 * (x * z - w * y)),
        Vec3::new(2.0 * (x * y - w * z), 1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z + w * x)),
        Vec3::new(2.0 * (x * z + y * w), 2.0 * (y * z - x * w), 1.0 - 2.0 * (x * x + y * y)),
    ]
}

pub(crate) fn skew_matrix(x: f32, y: f32, z: f32) -> Mat4x4 {
    Mat4x4::from_cols(
        Vec4::new(0.0, z, -y, 0.0),
        Vec4::new(-z, 0.0, x, 0.0),
        Vec4::new(y, -x, 0.0, 0.0),
        Vec4::w(),
    )
}

/// Rodrigues: `cos·I + sin·[a]× + (1 - cos)·a·aᵀ`.
pub(crate) fn axis_angle_matrix(a: Vec3, sin: f32, cos: f32) -> Mat4x4 {
    let t = 1.0 - cos;
    Mat4x4::from_cols(
        Vec4::new(cos + a.x * a.x * t, a.x * a.y * t + a.z * sin, a.x * a.z * t - a.y * sin, 0.0),
        Vec4::new(a.x * a.y * t - a.z * sin, cos + a.y * a.y * t, a.y * a.z * t + a.x * sin, 0.0),
        Vec4::new(a.x * a.z * t + a.y * sin, a.y * a.z * t - a.x * sin, cos + a.z * a.z * t, 0.0),
        Vec4::w(),
    )
}
