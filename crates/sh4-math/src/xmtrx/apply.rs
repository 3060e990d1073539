//! Right-multiplication of the active matrix: every `apply_*` computes
//! `XMTRX = XMTRX · M`, so the newest transform acts on vectors first.

use super::init::{axis_angle_matrix, quat_rotation, skew_matrix};
use super::Xmtrx;
use crate::mat2::Mat2x2;
use crate::mat3::Mat3x3;
use crate::mat3x4::Mat3x4;
use crate::mat4::Mat4x4;
use crate::quat::Quat;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

impl Xmtrx {
    pub fn apply_4x4(&mut self, m: &Mat4x4) {
        self.mul_cols(m.as_array());
    }

    pub fn apply_unaligned_4x4(&mut self, m: &[f32; 16]) {
        self.mul_cols(m);
    }

    /// Applies a 3x4 block as the first three columns; the translation
    /// column is kept.
    pub fn apply_3x4(&mut self, m: &Mat3x4) {
        self.mul_cols3([m.left, m.up, m.forward]);
    }

    pub fn apply_3x3(&mut self, m: &Mat3x3) {
        self.mul_cols3([m.left.extend(0.0), m.up.extend(0.0), m.forward.extend(0.0)]);
    }

    pub fn apply_transpose_3x3(&mut self, m: &Mat3x3) {
        self.apply_3x3(&m.transpose());
    }

    pub fn apply_2x2(&mut self, m: &Mat2x2) {
        self.mul_cols3([m.c0.extend4(0.0, 0.0), m.c1.extend4(0.0, 0.0), Vec4::z()]);
    }

    /// Squares the active matrix.
    pub fn apply_xmtrx(&mut self) {
        let m = *self.regs();
        self.mul_cols(&m);
    }

    pub fn apply_scale(&mut self, x: f32, y: f32, z: f32) {
        self.m.left = self.m.left * x;
        self.m.up = self.m.up * y;
        self.m.forward = self.m.forward * z;
    }

    pub fn apply_rotation_x(&mut self, angle: f32) {
        let sc = self.sincos(angle);
        let (c1, c2) = (self.m.up, self.m.forward);
        self.m.up = c1 * sc.cos + c2 * sc.sin;
        self.m.forward = c2 * sc.cos - c1 * sc.sin;
    }

    pub fn apply_rotation_y(&mut self, angle: f32) {
        let sc = self.sincos(angle);
        let (c0, c2) = (self.m.left, self.m.forward);
        self.m.left = c0 * sc.cos - c2 * sc.sin;
        self.m.forward = c0 * sc.sin + c2 * sc.cos;
    }

    pub fn apply_rotation_z(&mut self, angle: f32) {
        let sc = self.sincos(angle);
        let (c0, c1) = (self.m.left, self.m.up);
        self.m.left = c0 * sc.cos + c1 * sc.sin;
        self.m.up = c1 * sc.cos - c0 * sc.sin;
    }

    pub fn apply_rotation_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.apply_rotation_x(x);
        self.apply_rotation_y(y);
        self.apply_rotation_z(z);
    }

    pub fn apply_rotation_zyx(&mut self, z: f32, y: f32, x: f32) {
        self.apply_rotation_z(z);
        self.apply_rotation_y(y);
        self.apply_rotation_x(x);
    }

    pub fn apply_rotation_yxz(&mut self, y: f32, x: f32, z: f32) {
        self.apply_rotation_y(y);
        self.apply_rotation_x(x);
        self.apply_rotation_z(z);
    }

    /// Rotation of `angle` radians about the unit vector `axis`.
    pub fn apply_rotation(&mut self, axis: Vec3, angle: f32) {
        let sc = self.sincos(angle);
        let r = axis_angle_matrix(axis, sc.sin, sc.cos);
        self.mul_cols3([r.left, r.up, r.forward]);
    }

    pub fn apply_rotation_quat(&mut self, q: Quat) {
        let [c0, c1, c2] = quat_rotation(q);
        self.mul_cols3([c0.extend(0.0), c1.extend(0.0), c2.extend(0.0)]);
    }

    pub fn apply_symmetric_skew(&mut self, x: f32, y: f32, z: f32) {
        let s = skew_matrix(x, y, z);
        self.mul_cols3([s.left, s.up, s.forward]);
    }

    /// Adds the cross-product matrix of `(x, y, z)` to the upper-left 3x3.
    pub fn add_symmetric_skew(&mut self, x: f32, y: f32, z: f32) {
        let s = skew_matrix(x, y, z);
        *self.m.left.xyz_mut() = self.m.left.xyz() + s.left.xyz();
        *self.m.up.xyz_mut() = self.m.up.xyz() + s.up.xyz();
        *self.m.forward.xyz_mut() = self.m.forward.xyz() + s.forward.xyz();
    }

    pub fn add_diagonal(&mut self, x: f32, y: f32, z: f32, w: f32) {
        let r = self.regs_mut();
        r[0] += x;
        r[5] += y;
        r[10] += z;
        r[15] += w;
    }

    /// Right-handed view matrix looking from `position` at `target`.
    pub fn apply_lookat(&mut self, position: Vec3, target: Vec3, up: Vec3) {
        let z = (position - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        let view = Mat4x4::from_cols(
            Vec4::new(x.x, y.x, z.x, 0.0),
            Vec4::new(x.y, y.y, z.y, 0.0),
            Vec4::new(x.z, y.z, z.z, 0.0),
            Vec4::new(-x.dot(position), -y.dot(position), -z.dot(position), 1.0),
        );
        self.apply_4x4(&view);
    }

    /// Perspective projection with an infinite far plane. `w` receives `-z`
    /// and `z` receives `near_z`, so depth after the divide is
    /// `near_z / -z_view`.
    pub fn apply_perspective(&mut self, fov: f32, aspect: f32, near_z: f32) {
        let cot = self.sincos(fov * 0.5).cot();
        let proj = Mat4x4::from_cols(
            Vec4::new(crate::scalar::div(cot, aspect), 0.0, 0.0, 0.0),
            Vec4::new(0.0, cot, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, -1.0),
            Vec4::new(0.0, 0.0, near_z, 0.0),
        );
        self.apply_4x4(&proj);
    }

    /// Maps normalized device coordinates to pixels, `y` pointing down.
    pub fn apply_screen(&mut self, width: f32, height: f32) {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let screen = Mat4x4::from_cols(
            Vec4::new(hw, 0.0, 0.0, 0.0),
            Vec4::new(0.0, -hh, 0.0, 0.0),
            Vec4::z(),
            Vec4::new(hw, hh, 0.0, 1.0),
        );
        self.apply_4x4(&screen);
    }

    /// Reorders columns to `(X1, X2, X3, X0)`, so the matrix consumes
    /// `(w, x, y, z)` vectors as if they were `(x, y, z, w)`.
    pub fn apply_permutation_wxyz(&mut self) {
        let m = self.m;
        self.m = Mat4x4::from_cols(m.up, m.forward, m.pos, m.left);
    }

    /// Reorders columns to `(X3, X0, X1, X2)`.
    pub fn apply_permutation_yzwx(&mut self) {
        let m = self.m;
        self.m = Mat4x4::from_cols(m.pos, m.left, m.up, m.forward);
    }

    /// Right-multiplies by a translation: the offset is carried through
    /// the current 3x3 and `w` rows.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        let m = self.m;
        self.m.pos = m.left * x + m.up * y + m.forward * z + m.pos;
    }

    /// Adds `(x, y, z)` to the translation column directly.
    pub fn apply_translation(&mut self, x: f32, y: f32, z: f32) {
        let t = self.m.pos.xyz() + Vec3::new(x, y, z);
        *self.m.pos.xyz_mut() = t;
    }

    /// `XMTRX = m1 · m2`.
    pub fn load_apply_4x4(&mut self, m1: &Mat4x4, m2: &Mat4x4) {
        self.load_4x4(m1);
        self.apply_4x4(m2);
    }

    pub fn load_apply_unaligned_4x4(&mut self, m1: &[f32; 16], m2: &[f32; 16]) {
        self.load_unaligned_4x4(m1);
        self.apply_unaligned_4x4(m2);
    }

    /// `out = m1 · m2`, leaving the product in XMTRX as well.
    pub fn load_apply_store_4x4(&mut self, out: &mut Mat4x4, m1: &Mat4x4, m2: &Mat4x4) {
        self.load_apply_4x4(m1, m2);
        self.store_4x4(out);
    }

    pub fn load_apply_store_unaligned_4x4(&mut self, out: &mut [f32; 16], m1: &[f32; 16], m2: &[f32; 16]) {
        self.load_apply_unaligned_4x4(m1, m2);
        self.store_unaligned_4x4(out);
    }
}
