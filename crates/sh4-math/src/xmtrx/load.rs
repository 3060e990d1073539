//! Transfers between memory and the register file.
//!
//! Aligned 4x4 transfers move 8-byte register pairs; the `unaligned` forms
//! fall back to single 4-byte moves. Reduced-rank loads fill every register
//! they do not cover with the identity.

use super::Xmtrx;
use crate::mat2::Mat2x2;
use crate::mat3::Mat3x3;
use crate::mat3x4::Mat3x4;
use crate::mat4::Mat4x4;
use crate::mat4x3::Mat4x3;
use crate::vec4::Vec4;

impl Xmtrx {
    pub fn load_4x4(&mut self, src: &Mat4x4) {
        sh4_mem::copy8(self.m.as_pairs_mut(), src.as_pairs());
    }

    pub fn load_unaligned_4x4(&mut self, src: &[f32; 16]) {
        sh4_mem::copy4_16(bytemuck::cast_mut(self.regs_mut()), bytemuck::cast_ref(src));
    }

    /// Loads with the last column rotated to the front, so a matrix built
    /// for `(x, y, z, w)` vectors transforms `(w, x, y, z)` ones.
    pub fn load_wxyz_4x4(&mut self, src: &Mat4x4) {
        self.m = Mat4x4::from_cols(src.pos, src.left, src.up, src.forward);
    }

    pub fn load_cols_4x4(&mut self, c0: &Vec4, c1: &Vec4, c2: &Vec4, c3: &Vec4) {
        self.m = Mat4x4::from_cols(*c0, *c1, *c2, *c3);
    }

    pub fn load_rows_4x4(&mut self, r0: &Vec4, r1: &Vec4, r2: &Vec4, r3: &Vec4) {
        self.load_cols_4x4(r0, r1, r2, r3);
        self.transpose();
    }

    pub fn load_transpose_4x4(&mut self, src: &Mat4x4) {
        self.load_4x4(src);
        self.transpose();
    }

    pub fn load_transpose_unaligned_4x4(&mut self, src: &[f32; 16]) {
        self.load_unaligned_4x4(src);
        self.transpose();
    }

    /// Four 3-row columns; row 3 becomes `(0, 0, 0, 1)`.
    pub fn load_4x3(&mut self, src: &Mat4x3) {
        self.m = Mat4x4::from_cols(
            src.left.extend(0.0),
            src.up.extend(0.0),
            src.forward.extend(0.0),
            src.pos.extend(1.0),
        );
    }

    /// Three 4-row columns; column 3 becomes `(0, 0, 0, 1)`.
    pub fn load_3x4(&mut self, src: &Mat3x4) {
        self.load_cols_3x4(&src.left, &src.up, &src.forward);
    }

    pub fn load_cols_3x4(&mut self, c0: &Vec4, c1: &Vec4, c2: &Vec4) {
        self.m = Mat4x4::from_cols(*c0, *c1, *c2, Vec4::w());
    }

    /// Three 4-column rows; row 3 becomes `(0, 0, 0, 1)`.
    pub fn load_rows_3x4(&mut self, r0: &Vec4, r1: &Vec4, r2: &Vec4) {
        self.load_cols_3x4(r0, r1, r2);
        self.transpose();
    }

    pub fn load_3x3(&mut self, src: &Mat3x3) {
        self.m = Mat4x4::from_cols(
            src.left.extend(0.0),
            src.up.extend(0.0),
            src.forward.extend(0.0),
            Vec4::w(),
        );
    }

    pub fn load_transpose_3x3(&mut self, src: &Mat3x3) {
        self.load_3x3(&src.transpose());
    }

    pub fn load_2x2(&mut self, src: &Mat2x2) {
        self.m = Mat4x4::from_cols(
            src.c0.extend4(0.0, 0.0),
            src.c1.extend4(0.0, 0.0),
            Vec4::z(),
            Vec4::w(),
        );
    }

    pub fn store_4x4(&self, dst: &mut Mat4x4) {
        sh4_mem::copy8(dst.as_pairs_mut(), self.m.as_pairs());
    }

    pub fn store_unaligned_4x4(&self, dst: &mut [f32; 16]) {
        sh4_mem::copy4_16(bytemuck::cast_mut(dst), bytemuck::cast_ref(self.regs()));
    }

    pub fn store_transpose_4x4(&self, dst: &mut Mat4x4) {
        *dst = self.m.transpose();
    }

    pub fn store_transpose_unaligned_4x4(&self, dst: &mut [f32; 16]) {
        *dst = *self.m.transpose().as_array();
    }

    /// Rows 0..3 of all four columns.
    pub fn store_4x3(&self, dst: &mut Mat4x3) {
        *dst = Mat4x3::from_cols(self.m.left.xyz(), self.m.up.xyz(), self.m.forward.xyz(), self.m.pos.xyz());
    }

    /// Columns 0..3.
    pub fn store_3x4(&self, dst: &mut Mat3x4) {
        *dst = Mat3x4::from_cols(self.m.left, self.m.up, self.m.forward);
    }

    pub fn store_3x3(&self, dst: &mut Mat3x3) {
        *dst = Mat3x3::from_cols(self.m.left.xyz(), self.m.up.xyz(), self.m.forward.xyz());
    }

    pub fn store_transpose_3x3(&self, dst: &mut Mat3x3) {
        self.store_3x3(dst);
        *dst = dst.transpose();
    }

    pub fn store_2x2(&self, dst: &mut Mat2x2) {
        *dst = Mat2x2::from_cols(self.m.left.xy(), self.m.up.xy());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> Mat4x4 {
        let mut a = [0.0_f32; 16];
        for (i, v) in a.iter_mut().enumerate() {
            *v = i as f32 + 1.0;
        }
        Mat4x4::from_array(a)
    }

    #[test]
    fn aligned_and_unaligned_loads_agree() {
        let m = counting();
        let mut a = Xmtrx::new();
        let mut b = Xmtrx::new();
        a.load_4x4(&m);
        b.load_unaligned_4x4(m.as_array());
        assert_eq!(a.matrix(), b.matrix());

        let mut out = Mat4x4::zero();
        a.store_4x4(&mut out);
        assert_eq!(out, m);
        let mut raw = [0.0_f32; 16];
        b.store_unaligned_4x4(&mut raw);
        assert_eq!(&raw, m.as_array());
    }

    #[test]
    fn transposed_transfers() {
        let m = counting();
        let mut x = Xmtrx::new();
        x.load_transpose_4x4(&m);
        assert_eq!(*x.matrix(), m.transpose());

        let mut out = Mat4x4::zero();
        x.store_transpose_4x4(&mut out);
        assert_eq!(out, m);

        x.load_rows_4x4(&m.left, &m.up, &m.forward, &m.pos);
        assert_eq!(x.read_row(1), m.up);
    }

    #[test]
    fn wxyz_rotates_columns() {
        let m = counting();
        let mut x = Xmtrx::new();
        x.load_wxyz_4x4(&m);
        assert_eq!(x.read_col(0), m.pos);
        assert_eq!(x.read_col(1), m.left);
        assert_eq!(x.read_col(3), m.forward);
    }

    #[test]
    fn reduced_loads_fill_identity() {
        let mut x = Xmtrx::new();
        x.load_4x4(&counting());
        x.load_3x3(&Mat3x3::new(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0));
        assert_eq!(*x.matrix(), Mat4x4::diagonal(2.0, 3.0, 4.0, 1.0));

        x.load_4x4(&counting());
        x.load_2x2(&Mat2x2::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(x.read_row(0), Vec4::new(5.0, 6.0, 0.0, 0.0));
        assert_eq!(x.read_row(1), Vec4::new(7.0, 8.0, 0.0, 0.0));
        assert_eq!(x.read_row(2), Vec4::z());
        assert_eq!(x.read_row(3), Vec4::w());

        x.load_rows_3x4(&Vec4::splat(1.0), &Vec4::splat(2.0), &Vec4::splat(3.0));
        assert_eq!(x.read_row(2), Vec4::splat(3.0));
        assert_eq!(x.read_row(3), Vec4::w());
    }

    #[test]
    fn reduced_stores_round_trip() {
        let m = counting();
        let mut x = Xmtrx::new();
        x.load_4x4(&m);

        let mut m43 = Mat4x3::identity();
        x.store_4x3(&mut m43);
        assert_eq!(m43.pos, m.pos.xyz());

        let mut m34 = Mat3x4::identity();
        x.store_3x4(&mut m34);
        assert_eq!(m34.forward, m.forward);

        let mut m3 = Mat3x3::identity();
        x.store_3x3(&mut m3);
        let mut t3 = Mat3x3::identity();
        x.store_transpose_3x3(&mut t3);
        assert_eq!(t3, m3.transpose());

        let mut m2 = Mat2x2::identity();
        x.store_2x2(&mut m2);
        assert_eq!(m2.c1, m.up.xy());

        x.load_4x3(&m43);
        assert_eq!(x.read_row(3), Vec4::w());
        assert_eq!(x.read_col(3).xyz(), m.pos.xyz());
    }
}
