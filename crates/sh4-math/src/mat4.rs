use crate::quat::Quat;
use crate::scalar;
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use crate::xmtrx::{self, Xmtrx};
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// 4x4 matrix, column-major storage.
///
/// The four columns are named for their role in an affine transform: the
/// basis vectors `left`, `up` and `forward`, then the translation `pos`.
/// Aligned to 8 bytes so the register file can move it in pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(8))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4x4 {
    pub left: Vec4,
    pub up: Vec4,
    pub forward: Vec4,
    pub pos: Vec4,
}

/// Generates a façade method that runs on a scratch engine plus its
/// `_with` sibling that runs on (and clobbers) the caller's engine.
macro_rules! facade {
    (@init $self:ident, $x:ident) => {};
    (@apply $self:ident, $x:ident) => { $x.load_4x4($self) };
    ($(
        $(#[$meta:meta])*
        $kind:ident $name:ident($($arg:ident: $ty:ty),*);
    )*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                pub fn $name(&mut self, $($arg: $ty),*) {
                    self.[<$name _with>](&mut Xmtrx::new(), $($arg),*)
                }

                /// As the method without `_with`, on the given engine.
                /// Clobbers all of XMTRX.
                pub fn [<$name _with>](&mut self, xmtrx: &mut Xmtrx, $($arg: $ty),*) {
                    facade!(@$kind self, xmtrx);
                    xmtrx.$name($($arg),*);
                    xmtrx.store_4x4(self);
                }
            )*
        }
    };
}

impl Mat4x4 {
    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            left: Vec4::new(m00, m10, m20, m30),
            up: Vec4::new(m01, m11, m21, m31),
            forward: Vec4::new(m02, m12, m22, m32),
            pos: Vec4::new(m03, m13, m23, m33),
        }
    }

    #[inline]
    pub fn from_cols(left: Vec4, up: Vec4, forward: Vec4, pos: Vec4) -> Self {
        Self { left, up, forward, pos }
    }

    /// From sixteen floats in column-major order.
    #[inline]
    pub fn from_array(a: [f32; 16]) -> Self {
        bytemuck::cast(a)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn diagonal(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::new(
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, w,
        )
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.as_array()[col * 4 + row]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.as_array_mut()[col * 4 + row] = value;
    }

    #[inline]
    pub fn col(&self, index: usize) -> &Vec4 {
        debug_assert!(index < 4, "column index {} out of range", index);
        match index { 0 => &self.left, 1 => &self.up, 2 => &self.forward, _ => &self.pos }
    }

    #[inline]
    pub fn col_mut(&mut self, index: usize) -> &mut Vec4 {
        debug_assert!(index < 4, "column index {} out of range", index);
        match index { 0 => &mut self.left, 1 => &mut self.up, 2 => &mut self.forward, _ => &mut self.pos }
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::new(self.get(index, 0), self.get(index, 1), self.get(index, 2), self.get(index, 3))
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }

    /// Column-major 2D view, indexed `[col][row]`.
    #[inline]
    pub fn as_cols(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_cols_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(self)
    }

    /// The matrix as eight 8-byte register pairs.
    #[inline]
    pub fn as_pairs(&self) -> &[u64] {
        bytemuck::cast_slice(core::slice::from_ref(self))
    }

    #[inline]
    pub fn as_pairs_mut(&mut self) -> &mut [u64] {
        bytemuck::cast_slice_mut(core::slice::from_mut(self))
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.left.x, self.left.y, self.left.z, self.left.w,
            self.up.x, self.up.y, self.up.z, self.up.w,
            self.forward.x, self.forward.y, self.forward.z, self.forward.w,
            self.pos.x, self.pos.y, self.pos.z, self.pos.w,
        )
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let m = |r, c| self.get(r, c);

        let s0 = m(2, 2) * m(3, 3) - m(2, 3) * m(3, 2);
        let s1 = m(2, 1) * m(3, 3) - m(2, 3) * m(3, 1);
        let s2 = m(2, 1) * m(3, 2) - m(2, 2) * m(3, 1);
        let s3 = m(2, 0) * m(3, 3) - m(2, 3) * m(3, 0);
        let s4 = m(2, 0) * m(3, 2) - m(2, 2) * m(3, 0);
        let s5 = m(2, 0) * m(3, 1) - m(2, 1) * m(3, 0);

        let c0 = m(1, 1) * s0 - m(1, 2) * s1 + m(1, 3) * s2;
        let c1 = -(m(1, 0) * s0 - m(1, 2) * s3 + m(1, 3) * s4);
        let c2 = m(1, 0) * s1 - m(1, 1) * s3 + m(1, 3) * s5;
        let c3 = -(m(1, 0) * s2 - m(1, 1) * s4 + m(1, 2) * s5);

        scalar::dot8(m(0, 0), m(0, 1), m(0, 2), m(0, 3), c0, c1, c2, c3)
    }

    /// Rotation quaternion of the upper-left 3x3, which must be
    /// orthonormal.
    ///
    /// Branches on the trace and then on whichever diagonal term dominates,
    /// so the reciprocal square root never sees a value near zero.
    pub fn to_quat(&self) -> Quat {
        let (l, u, f) = (self.left, self.up, self.forward);
        let trace = l.x + u.y + f.z;

        if trace >= 0.0 {
            let s = scalar::inv_sqrt(trace + 1.0);
            let m = 0.5 * s;
            Quat::new(scalar::div_fsrra(0.5, s), (u.z - f.y) * m, (f.x - l.z) * m, (l.y - u.x) * m)
        } else if l.x - u.y - f.z >= 0.0 {
            let s = scalar::inv_sqrt(l.x - u.y - f.z + 1.0);
            let m = 0.5 * s;
            Quat::new((u.z - f.y) * m, scalar::div_fsrra(0.5, s), (u.x + l.y) * m, (f.x + l.z) * m)
        } else if u.y - l.x - f.z >= 0.0 {
            let s = scalar::inv_sqrt(u.y - l.x - f.z + 1.0);
            let m = 0.5 * s;
            Quat::new((f.x - l.z) * m, (u.x + l.y) * m, scalar::div_fsrra(0.5, s), (f.y + u.z) * m)
        } else {
            let s = scalar::inv_sqrt(f.z - l.x - u.y + 1.0);
            let m = 0.5 * s;
            Quat::new((l.y - u.x) * m, (f.x + l.z) * m, (f.y + u.z) * m, scalar::div_fsrra(0.5, s))
        }
    }

    /// 4x4 matrix inverse via cofactor expansion
    pub fn try_inverse(&self) -> Option<Self> {
        let m = |r, c| self.get(r, c);

        let s0 = m(0,0) * m(1,1) - m(1,0) * m(0,1);
        let s1 = m(0,0) * m(1,2) - m(1,0) * m(0,2);
        let s2 = m(0,0) * m(1,3) - m(1,0) * m(0,3);
        let s3 = m(0,1) * m(1,2) - m(1,1) * m(0,2);
        let s4 = m(0,1) * m(1,3) - m(1,1) * m(0,3);
        let s5 = m(0,2) * m(1,3) - m(1,2) * m(0,3);

        let c5 = m(2,2) * m(3,3) - m(3,2) * m(2,3);
        let c4 = m(2,1) * m(3,3) - m(3,1) * m(2,3);
        let c3 = m(2,1) * m(3,2) - m(3,1) * m(2,2);
        let c2 = m(2,0) * m(3,3) - m(3,0) * m(2,3);
        let c1 = m(2,0) * m(3,2) - m(3,0) * m(2,2);
        let c0 = m(2,0) * m(3,1) - m(3,0) * m(2,1);

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if scalar::abs(det) < f32::EPSILON { return None; }

        let inv_det = scalar::inv_exact(det);
        Some(Self::new(
            ( m(1,1) * c5 - m(1,2) * c4 + m(1,3) * c3) * inv_det,
            (-m(0,1) * c5 + m(0,2) * c4 - m(0,3) * c3) * inv_det,
            ( m(3,1) * s5 - m(3,2) * s4 + m(3,3) * s3) * inv_det,
            (-m(2,1) * s5 + m(2,2) * s4 - m(2,3) * s3) * inv_det,
            (-m(1,0) * c5 + m(1,2) * c2 - m(1,3) * c1) * inv_det,
            ( m(0,0) * c5 - m(0,2) * c2 + m(0,3) * c1) * inv_det,
            (-m(3,0) * s5 + m(3,2) * s2 - m(3,3) * s1) * inv_det,
            ( m(2,0) * s5 - m(2,2) * s2 + m(2,3) * s1) * inv_det,
            ( m(1,0) * c4 - m(1,1) * c2 + m(1,3) * c0) * inv_det,
            (-m(0,0) * c4 + m(0,1) * c2 - m(0,3) * c0) * inv_det,
            ( m(3,0) * s4 - m(3,1) * s2 + m(3,3) * s0) * inv_det,
            (-m(2,0) * s4 + m(2,1) * s2 - m(2,3) * s0) * inv_det,
            (-m(1,0) * c3 + m(1,1) * c1 - m(1,2) * c0) * inv_det,
            ( m(0,0) * c3 - m(0,1) * c1 + m(0,2) * c0) * inv_det,
            (-m(3,0) * s3 + m(3,1) * s1 - m(3,2) * s0) * inv_det,
            ( m(2,0) * s3 - m(2,1) * s1 + m(2,2) * s0) * inv_det,
        ))
    }

    /// One-off `M · v` with four inner products, without the engine.
    #[inline]
    pub fn trans_vec4(&self, v: Vec4) -> Vec4 {
        Vec4::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v), self.row(3).dot(v))
    }

    /// One-off direction transform (`w = 0`).
    #[inline]
    pub fn trans_vec3(&self, v: Vec3) -> Vec3 {
        let v = v.extend(0.0);
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Writes the three scale entries of the diagonal only.
    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.left.x = x;
        self.up.y = y;
        self.forward.z = z;
    }

    pub fn set_diagonal(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.set_scale(x, y, z);
        self.pos.w = w;
    }

    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        *self.pos.xyz_mut() = Vec3::new(x, y, z);
    }

    /// Writes the upper-left 3x3 only. `q` must be unit length.
    pub fn set_rotation_quat(&mut self, q: Quat) {
        let [c0, c1, c2] = xmtrx::quat_rotation(q);
        *self.left.xyz_mut() = c0;
        *self.up.xyz_mut() = c1;
        *self.forward.xyz_mut() = c2;
    }

    /// Copies through 8-byte register pairs.
    #[inline]
    pub fn copy_from(&mut self, src: &Mat4x4) {
        sh4_mem::copy8(self.as_pairs_mut(), src.as_pairs());
    }

    /// `self = a · b`. Clobbers nothing the caller owns.
    pub fn init_mult(&mut self, a: &Mat4x4, b: &Mat4x4) {
        self.init_mult_with(&mut Xmtrx::new(), a, b);
    }

    pub fn init_mult_with(&mut self, xmtrx: &mut Xmtrx, a: &Mat4x4, b: &Mat4x4) {
        xmtrx.load_apply_store_4x4(self, a, b);
    }

    /// `self = self · rhs`.
    pub fn apply(&mut self, rhs: &Mat4x4) {
        self.apply_with(&mut Xmtrx::new(), rhs);
    }

    pub fn apply_with(&mut self, xmtrx: &mut Xmtrx, rhs: &Mat4x4) {
        xmtrx.load_apply_4x4(self, rhs);
        xmtrx.store_4x4(self);
    }

    facade! {
        init init_identity();
        init init_diagonal(x: f32, y: f32, z: f32, w: f32);
        init init_scale(x: f32, y: f32, z: f32);
        init init_translation(x: f32, y: f32, z: f32);
        init init_rotation_x(angle: f32);
        init init_rotation_y(angle: f32);
        init init_rotation_z(angle: f32);
        /// `Rx · Ry · Rz`.
        init init_rotation_xyz(x: f32, y: f32, z: f32);
        /// `Rz · Ry · Rx`.
        init init_rotation_zyx(z: f32, y: f32, x: f32);
        /// `Ry · Rx · Rz`.
        init init_rotation_yxz(y: f32, x: f32, z: f32);
        /// Rotation of `angle` radians about the unit vector `axis`.
        init init_rotation(axis: Vec3, angle: f32);
        init init_rotation_quat(q: Quat);
        init init_symmetric_skew(x: f32, y: f32, z: f32);

        apply apply_scale(x: f32, y: f32, z: f32);
        /// Adds to the translation column.
        apply apply_translation(x: f32, y: f32, z: f32);
        apply apply_rotation_x(angle: f32);
        apply apply_rotation_y(angle: f32);
        apply apply_rotation_z(angle: f32);
        apply apply_rotation_xyz(x: f32, y: f32, z: f32);
        apply apply_rotation_zyx(z: f32, y: f32, x: f32);
        apply apply_rotation_yxz(y: f32, x: f32, z: f32);
        apply apply_rotation(axis: Vec3, angle: f32);
        apply apply_rotation_quat(q: Quat);
        apply apply_symmetric_skew(x: f32, y: f32, z: f32);
    }
}

impl Default for Mat4x4 {
    fn default() -> Self { Self::identity() }
}

impl From<[f32; 16]> for Mat4x4 {
    #[inline]
    fn from(a: [f32; 16]) -> Self { Self::from_array(a) }
}

impl fmt::Display for Mat4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..4 {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row(r))?;
        }
        Ok(())
    }
}

impl Add for Mat4x4 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.left + rhs.left, self.up + rhs.up, self.forward + rhs.forward, self.pos + rhs.pos)
    }
}

impl Sub for Mat4x4 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.left - rhs.left, self.up - rhs.up, self.forward - rhs.forward, self.pos - rhs.pos)
    }
}

impl Neg for Mat4x4 {
    type Output = Self;
    #[inline] fn neg(self) -> Self {
        Self::from_cols(-self.left, -self.up, -self.forward, -self.pos)
    }
}

impl Mul<f32> for Mat4x4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::from_cols(self.left * rhs, self.up * rhs, self.forward * rhs, self.pos * rhs)
    }
}

// Mat4x4 * Vec4
impl Mul<Vec4> for Mat4x4 {
    type Output = Vec4;
    #[inline] fn mul(self, rhs: Vec4) -> Vec4 { self.trans_vec4(rhs) }
}

// Mat4x4 * Mat4x4, through a scratch engine
impl Mul for Mat4x4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zero();
        out.init_mult(&self, &rhs);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn cols_view_is_col_row_indexed() {
        let mut m = Mat4x4::new(
            0.0, 1.0, 2.0, 3.0,
            4.0, 5.0, 6.0, 7.0,
            8.0, 9.0, 10.0, 11.0,
            12.0, 13.0, 14.0, 15.0,
        );
        for c in 0..4 {
            for r in 0..4 {
                assert_eq!(m.as_cols()[c][r], m.get(r, c), "mismatch at ({}, {})", r, c);
            }
        }
        m.as_cols_mut()[3][1] = -1.0;
        assert_eq!(m.pos.y, -1.0);
        assert_eq!(m.as_cols()[2], m.col(2).as_array());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "column index 4 out of range")]
    fn col_rejects_out_of_range_index() {
        let _ = Mat4x4::identity().col(4);
    }

    fn assert_close(a: &Mat4x4, b: &Mat4x4, tol: f32) {
        for r in 0..4 {
            for c in 0..4 {
                assert!((a.get(r, c) - b.get(r, c)).abs() < tol,
                    "mismatch at ({}, {}): {} vs {}", r, c, a.get(r, c), b.get(r, c));
            }
        }
    }

    fn translation(x: f32, y: f32, z: f32) -> Mat4x4 {
        let mut m = Mat4x4::zero();
        m.init_translation(x, y, z);
        m
    }

    #[test]
    fn layout() {
        assert_eq!(core::mem::size_of::<Mat4x4>(), 64);
        assert_eq!(core::mem::align_of::<Mat4x4>(), 8);
        let m = Mat4x4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m.as_array()[1], 5.0);
        assert_eq!(m.get(2, 1), 10.0);
        assert_eq!(m.row(3), Vec4::new(13.0, 14.0, 15.0, 16.0));
        assert_eq!(m.as_pairs().len(), 8);
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let m = translation(10.0, 20.0, 30.0);
        assert_eq!(m.trans_vec4(Vec4::new(1.0, 2.0, 3.0, 1.0)), Vec4::new(11.0, 22.0, 33.0, 1.0));
        assert_eq!(m.trans_vec3(Vec3::x()), Vec3::x());
    }

    #[test]
    fn compose() {
        let t = translation(1.0, 0.0, 0.0);
        let mut r = Mat4x4::zero();
        r.init_rotation_z(FRAC_PI_2);
        // Rotate then translate
        let m = t * r;
        let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn apply_matches_mult() {
        let t = translation(1.0, 2.0, 3.0);
        let mut r = Mat4x4::zero();
        r.init_rotation_xyz(0.2, 0.4, 0.6);

        let mut a = t;
        a.apply(&r);
        assert_close(&a, &(t * r), 1e-6);

        let mut b = t;
        b.apply_rotation_xyz(0.2, 0.4, 0.6);
        assert_close(&b, &a, 1e-5);
    }

    #[test]
    fn with_variants_clobber_the_given_engine() {
        let mut engine = Xmtrx::new();
        engine.init_fill(7.0);
        let mut m = Mat4x4::zero();
        m.init_scale_with(&mut engine, 2.0, 3.0, 4.0);
        assert_eq!(m, Mat4x4::diagonal(2.0, 3.0, 4.0, 1.0));
        assert_eq!(*engine.matrix(), m);

        let mut n = Mat4x4::zero();
        n.init_scale(5.0, 5.0, 5.0);
        assert_eq!(*engine.matrix(), m);
    }

    #[test]
    fn inverse_roundtrip() {
        let mut m = translation(1.0, 2.0, 3.0);
        m.apply_rotation_z(0.5);
        let mi = m.try_inverse().unwrap();
        let prod = m * mi;
        assert_close(&prod, &Mat4x4::identity(), 1e-5);
        assert!(Mat4x4::zero().try_inverse().is_none());
    }

    #[test]
    fn determinant() {
        let m = Mat4x4::new(
            2.0, 0.0, 1.0, 0.0,
            1.0, 3.0, 0.0, 0.0,
            0.0, 1.0, 4.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        // 2·(12 - 0) - 0 + 1·(1 - 0)
        assert!((m.determinant() - 25.0).abs() < 1e-4);
        assert!((translation(4.0, 5.0, 6.0).determinant() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn setters_write_only_their_entries() {
        let mut m = Mat4x4::from_array([9.0; 16]);
        m.set_scale(1.0, 2.0, 3.0);
        assert_eq!(m.pos.w, 9.0);
        m.set_diagonal(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.row(3), Vec4::new(9.0, 9.0, 9.0, 4.0));
        m.set_translation(0.0, 0.0, 0.0);
        assert_eq!(m.pos, Vec4::new(0.0, 0.0, 0.0, 4.0));
        m.set_rotation_quat(Quat::identity());
        assert_eq!(m.left, Vec4::new(1.0, 0.0, 0.0, 9.0));
    }

    #[test]
    fn quat_round_trip_each_branch() {
        // One rotation per Shepperd branch: small angle, and half turns
        // about each axis.
        let cases = [
            (Vec3::new(1.0, 1.0, 0.0).normalize(), 0.4),
            (Vec3::x(), 3.1),
            (Vec3::y(), 3.1),
            (Vec3::z(), 3.1),
        ];
        for (axis, angle) in cases {
            let q = Quat::from_axis_angle(axis, angle);
            let mut m = Mat4x4::zero();
            m.init_rotation_quat(q);
            let back = m.to_quat();
            let d = q.dot(back).abs();
            assert!((d - 1.0).abs() < 1e-3, "axis {} angle {}: {:?} vs {:?}", axis, angle, q, back);
        }
    }

    #[test]
    fn copy_from_is_bitwise() {
        let src = Mat4x4::from_array(core::array::from_fn(|i| i as f32 * 0.5));
        let mut dst = Mat4x4::zero();
        dst.copy_from(&src);
        assert_eq!(dst, src);
    }
}
