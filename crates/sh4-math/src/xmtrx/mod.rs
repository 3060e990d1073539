//! The active matrix engine.
//!
//! The SH4 keeps one 4x4 matrix in its back floating-point bank (XF0..XF15)
//! and multiplies vectors against it with a single FTRV. [`Xmtrx`] is that
//! register file as a value: whoever holds the `&mut Xmtrx` owns the active
//! matrix, and every operation below reads or overwrites it in place.
//!
//! Registers are column-major: `XF(4c + r)` holds row `r` of column `c`.
//!
//! # Clobbers
//!
//! | Family | Registers written |
//! |--------|-------------------|
//! | `load_*`, `init_*`, `load_apply_*` | all sixteen |
//! | `apply_*` (full matrices), `apply_xmtrx`, `apply_lookat`, `apply_perspective`, `apply_screen` | all sixteen |
//! | `apply_rotation_*`, `apply_scale`, `apply_symmetric_skew`, `apply_3x3`, `apply_3x4` | columns 0..3, the translation column is kept |
//! | `apply_translation`, `set_translation`, `translate` | XF12, XF13, XF14 (plus XF15 for `translate`) |
//! | `set_diagonal`, `add_diagonal` | XF0, XF5, XF10, XF15 |
//! | `set_rotation_quat`, `add_symmetric_skew` | the upper-left 3x3 |
//! | `store_*`, `transform_*`, `read*`, `to_quat`, `determinant` | none |
//!
//! There is no save/restore stack. Callers that need the current matrix
//! after an unrelated operation must `store_4x4` it first.

use crate::fpscr::Fpscr;
use crate::hw;
use crate::mat4::Mat4x4;
use crate::trig::{self, SinCos};
use crate::vec4::Vec4;

mod apply;
mod init;
mod load;
mod transform;

pub(crate) use init::quat_rotation;

/// One register of the back bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Xf {
    Xf0, Xf1, Xf2, Xf3,
    Xf4, Xf5, Xf6, Xf7,
    Xf8, Xf9, Xf10, Xf11,
    Xf12, Xf13, Xf14, Xf15,
}

impl Xf {
    pub const ALL: [Xf; 16] = [
        Xf::Xf0, Xf::Xf1, Xf::Xf2, Xf::Xf3,
        Xf::Xf4, Xf::Xf5, Xf::Xf6, Xf::Xf7,
        Xf::Xf8, Xf::Xf9, Xf::Xf10, Xf::Xf11,
        Xf::Xf12, Xf::Xf13, Xf::Xf14, Xf::Xf15,
    ];

    /// Register holding `(row, col)`.
    #[inline]
    pub fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 4 && col < 4, "register ({}, {}) out of range", row, col);
        Self::ALL[col * 4 + row]
    }

    #[inline]
    pub fn index(self) -> usize { self as usize }

    #[inline]
    pub fn row(self) -> usize { self.index() % 4 }

    #[inline]
    pub fn col(self) -> usize { self.index() / 4 }
}

/// The back-bank matrix register file and the FPSCR mode it runs under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xmtrx {
    m: Mat4x4,
    fpscr: Fpscr,
}

impl Xmtrx {
    /// An engine holding the identity, in the power-on FPU mode.
    #[inline]
    pub fn new() -> Self {
        Self { m: Mat4x4::identity(), fpscr: Fpscr::DEFAULT }
    }

    #[inline]
    pub fn fpscr(&self) -> Fpscr { self.fpscr }

    /// Switches the FPU mode. FTRV, FIPR and FSCA are undefined unless
    /// [`Fpscr::single_precision`] holds.
    pub fn set_fpscr(&mut self, fpscr: Fpscr) {
        if !fpscr.single_precision() {
            tracing::debug!(bits = fpscr.bits(), "fpscr leaves fused matrix ops undefined");
        }
        self.fpscr = fpscr;
    }

    /// The active matrix, without going through a store.
    #[inline]
    pub fn matrix(&self) -> &Mat4x4 { &self.m }

    #[inline]
    pub(crate) fn regs(&self) -> &[f32; 16] { self.m.as_array() }

    #[inline]
    pub(crate) fn regs_mut(&mut self) -> &mut [f32; 16] { self.m.as_array_mut() }

    #[inline]
    fn debug_check_mode(&self) {
        debug_assert!(
            self.fpscr.single_precision(),
            "fused op issued with {:?}",
            self.fpscr
        );
    }

    /// FSCA under the engine's mode guard.
    #[inline]
    fn sincos(&self, radians: f32) -> SinCos {
        self.debug_check_mode();
        trig::sincos(radians)
    }

    /// `XMTRX = XMTRX · rhs`, one FTRV per column of `rhs`.
    fn mul_cols(&mut self, rhs: &[f32; 16]) {
        self.debug_check_mode();
        let lhs = *self.regs();
        let out = self.regs_mut();
        for c in 0..4 {
            let col = hw::ftrv(&lhs, [rhs[c * 4], rhs[c * 4 + 1], rhs[c * 4 + 2], rhs[c * 4 + 3]]);
            out[c * 4..c * 4 + 4].copy_from_slice(&col);
        }
    }

    /// `XMTRX = XMTRX · rhs` for the first three columns only; the
    /// translation column is kept.
    fn mul_cols3(&mut self, rhs: [Vec4; 3]) {
        self.debug_check_mode();
        let lhs = *self.regs();
        let out = self.regs_mut();
        for (c, v) in rhs.iter().enumerate() {
            let col = hw::ftrv(&lhs, v.as_array());
            out[c * 4..c * 4 + 4].copy_from_slice(&col);
        }
    }

    #[inline]
    pub fn read(&self, reg: Xf) -> f32 { self.regs()[reg.index()] }

    #[inline]
    pub fn write(&mut self, reg: Xf, value: f32) { self.regs_mut()[reg.index()] = value; }

    #[inline]
    pub fn read_col(&self, index: usize) -> Vec4 { *self.m.col(index) }

    #[inline]
    pub fn write_col(&mut self, index: usize, v: Vec4) { *self.m.col_mut(index) = v; }

    #[inline]
    pub fn read_row(&self, index: usize) -> Vec4 { self.m.row(index) }

    #[inline]
    pub fn write_row(&mut self, index: usize, v: Vec4) {
        for (c, x) in v.as_array().into_iter().enumerate() {
            self.m.set(index, c, x);
        }
    }

    #[inline]
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        let (ca, cb) = (self.read_col(a), self.read_col(b));
        self.write_col(a, cb);
        self.write_col(b, ca);
    }

    #[inline]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.read_row(a), self.read_row(b));
        self.write_row(a, rb);
        self.write_row(b, ra);
    }
}

impl Default for Xmtrx {
    fn default() -> Self { Self::new() }
}
