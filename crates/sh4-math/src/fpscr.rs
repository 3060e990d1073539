use core::fmt;

/// Floating-point status/control register.
///
/// The fused instructions ([`fipr`](crate::hw::fipr),
/// [`ftrv`](crate::hw::ftrv), FSCA, FSRRA) are only defined in
/// single-precision mode with 4-byte moves, i.e. PR = 0 and SZ = 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fpscr(u32);

/// FPSCR rounding modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    Nearest,
    Zero,
}

/// IEEE exception kinds, in FPSCR bit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpuException {
    Inexact,
    Underflow,
    Overflow,
    DivideByZero,
    Invalid,
}

const FLAG_SHIFT: u32 = 2;
const ENABLE_SHIFT: u32 = 7;
const CAUSE_SHIFT: u32 = 12;
const CAUSE_ERROR: u32 = 1 << 17;

impl Fpscr {
    /// Power-on value: round to zero, denormals flushed.
    pub const DEFAULT: Self = Self(0x0004_0001);

    pub const RM: u32 = 1 << 0;
    pub const DN: u32 = 1 << 18;
    pub const PR: u32 = 1 << 19;
    pub const SZ: u32 = 1 << 20;
    pub const FR: u32 = 1 << 21;

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    const fn with(self, mask: u32, on: bool) -> Self {
        if on { Self(self.0 | mask) } else { Self(self.0 & !mask) }
    }

    #[inline]
    pub const fn rounding_mode(self) -> RoundingMode {
        if self.0 & Self::RM != 0 { RoundingMode::Zero } else { RoundingMode::Nearest }
    }

    #[inline]
    pub const fn with_rounding_mode(self, mode: RoundingMode) -> Self {
        self.with(Self::RM, matches!(mode, RoundingMode::Zero))
    }

    /// DN: denormal results are flushed to zero.
    #[inline]
    pub const fn flushes_denormals(self) -> bool {
        self.0 & Self::DN != 0
    }

    #[inline]
    pub const fn with_flush_denormals(self, on: bool) -> Self {
        self.with(Self::DN, on)
    }

    /// PR: double-precision arithmetic.
    #[inline]
    pub const fn double_precision(self) -> bool {
        self.0 & Self::PR != 0
    }

    #[inline]
    pub const fn with_double_precision(self, on: bool) -> Self {
        self.with(Self::PR, on)
    }

    /// SZ: FMOV moves 8-byte register pairs.
    #[inline]
    pub const fn pair_moves(self) -> bool {
        self.0 & Self::SZ != 0
    }

    #[inline]
    pub const fn with_pair_moves(self, on: bool) -> Self {
        self.with(Self::SZ, on)
    }

    /// FR: the back register bank (holding XMTRX) is swapped to the front.
    #[inline]
    pub const fn bank_swapped(self) -> bool {
        self.0 & Self::FR != 0
    }

    #[inline]
    pub const fn with_bank_swapped(self, on: bool) -> Self {
        self.with(Self::FR, on)
    }

    /// FRCHG: toggles the register bank.
    #[inline]
    pub const fn frchg(self) -> Self {
        Self(self.0 ^ Self::FR)
    }

    /// FSCHG: toggles the move size.
    #[inline]
    pub const fn fschg(self) -> Self {
        Self(self.0 ^ Self::SZ)
    }

    /// True when FIPR/FTRV/FSCA/FSRRA are defined.
    #[inline]
    pub const fn single_precision(self) -> bool {
        self.0 & (Self::PR | Self::SZ) == 0
    }

    #[inline]
    pub const fn flag(self, e: FpuException) -> bool {
        self.0 & (1 << (FLAG_SHIFT + e as u32)) != 0
    }

    #[inline]
    pub const fn enabled(self, e: FpuException) -> bool {
        self.0 & (1 << (ENABLE_SHIFT + e as u32)) != 0
    }

    #[inline]
    pub const fn cause(self, e: FpuException) -> bool {
        self.0 & (1 << (CAUSE_SHIFT + e as u32)) != 0
    }

    #[inline]
    pub const fn with_enabled(self, e: FpuException, on: bool) -> Self {
        self.with(1 << (ENABLE_SHIFT + e as u32), on)
    }

    /// Cause bit for an FPU error, which has no flag or enable.
    #[inline]
    pub const fn fpu_error(self) -> bool {
        self.0 & CAUSE_ERROR != 0
    }

    /// Clears the sticky flag field.
    #[inline]
    pub const fn clear_flags(self) -> Self {
        Self(self.0 & !(0x1f << FLAG_SHIFT))
    }
}

impl Default for Fpscr {
    fn default() -> Self { Self::DEFAULT }
}

impl fmt::Debug for Fpscr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fpscr")
            .field("bits", &format_args!("{:#010x}", self.0))
            .field("rm", &self.rounding_mode())
            .field("dn", &self.flushes_denormals())
            .field("pr", &self.double_precision())
            .field("sz", &self.pair_moves())
            .field("fr", &self.bank_swapped())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_precision() {
        let f = Fpscr::default();
        assert_eq!(f.bits(), 0x0004_0001);
        assert!(f.single_precision());
        assert!(f.flushes_denormals());
        assert_eq!(f.rounding_mode(), RoundingMode::Zero);
    }

    #[test]
    fn mode_bits_break_the_guard() {
        let f = Fpscr::DEFAULT;
        assert!(!f.fschg().single_precision());
        assert!(f.fschg().fschg().single_precision());
        assert!(!f.with_double_precision(true).single_precision());
        assert!(f.frchg().single_precision());
        assert!(f.frchg().bank_swapped());
    }

    #[test]
    fn exception_fields() {
        let f = Fpscr::from_bits(0).with_enabled(FpuException::Overflow, true);
        assert_eq!(f.bits(), 1 << 9);
        assert!(f.enabled(FpuException::Overflow));
        assert!(!f.flag(FpuException::Overflow));

        let f = Fpscr::from_bits((1 << 6) | (1 << 16) | (1 << 17));
        assert!(f.flag(FpuException::Invalid));
        assert!(f.cause(FpuException::Invalid));
        assert!(f.fpu_error());
        assert!(!f.clear_flags().flag(FpuException::Invalid));
    }
}
