//! Error types for sh4-mem.

use core::fmt;

/// A violated block-transfer precondition.
///
/// The unchecked routines only look for these in debug builds; the
/// checked entry points report them to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferError {
    /// Source and destination lengths differ.
    LengthMismatch { dst: usize, src: usize },
    /// Byte count is not a multiple of the granule size.
    Length { bytes: usize, multiple: usize },
    /// Destination address is under-aligned.
    DstAlign { addr: usize, required: usize },
    /// Source address is under-aligned.
    SrcAlign { addr: usize, required: usize },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { dst, src } => {
                write!(f, "length mismatch: dst has {dst} bytes, src has {src}")
            }
            Self::Length { bytes, multiple } => {
                write!(f, "{bytes} bytes is not a multiple of {multiple}")
            }
            Self::DstAlign { addr, required } => {
                write!(f, "destination {addr:#x} is not {required}-byte aligned")
            }
            Self::SrcAlign { addr, required } => {
                write!(f, "source {addr:#x} is not {required}-byte aligned")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransferError {}
