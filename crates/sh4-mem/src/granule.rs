use crate::TransferError;

/// Transfer unit of a specialized copy or fill routine.
///
/// Each granule fixes the destination alignment, the source alignment and
/// the byte multiple its routine may be handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granule {
    /// Single bytes, no requirements.
    Byte,
    /// 16-bit words.
    Half,
    /// 32-bit words.
    Word,
    /// 64-bit words (paired FPU moves).
    Double,
    /// One cache line per step.
    Line32,
    /// Two cache lines per step.
    Line64,
    /// Four cache lines per step.
    Line128,
}

impl Granule {
    /// Required destination alignment in bytes.
    #[inline]
    pub const fn dst_align(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
            Self::Line32 | Self::Line64 | Self::Line128 => 32,
        }
    }

    /// Required source alignment in bytes.
    ///
    /// Line copies read through 8-byte register pairs, so their source only
    /// needs 8-byte alignment.
    #[inline]
    pub const fn src_align(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double | Self::Line32 | Self::Line64 | Self::Line128 => 8,
        }
    }

    /// Byte count must be a multiple of this.
    #[inline]
    pub const fn multiple(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
            Self::Line32 => 32,
            Self::Line64 => 64,
            Self::Line128 => 128,
        }
    }
}

/// Checks that both buffers hold the same number of bytes.
#[inline]
pub fn check_lengths(dst: usize, src: usize) -> Result<(), TransferError> {
    if dst == src {
        Ok(())
    } else {
        Err(TransferError::LengthMismatch { dst, src })
    }
}

/// Checks one transfer against a granule's requirements.
///
/// Addresses are plain integers so callers can validate typed slices and
/// raw byte buffers alike.
pub fn check_transfer(
    dst_addr: usize,
    src_addr: usize,
    bytes: usize,
    granule: Granule,
) -> Result<(), TransferError> {
    let multiple = granule.multiple();
    if bytes % multiple != 0 {
        return Err(TransferError::Length { bytes, multiple });
    }

    let required = granule.dst_align();
    if dst_addr % required != 0 {
        return Err(TransferError::DstAlign { addr: dst_addr, required });
    }

    let required = granule.src_align();
    if src_addr % required != 0 {
        return Err(TransferError::SrcAlign { addr: src_addr, required });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_granules_relax_source() {
        for g in [Granule::Line32, Granule::Line64, Granule::Line128] {
            assert_eq!(g.dst_align(), 32);
            assert_eq!(g.src_align(), 8);
        }
    }

    #[test]
    fn check_reports_first_violation() {
        assert_eq!(
            check_transfer(0x20, 0x08, 96, Granule::Line64),
            Err(TransferError::Length { bytes: 96, multiple: 64 })
        );
        assert_eq!(
            check_transfer(0x28, 0x08, 64, Granule::Line64),
            Err(TransferError::DstAlign { addr: 0x28, required: 32 })
        );
        assert_eq!(
            check_transfer(0x20, 0x0c, 64, Granule::Line64),
            Err(TransferError::SrcAlign { addr: 0x0c, required: 8 })
        );
        assert_eq!(check_transfer(0x40, 0x18, 128, Granule::Line64), Ok(()));
    }

    #[test]
    fn byte_granule_accepts_anything() {
        assert_eq!(check_transfer(3, 7, 13, Granule::Byte), Ok(()));
    }

    #[test]
    fn lengths() {
        assert!(check_lengths(4, 4).is_ok());
        assert_eq!(
            check_lengths(4, 5),
            Err(TransferError::LengthMismatch { dst: 4, src: 5 })
        );
    }
}
