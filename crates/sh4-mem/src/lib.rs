//! sh4-mem: Block transfer engine
//!
//! Bulk copy, fill and swap routines specialized by alignment and size,
//! modelled on the SH4 memory system: 32-byte cache lines that can be
//! allocated without a read-for-ownership, paired 8-byte FPU moves, and a
//! pair of store queues that burst whole lines to external memory.
//!
//! # Design principles
//! - Alignment travels in the element type (`u16`, `u32`, `u64`,
//!   [`CacheLine`]); only the byte dispatchers [`copy`] and [`fill`]
//!   inspect addresses.
//! - Length and alignment preconditions are `debug_assert!`ed through the
//!   same validators that back the checked [`try_copy_as`] entry point.
//!   Release builds trust the caller.
//! - Source and destination never overlap: the borrow checker enforces
//!   what the hardware routines could only document.
//! - [`StoreQueue`] is the write-combining path. It is slower than the
//!   cached line copies for memory-to-memory work and only pays off for
//!   destinations that do not benefit from the data cache.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

mod copy;
mod error;
mod fill;
mod fixed;
mod granule;
mod intrinsics;
mod store_queue;

pub use copy::{copy, copy1, copy128, copy2, copy32, copy4, copy64, copy8, try_copy_as};
pub use error::TransferError;
pub use fill::{fill, fill1, fill2, fill4, fill8, fill_lines};
pub use fixed::{copy2_16, copy4_16, fill2_16, swap32};
pub use granule::{check_lengths, check_transfer, Granule};
pub use intrinsics::{cmp_str, xtrct};
pub use store_queue::StoreQueue;

/// Size of one operand-cache line in bytes.
pub const LINE_BYTES: usize = 32;

/// One 32-byte, 32-byte aligned cache line.
///
/// Writing a whole `CacheLine` at once is the software analogue of
/// `MOVCA.L`: the line is claimed for writing without first being filled
/// from memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(32))]
pub struct CacheLine(pub [u64; 4]);

impl CacheLine {
    #[inline]
    pub const fn splat(word: u64) -> Self {
        Self([word; 4])
    }
}

// SAFETY: a single [u64; 4] field, #[repr(C)], size equals alignment, no padding
unsafe impl bytemuck::Zeroable for CacheLine {}
unsafe impl bytemuck::Pod for CacheLine {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_line_layout() {
        assert_eq!(core::mem::size_of::<CacheLine>(), LINE_BYTES);
        assert_eq!(core::mem::align_of::<CacheLine>(), LINE_BYTES);
    }

    #[test]
    fn cache_line_bytes_view() {
        let line = CacheLine::splat(0x0101_0101_0101_0101);
        let bytes: &[u8] = bytemuck::bytes_of(&line);
        assert!(bytes.iter().all(|&b| b == 1));
    }
}
