use tracing::trace;

use crate::{check_lengths, check_transfer, CacheLine, Granule, TransferError, LINE_BYTES};

/// Below this many bytes the dispatcher copies byte by byte; aligning the
/// destination would cost more than it saves.
const SMALL_COPY: usize = 64;

/// Elements moved per unrolled step in the word-wise copies.
const UNROLL: usize = 8;

/// Copies `src` into `dst`, choosing the fastest routine the buffers'
/// alignment allows.
///
/// Short copies go byte by byte. Longer ones align the destination to a
/// cache line, then move the body as whole lines when the source is
/// 8-byte aligned, or as 32/16-bit words otherwise, and finish the tail
/// byte-wise.
///
/// Both slices must have the same length (checked in debug builds only;
/// release builds copy the common prefix).
pub fn copy(dst: &mut [u8], src: &[u8]) {
    debug_assert!(
        check_lengths(dst.len(), src.len()).is_ok(),
        "copy: dst has {} bytes, src has {}",
        dst.len(),
        src.len()
    );

    let bytes = dst.len().min(src.len());
    let (dst, src) = (&mut dst[..bytes], &src[..bytes]);

    if bytes == 0 {
        return;
    }
    if bytes < SMALL_COPY {
        trace!(bytes, "copy: byte path");
        copy1(dst, src);
        return;
    }

    let addr = dst.as_ptr() as usize;
    let head = ((addr + LINE_BYTES - 1) & !(LINE_BYTES - 1)) - addr;
    let (dst_head, dst) = dst.split_at_mut(head);
    let (src_head, src) = src.split_at(head);
    copy1(dst_head, src_head);

    let src_addr = src.as_ptr() as usize;
    let granule = if src_addr % 8 == 0 {
        Granule::Line32
    } else if src_addr % 4 == 0 {
        Granule::Word
    } else if src_addr % 2 == 0 {
        Granule::Half
    } else {
        Granule::Byte
    };

    let body = dst.len() / granule.multiple() * granule.multiple();
    trace!(bytes, head, body, ?granule, "copy: dispatch");

    let (dst_body, dst) = dst.split_at_mut(body);
    let (src_body, src) = src.split_at(body);

    match granule {
        Granule::Line32 => {
            copy32(bytemuck::cast_slice_mut(dst_body), bytemuck::cast_slice(src_body));

            // Both tails are still 8-byte aligned.
            let words = dst.len() & !7;
            let (dst_words, dst) = dst.split_at_mut(words);
            let (src_words, src) = src.split_at(words);
            copy8(bytemuck::cast_slice_mut(dst_words), bytemuck::cast_slice(src_words));
            copy1(dst, src);
        }
        Granule::Word => {
            copy4(bytemuck::cast_slice_mut(dst_body), bytemuck::cast_slice(src_body));
            copy1(dst, src);
        }
        Granule::Half => {
            copy2(bytemuck::cast_slice_mut(dst_body), bytemuck::cast_slice(src_body));
            copy1(dst, src);
        }
        _ => copy1(dst_body, src_body),
    }
}

/// Copies `src` into `dst` with the routine for `granule`, after checking
/// every precondition that routine has.
///
/// This is the checked counterpart of calling [`copy2`]..[`copy128`] on
/// reinterpreted byte buffers.
pub fn try_copy_as(granule: Granule, dst: &mut [u8], src: &[u8]) -> Result<(), TransferError> {
    check_lengths(dst.len(), src.len())?;
    check_transfer(dst.as_ptr() as usize, src.as_ptr() as usize, src.len(), granule)?;

    match granule {
        Granule::Byte => copy1(dst, src),
        Granule::Half => copy2(bytemuck::cast_slice_mut(dst), bytemuck::cast_slice(src)),
        Granule::Word => copy4(bytemuck::cast_slice_mut(dst), bytemuck::cast_slice(src)),
        Granule::Double => copy8(bytemuck::cast_slice_mut(dst), bytemuck::cast_slice(src)),
        Granule::Line32 => copy32(bytemuck::cast_slice_mut(dst), bytemuck::cast_slice(src)),
        Granule::Line64 => copy64(bytemuck::cast_slice_mut(dst), bytemuck::cast_slice(src)),
        Granule::Line128 => copy128(bytemuck::cast_slice_mut(dst), bytemuck::cast_slice(src)),
    }
    Ok(())
}

/// Byte-by-byte copy. No alignment requirements.
#[inline]
pub fn copy1(dst: &mut [u8], src: &[u8]) {
    debug_assert!(check_lengths(dst.len(), src.len()).is_ok(), "copy1: length mismatch");
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s;
    }
}

/// 16-bit word copy.
#[inline]
pub fn copy2(dst: &mut [u16], src: &[u16]) {
    debug_assert!(check_lengths(dst.len(), src.len()).is_ok(), "copy2: length mismatch");
    copy_unrolled(dst, src);
}

/// 32-bit word copy.
#[inline]
pub fn copy4(dst: &mut [u32], src: &[u32]) {
    debug_assert!(check_lengths(dst.len(), src.len()).is_ok(), "copy4: length mismatch");
    copy_unrolled(dst, src);
}

/// 64-bit word copy through paired registers.
#[inline]
pub fn copy8(dst: &mut [u64], src: &[u64]) {
    debug_assert!(check_lengths(dst.len(), src.len()).is_ok(), "copy8: length mismatch");
    copy_unrolled(dst, src);
}

/// Copies whole cache lines, one per step.
///
/// `src` must hold four words per destination line. Runs of four or more
/// lines go through the [`copy128`] loop first.
pub fn copy32(dst: &mut [CacheLine], src: &[u64]) {
    debug_assert!(
        check_lengths(dst.len() * LINE_BYTES, src.len() * 8).is_ok(),
        "copy32: {} lines but {} source words",
        dst.len(),
        src.len()
    );

    let src = as_lines(src);
    let n = dst.len().min(src.len());
    let bulk = n & !3;

    stream_lines::<4>(&mut dst[..bulk], &src[..bulk]);
    stream_lines::<1>(&mut dst[bulk..n], &src[bulk..n]);
}

/// Copies pairs of cache lines. The line count must be even.
pub fn copy64(dst: &mut [CacheLine], src: &[u64]) {
    debug_assert!(dst.len() % 2 == 0, "copy64: {} lines is not a multiple of 64 bytes", dst.len());
    debug_assert!(
        check_lengths(dst.len() * LINE_BYTES, src.len() * 8).is_ok(),
        "copy64: {} lines but {} source words",
        dst.len(),
        src.len()
    );

    let src = as_lines(src);
    let n = dst.len().min(src.len());
    let bulk = n & !3;

    stream_lines::<4>(&mut dst[..bulk], &src[..bulk]);
    stream_lines::<2>(&mut dst[bulk..n], &src[bulk..n]);
}

/// Copies runs of four cache lines. The line count must be a multiple of 4.
pub fn copy128(dst: &mut [CacheLine], src: &[u64]) {
    debug_assert!(dst.len() % 4 == 0, "copy128: {} lines is not a multiple of 128 bytes", dst.len());
    debug_assert!(
        check_lengths(dst.len() * LINE_BYTES, src.len() * 8).is_ok(),
        "copy128: {} lines but {} source words",
        dst.len(),
        src.len()
    );

    let src = as_lines(src);
    let n = dst.len().min(src.len());
    stream_lines::<4>(&mut dst[..n], &src[..n]);
}

fn copy_unrolled<T: Copy>(dst: &mut [T], src: &[T]) {
    let mut d = dst.chunks_exact_mut(UNROLL);
    let mut s = src.chunks_exact(UNROLL);

    for (db, sb) in (&mut d).zip(&mut s) {
        // Descending walk: the next block is prefetched while this one drains.
        for i in (0..UNROLL).rev() {
            db[i] = sb[i];
        }
    }

    for (dt, st) in d.into_remainder().iter_mut().zip(s.remainder()) {
        *dt = *st;
    }
}

#[inline]
fn as_lines(words: &[u64]) -> &[[u64; 4]] {
    bytemuck::cast_slice(&words[..words.len() & !3])
}

/// Loads `STEP` lines, then stores them as whole lines.
#[inline]
fn stream_lines<const STEP: usize>(dst: &mut [CacheLine], src: &[[u64; 4]]) {
    for (d, s) in dst.chunks_exact_mut(STEP).zip(src.chunks_exact(STEP)) {
        for (line, words) in d.iter_mut().zip(s) {
            *line = CacheLine(*words);
        }
    }
}
