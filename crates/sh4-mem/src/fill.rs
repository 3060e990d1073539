use tracing::trace;

use crate::{CacheLine, LINE_BYTES};

const SMALL_FILL: usize = 64;
const UNROLL: usize = 8;

/// Sets every byte of `dst` to `value`.
///
/// Same dispatch as [`copy`](crate::copy): short buffers byte-wise,
/// otherwise align the destination to a cache line, claim whole lines,
/// and finish byte-wise.
pub fn fill(dst: &mut [u8], value: u8) {
    let bytes = dst.len();
    if bytes < SMALL_FILL {
        trace!(bytes, "fill: byte path");
        fill1(dst, value);
        return;
    }

    let addr = dst.as_ptr() as usize;
    let head = ((addr + LINE_BYTES - 1) & !(LINE_BYTES - 1)) - addr;
    let (dst_head, dst) = dst.split_at_mut(head);
    fill1(dst_head, value);

    let body = dst.len() / LINE_BYTES * LINE_BYTES;
    trace!(bytes, head, body, "fill: line path");

    let (dst_body, dst_tail) = dst.split_at_mut(body);
    fill_lines(bytemuck::cast_slice_mut(dst_body), u64::from_ne_bytes([value; 8]));
    fill1(dst_tail, value);
}

#[inline]
pub fn fill1(dst: &mut [u8], value: u8) {
    for d in dst {
        *d = value;
    }
}

#[inline]
pub fn fill2(dst: &mut [u16], value: u16) {
    fill_unrolled(dst, value);
}

#[inline]
pub fn fill4(dst: &mut [u32], value: u32) {
    fill_unrolled(dst, value);
}

/// Assigns an 8-byte pattern to every word of `dst`.
#[inline]
pub fn fill8(dst: &mut [u64], value: u64) {
    fill_unrolled(dst, value);
}

/// Claims each line and writes `value` to all four of its words.
#[inline]
pub fn fill_lines(dst: &mut [CacheLine], value: u64) {
    let line = CacheLine::splat(value);
    for d in dst {
        *d = line;
    }
}

fn fill_unrolled<T: Copy>(dst: &mut [T], value: T) {
    let mut d = dst.chunks_exact_mut(UNROLL);
    for block in &mut d {
        for slot in block.iter_mut() {
            *slot = value;
        }
    }
    for slot in d.into_remainder() {
        *slot = value;
    }
}
