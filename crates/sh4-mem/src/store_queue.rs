use tracing::trace;

use crate::check_lengths;

const QUEUE_WORDS: usize = 8;

/// The two SH4 store queues: 32-byte write-combining buffers that bypass
/// the operand cache.
///
/// Words are staged into one queue while the other drains, and a queue is
/// written out as one burst when flushed. Use it for destinations that do
/// not benefit from caching (video or sound RAM); for ordinary memory the
/// cached [`copy32`](crate::copy32) is faster.
#[derive(Clone, Debug, Default)]
pub struct StoreQueue {
    queues: [[u32; QUEUE_WORDS]; 2],
    next: usize,
    bursts: u64,
}

impl StoreQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of 32-byte bursts written out so far.
    #[inline]
    pub fn bursts(&self) -> u64 {
        self.bursts
    }

    /// Copies `src` to `dst` in 32-byte bursts, alternating queues.
    ///
    /// `dst` needs only word alignment, `src` 8-byte alignment; both are
    /// implied by the element types. The length must be a whole number of
    /// bursts.
    pub fn copy32(&mut self, dst: &mut [u32], src: &[u64]) {
        debug_assert!(dst.len() % QUEUE_WORDS == 0, "sq copy32: {} words is not a multiple of 32 bytes", dst.len());
        debug_assert!(check_lengths(dst.len() * 4, src.len() * 8).is_ok(), "sq copy32: length mismatch");

        let dst_bursts = dst.len() / QUEUE_WORDS * QUEUE_WORDS;
        let src_bursts = src.len() / 4 * 4;
        let dst: &mut [[u32; QUEUE_WORDS]] = bytemuck::cast_slice_mut(&mut dst[..dst_bursts]);
        let src: &[[u64; 4]] = bytemuck::cast_slice(&src[..src_bursts]);

        trace!(bursts = dst.len().min(src.len()), "store queue copy");
        for (d, s) in dst.iter_mut().zip(src) {
            self.burst(d, s);
        }
    }

    /// Copies exactly one 32-byte block through a single queue.
    #[inline]
    pub fn copy32_1(&mut self, dst: &mut [u32; QUEUE_WORDS], src: &[u64; 4]) {
        self.burst(dst, src);
    }

    fn burst(&mut self, dst: &mut [u32; QUEUE_WORDS], src: &[u64; 4]) {
        let q = self.next;
        self.queues[q] = bytemuck::cast(*src);
        *dst = self.queues[q];
        self.next ^= 1;
        self.bursts += 1;
    }
}
