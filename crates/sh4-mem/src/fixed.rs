//! Routines for statically sized buffers.

/// Copies 16 halfwords.
#[inline]
pub fn copy2_16(dst: &mut [u16; 16], src: &[u16; 16]) {
    // Two 8-halfword bursts.
    let (dlo, dhi) = dst.split_at_mut(8);
    let (slo, shi) = src.split_at(8);
    for (d, s) in dlo.iter_mut().zip(slo).chain(dhi.iter_mut().zip(shi)) {
        *d = *s;
    }
}

/// Sets 16 halfwords to `value`.
#[inline]
pub fn fill2_16(dst: &mut [u16; 16], value: u16) {
    *dst = [value; 16];
}

/// Copies 16 words, one 64-byte block.
#[inline]
pub fn copy4_16(dst: &mut [u32; 16], src: &[u32; 16]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        d[0] = s[0];
        d[1] = s[1];
        d[2] = s[2];
        d[3] = s[3];
    }
}

/// Exchanges the contents of two 32-byte buffers.
///
/// Each side is held in paired registers while the other is written, so
/// no third buffer is needed.
#[inline]
pub fn swap32(a: &mut [u64; 4], b: &mut [u64; 4]) {
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let held = *x;
        *x = *y;
        *y = held;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_copies() {
        let src: [u16; 16] = core::array::from_fn(|i| i as u16 * 3);
        let mut dst = [0u16; 16];
        copy2_16(&mut dst, &src);
        assert_eq!(dst, src);

        let src: [u32; 16] = core::array::from_fn(|i| 0x1000_0000 + i as u32);
        let mut dst = [0u32; 16];
        copy4_16(&mut dst, &src);
        assert_eq!(dst, src);
    }

    #[test]
    fn fill_and_swap() {
        let mut h = [0u16; 16];
        fill2_16(&mut h, 0x7fff);
        assert!(h.iter().all(|&v| v == 0x7fff));

        let mut a = [1, 2, 3, 4];
        let mut b = [5, 6, 7, 8];
        swap32(&mut a, &mut b);
        assert_eq!(a, [5, 6, 7, 8]);
        assert_eq!(b, [1, 2, 3, 4]);
    }
}
