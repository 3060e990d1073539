//! Software forms of the SH4 bit-shuffling instructions used by the
//! transfer routines.

/// `XTRCT`: the middle 32 bits of the 64-bit concatenation `b:a`.
#[inline]
pub const fn xtrct(a: u32, b: u32) -> u32 {
    (b << 16) | (a >> 16)
}

/// `CMP/STR`: true when any byte lane of `a` equals the same lane of `b`.
#[inline]
pub const fn cmp_str(a: u32, b: u32) -> bool {
    let x = a ^ b;
    (x & 0xff00_0000) == 0
        || (x & 0x00ff_0000) == 0
        || (x & 0x0000_ff00) == 0
        || (x & 0x0000_00ff) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtrct_takes_middle_halves() {
        assert_eq!(xtrct(0xaaaa_bbbb, 0xcccc_dddd), 0xdddd_aaaa);
    }

    #[test]
    fn cmp_str_lanes() {
        assert!(cmp_str(0x1122_3344, 0x5566_3388));
        assert!(!cmp_str(0x1122_3344, 0x2211_4433));
        assert!(cmp_str(0, 0));
    }
}
