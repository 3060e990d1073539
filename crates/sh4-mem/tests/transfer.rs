//! Block transfer against a byte-by-byte reference across sizes and
//! alignments.

use sh4_mem::{copy, fill, try_copy_as, CacheLine, Granule, StoreQueue, TransferError};

const SIZES: [usize; 6] = [1, 31, 32, 127, 128, 1024];

/// Offsets from a 32-byte aligned base giving 1/2/4/8/32-byte alignment.
const OFFSETS: [usize; 5] = [1, 2, 4, 8, 0];

fn aligned_buffer(bytes: usize) -> Vec<CacheLine> {
    vec![CacheLine::default(); bytes / 32 + 2]
}

fn reference_copy(dst: &mut [u8], src: &[u8]) {
    for i in 0..src.len() {
        dst[i] = src[i];
    }
}

#[test]
fn copy_matches_bytewise_reference() {
    for &n in &SIZES {
        for &src_off in &OFFSETS {
            for &dst_off in &OFFSETS {
                let mut src_store = aligned_buffer(n);
                let src_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut src_store);
                for (i, b) in src_bytes.iter_mut().enumerate() {
                    *b = (i as u8).wrapping_mul(31).wrapping_add(7);
                }
                let src = &src_bytes[src_off..src_off + n];

                let mut got_store = aligned_buffer(n);
                let mut want_store = aligned_buffer(n);
                let got: &mut [u8] = bytemuck::cast_slice_mut(&mut got_store);
                let want: &mut [u8] = bytemuck::cast_slice_mut(&mut want_store);

                copy(&mut got[dst_off..dst_off + n], src);
                reference_copy(&mut want[dst_off..dst_off + n], src);

                assert_eq!(got, want, "mismatch for {} bytes, src offset {}, dst offset {}", n, src_off, dst_off);
            }
        }
    }
}

#[test]
fn fill_matches_reference() {
    for &n in &SIZES {
        for &off in &OFFSETS {
            let mut store = aligned_buffer(n);
            let buf: &mut [u8] = bytemuck::cast_slice_mut(&mut store);
            fill(&mut buf[off..off + n], 0x5a);
            for (i, &b) in buf.iter().enumerate() {
                let inside = i >= off && i < off + n;
                assert_eq!(b, if inside { 0x5a } else { 0 }, "byte {} for {} bytes at offset {}", i, n, off);
            }
        }
    }
}

#[test]
fn checked_copy_by_granule() {
    let n = 256;
    let mut src_store = aligned_buffer(n);
    let src: &mut [u8] = bytemuck::cast_slice_mut(&mut src_store);
    for (i, b) in src.iter_mut().enumerate() {
        *b = i as u8;
    }

    for granule in [
        Granule::Byte,
        Granule::Half,
        Granule::Word,
        Granule::Double,
        Granule::Line32,
        Granule::Line64,
        Granule::Line128,
    ] {
        let mut dst_store = aligned_buffer(n);
        let dst: &mut [u8] = bytemuck::cast_slice_mut(&mut dst_store);
        try_copy_as(granule, &mut dst[..n], &src[..n]).expect("aligned copy");
        assert_eq!(&dst[..n], &src[..n], "granule {:?}", granule);
    }
}

#[test]
fn checked_copy_rejects_bad_source() {
    let src_store = aligned_buffer(64);
    let mut dst_store = aligned_buffer(64);
    let src: &[u8] = bytemuck::cast_slice(&src_store[..]);
    let dst: &mut [u8] = bytemuck::cast_slice_mut(&mut dst_store);

    let err = try_copy_as(Granule::Line32, &mut dst[..32], &src[4..36]).unwrap_err();
    assert!(matches!(err, TransferError::SrcAlign { required: 8, .. }));

    let err = try_copy_as(Granule::Word, &mut dst[..8], &src[..12]).unwrap_err();
    assert_eq!(err, TransferError::LengthMismatch { dst: 8, src: 12 });
}

#[test]
fn store_queue_matches_cached_copy() {
    let src: Vec<u64> = (0..64u64).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).collect();

    let mut via_queue = vec![0u32; 128];
    let mut sq = StoreQueue::new();
    sq.copy32(&mut via_queue, &src);

    let mut via_cache = vec![CacheLine::default(); 16];
    sh4_mem::copy32(&mut via_cache, &src);

    assert_eq!(
        bytemuck::cast_slice::<u32, u8>(&via_queue),
        bytemuck::cast_slice::<CacheLine, u8>(&via_cache)
    );
    assert_eq!(sq.bursts(), 16);
}
