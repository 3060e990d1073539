//! Shared helpers for sh4-math benchmarks: seeded RNG, input generators.

use sh4_math::{Mat4x4, Quat, Vec3, Vec4};

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        ((self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0) as f32
    }

    pub fn byte(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

pub fn random_vec3(n: usize) -> Vec<Vec3> {
    let mut rng = make_rng();
    (0..n).map(|_| Vec3::new(rng.f32(), rng.f32(), rng.f32())).collect()
}

pub fn random_vec4(n: usize) -> Vec<Vec4> {
    let mut rng = make_rng();
    (0..n).map(|_| Vec4::new(rng.f32(), rng.f32(), rng.f32(), 1.0)).collect()
}

pub fn random_mat4(n: usize) -> Vec<Mat4x4> {
    random_f32_mat4s(n).into_iter().map(Mat4x4::from_array).collect()
}

pub fn random_quat(n: usize) -> Vec<Quat> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Quat::new(rng.f32(), rng.f32(), rng.f32(), rng.f32()).normalize_safe())
        .collect()
}

/// Angles in `[-π, π]`.
pub fn random_angles(n: usize) -> Vec<f32> {
    let mut rng = make_rng();
    (0..n).map(|_| rng.f32() * core::f32::consts::PI).collect()
}

// --- raw data for the glam side ---

pub fn random_f32_mat4s(n: usize) -> Vec<[f32; 16]> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let mut m = [0.0f32; 16];
            for v in &mut m {
                *v = rng.f32();
            }
            m
        })
        .collect()
}

pub fn random_bytes(n: usize) -> Vec<u8> {
    let mut rng = make_rng();
    (0..n).map(|_| rng.byte()).collect()
}
