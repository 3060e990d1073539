//! Closed form for the incremental circle-drawing loop
//!
//! ```text
//! for _ in 0..order {
//!     x += y / factor;
//!     y -= x / factor;
//! }
//! ```
//!
//! Each iteration is a fixed 2x2 linear map, so `order` iterations collapse
//! into one matrix power.

use crate::vec2::Vec2;
use crate::vec4::Vec4;

/// Row-major 2x2 product of two packed `(m00, m01, m10, m11)` matrices.
#[inline]
fn mul2(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(
        a.x * b.x + a.y * b.z,
        a.x * b.y + a.y * b.w,
        a.z * b.x + a.w * b.z,
        a.z * b.y + a.w * b.w,
    )
}

/// Matrix replacing `order` iterations of the loop, packed row-major.
///
/// Apply with `x1 = x0·m.x + y0·m.y`, `y1 = x0·m.z + y0·m.w`. Starting from
/// `(0, 1)` the result approximates `(sin θ, cos θ)` for `θ = order / factor`.
pub fn circle_matrix(order: u32, factor: f32) -> Vec4 {
    let f2 = factor * factor;
    let mut step = Vec4::new(1.0, 1.0 / factor, -1.0 / factor, (f2 - 1.0) / f2);
    let mut result = Vec4::new(1.0, 0.0, 0.0, 1.0);

    // Powers of one matrix commute, so square-and-multiply is safe.
    let mut n = order;
    while n != 0 {
        if n & 1 != 0 {
            result = mul2(result, step);
        }
        step = mul2(step, step);
        n >>= 1;
    }
    result
}

/// A precomputed circle step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleStep {
    pub matrix: Vec4,
}

impl CircleStep {
    #[inline]
    pub fn new(order: u32, factor: f32) -> Self {
        Self { matrix: circle_matrix(order, factor) }
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let m = self.matrix;
        Vec2::new(p.x * m.x + p.y * m.y, p.x * m.z + p.y * m.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looped(order: u32, factor: f32) -> Vec2 {
        let (mut x, mut y) = (0.0_f32, 1.0_f32);
        for _ in 0..order {
            x += y / factor;
            y -= x / factor;
        }
        Vec2::new(x, y)
    }

    #[test]
    fn order_zero_is_identity() {
        assert_eq!(circle_matrix(0, 10.0), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn matches_the_loop() {
        for &order in &[1u32, 2, 7, 33, 100] {
            let got = CircleStep::new(order, 16.0).apply(Vec2::new(0.0, 1.0));
            let want = looped(order, 16.0);
            assert!((got.x - want.x).abs() < 1e-3, "x mismatch at order {}", order);
            assert!((got.y - want.y).abs() < 1e-3, "y mismatch at order {}", order);
        }
    }
}
