use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// Four 3-row columns: an affine transform with the constant bottom row
/// `(0, 0, 0, 1)` left implicit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4x3 {
    pub left: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    pub pos: Vec3,
}

impl Mat4x3 {
    #[inline]
    pub fn from_cols(left: Vec3, up: Vec3, forward: Vec3, pos: Vec3) -> Self {
        Self { left, up, forward, pos }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_cols(Vec3::x(), Vec3::y(), Vec3::z(), Vec3::zero())
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.as_array()[col * 3 + row]
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 12] {
        bytemuck::cast_ref(self)
    }

    /// Transforms a point through the implied 4x4.
    #[inline]
    pub fn trans_point3(&self, p: Vec3) -> Vec3 {
        self.left * p.x + self.up * p.y + self.forward * p.z + self.pos
    }

    /// The full 4x4 column `index`, bottom row restored.
    #[inline]
    pub fn col4(&self, index: usize) -> Vec4 {
        match index {
            0 => self.left.extend(0.0),
            1 => self.up.extend(0.0),
            2 => self.forward.extend(0.0),
            _ => self.pos.extend(1.0),
        }
    }
}

impl Default for Mat4x3 {
    fn default() -> Self { Self::identity() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implied_bottom_row() {
        let m = Mat4x3::from_cols(Vec3::x(), Vec3::y(), Vec3::z(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.trans_point3(Vec3::splat(1.0)), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.col4(3), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m.get(1, 3), 2.0);
    }
}
