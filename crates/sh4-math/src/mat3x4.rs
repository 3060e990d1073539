use crate::vec4::Vec4;

/// Three 4-row columns: the rotation and scale part of a 4x4 transform
/// with the translation column left out.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x4 {
    pub left: Vec4,
    pub up: Vec4,
    pub forward: Vec4,
}

impl Mat3x4 {
    #[inline]
    pub fn from_cols(left: Vec4, up: Vec4, forward: Vec4) -> Self {
        Self { left, up, forward }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_cols(Vec4::x(), Vec4::y(), Vec4::z())
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.as_array()[col * 4 + row]
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 12] {
        bytemuck::cast_ref(self)
    }
}

impl Default for Mat3x4 {
    fn default() -> Self { Self::identity() }
}
