//! Addressing of individual images inside the pixel data region.
//!
//! The region is ordered from the smallest mip to the largest:
//!
//! ```text
//! for mip in (0..num_mip_levels).rev()
//!     for frame in 0..num_frames
//!         for face in 0..face_count
//!             image(frame, face, mip)
//! ```
//!
//! No header field describes this ordering. It has to match the files produced
//! by the reference tools exactly.

use crate::format::{mip_byte_size, mip_dimensions, ImageFormat};
use crate::header::VtfHeader;

/// The header fields that determine where each image sits in the pixel data region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLayout {
    pub width: u16,
    pub height: u16,
    pub depth: u16,
    pub format: ImageFormat,
    pub num_mip_levels: u8,
    pub num_frames: u16,
    pub face_count: u32,
}

impl From<&VtfHeader> for ImageLayout {
    fn from(header: &VtfHeader) -> Self {
        Self {
            width: header.width,
            height: header.height,
            depth: header.depth,
            format: header.image_format,
            num_mip_levels: header.num_mip_levels,
            num_frames: header.num_frames,
            face_count: header.face_count(),
        }
    }
}

impl ImageLayout {
    /// Dimensions of the given mip level.
    #[inline]
    pub fn mip_dimensions(&self, mip_level: u8) -> (u16, u16, u16) {
        mip_dimensions(self.width, self.height, self.depth, mip_level)
    }

    /// Byte size of one face of one frame at the given mip level.
    #[inline]
    pub fn mip_size(&self, mip_level: u8) -> u32 {
        let (width, height, depth) = self.mip_dimensions(mip_level);
        mip_byte_size(width, height, depth, self.format)
    }

    /// Byte size of every frame and face of the given mip level.
    #[inline]
    pub fn mip_region_size(&self, mip_level: u8) -> u32 {
        self.mip_size(mip_level)
            .saturating_mul(u32::from(self.num_frames))
            .saturating_mul(self.face_count)
    }

    /// Offset of the given mip level's region from the start of the pixel data.
    ///
    /// This is the combined size of all smaller mips, which are stored first.
    /// Levels at or past `num_mip_levels` are not rejected; callers must not ask for them.
    pub fn mip_offset(&self, mip_level: u8) -> u32 {
        (u32::from(mip_level) + 1..u32::from(self.num_mip_levels))
            .rev()
            .fold(0u32, |offset, mip| {
                offset.saturating_add(self.mip_region_size(mip as u8))
            })
    }

    /// Offset of a single image from the start of the pixel data.
    pub fn image_offset(&self, frame: u16, face: u16, mip_level: u8) -> u32 {
        let face_size = self.mip_size(mip_level);
        let frame_size = self.face_count.saturating_mul(face_size);

        let frame_offset = u32::from(frame).saturating_mul(frame_size);
        let face_offset = u32::from(face).saturating_mul(face_size);
        self.mip_offset(mip_level)
            .saturating_add(frame_offset)
            .saturating_add(face_offset)
    }

    /// Combined size of every mip level of a single face.
    pub fn face_size_all_mips(&self) -> u32 {
        (0..self.num_mip_levels).fold(0u32, |size, mip| size.saturating_add(self.mip_size(mip)))
    }

    /// Size of the whole pixel data region.
    #[inline]
    pub fn total_size(&self) -> u32 {
        self.face_size_all_mips()
            .saturating_mul(u32::from(self.num_frames))
            .saturating_mul(self.face_count)
    }
}
