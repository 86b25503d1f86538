//! Common test imports and utilities for VTF tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::error::*;
pub use crate::format::*;
pub use crate::header::constants::*;
pub use crate::header::*;
pub use crate::layout::*;
pub use crate::resources::*;

use endian_writer::{EndianWriter, LittleEndianWriter};

/// Bytes `offset..offset + len` of the pixel data region written by [`VtfBuilder`].
pub fn image_pattern(offset: usize, len: usize) -> Vec<u8> {
    (offset..offset + len).map(|x| (x % 251) as u8).collect()
}

/// Thumbnail bytes written by [`VtfBuilder`].
pub fn thumbnail_pattern(len: usize) -> Vec<u8> {
    (0..len).map(|x| 0xFF - (x % 256) as u8).collect()
}

enum BuilderResource {
    Inline(ResourceType, [u8; 4]),
    Data(ResourceType, Vec<u8>),
    Offset(ResourceType, u32),
    Thumbnail,
    Image,
}

/// Writes VTF files for tests.
///
/// Files before 7.3 get the thumbnail and the pixel data appended after the header.
/// Files from 7.3 on only carry what their resources describe; offset resources
/// have their data placed after the header in declaration order.
pub struct VtfBuilder {
    version: (u32, u32),
    width: u16,
    height: u16,
    depth: u16,
    flags: u32,
    num_frames: u16,
    start_frame: u16,
    reflectivity: [f32; 3],
    bump_scale: f32,
    format: ImageFormat,
    num_mip_levels: u8,
    low_res_format: ImageFormat,
    low_res_width: u8,
    low_res_height: u8,
    resources: Vec<BuilderResource>,
}

impl VtfBuilder {
    /// A 1x1 RGBA8888 texture with a single mip, frame and face and no thumbnail.
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            version: (major, minor),
            width: 1,
            height: 1,
            depth: 1,
            flags: 0,
            num_frames: 1,
            start_frame: 0,
            reflectivity: [0.0; 3],
            bump_scale: 1.0,
            format: ImageFormat::RGBA8888,
            num_mip_levels: 1,
            low_res_format: ImageFormat::UNKNOWN,
            low_res_width: 0,
            low_res_height: 0,
            resources: Vec::new(),
        }
    }

    pub fn dimensions(mut self, width: u16, height: u16, depth: u16) -> Self {
        self.width = width;
        self.height = height;
        self.depth = depth;
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn frames(mut self, num_frames: u16) -> Self {
        self.num_frames = num_frames;
        self
    }

    pub fn start_frame(mut self, start_frame: u16) -> Self {
        self.start_frame = start_frame;
        self
    }

    pub fn reflectivity(mut self, reflectivity: [f32; 3]) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    pub fn bump_scale(mut self, bump_scale: f32) -> Self {
        self.bump_scale = bump_scale;
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn mip_count(mut self, num_mip_levels: u8) -> Self {
        self.num_mip_levels = num_mip_levels;
        self
    }

    pub fn low_res(mut self, format: ImageFormat, width: u8, height: u8) -> Self {
        self.low_res_format = format;
        self.low_res_width = width;
        self.low_res_height = height;
        self
    }

    /// Adds a resource whose 4 byte value is stored in the descriptor.
    pub fn resource_inline(mut self, ty: ResourceType, value: [u8; 4]) -> Self {
        self.resources.push(BuilderResource::Inline(ty, value));
        self
    }

    /// Adds a resource whose data is placed after the header.
    pub fn resource_data(mut self, ty: ResourceType, data: Vec<u8>) -> Self {
        self.resources.push(BuilderResource::Data(ty, data));
        self
    }

    /// Adds a resource pointing at an arbitrary offset.
    pub fn resource_offset(mut self, ty: ResourceType, offset: u32) -> Self {
        self.resources.push(BuilderResource::Offset(ty, offset));
        self
    }

    /// Adds the thumbnail and pixel data resources, in that order.
    pub fn legacy_image_resources(mut self) -> Self {
        self.resources.push(BuilderResource::Thumbnail);
        self.resources.push(BuilderResource::Image);
        self
    }

    fn has_resource_table(&self) -> bool {
        self.version.0 == 7 && self.version.1 >= 3 || self.version.0 > 7
    }

    fn record_size(&self) -> usize {
        match self.version {
            (7, 0) | (7, 1) => HEADER_V70_SIZE,
            _ => HEADER_V73_SIZE,
        }
    }

    fn thumbnail_size(&self) -> usize {
        if self.low_res_width == 0 || self.low_res_height == 0 {
            return 0;
        }
        mip_byte_size(
            u16::from(self.low_res_width),
            u16::from(self.low_res_height),
            1,
            self.low_res_format,
        ) as usize
    }

    fn image_size(&self) -> usize {
        ImageLayout {
            width: self.width,
            height: self.height,
            depth: self.depth,
            format: self.format,
            num_mip_levels: self.num_mip_levels,
            num_frames: self.num_frames,
            face_count: if self.flags & flags::ENVMAP != 0 { 6 } else { 1 },
        }
        .total_size() as usize
    }

    pub fn build(self) -> Vec<u8> {
        let record_size = self.record_size();
        let has_table = self.has_resource_table();
        let num_resources = if has_table { self.resources.len() } else { 0 };
        let header_size = record_size + num_resources * RESOURCE_ENTRY_SIZE;

        let mut data = vec![0u8; header_size];
        data[SIGNATURE_OFFSET..SIGNATURE_OFFSET + 4].copy_from_slice(&VTF_SIGNATURE);
        data[WIDTH_OFFSET..WIDTH_OFFSET + 2].copy_from_slice(&self.width.to_le_bytes());
        data[HEIGHT_OFFSET..HEIGHT_OFFSET + 2].copy_from_slice(&self.height.to_le_bytes());
        data[FRAMES_OFFSET..FRAMES_OFFSET + 2].copy_from_slice(&self.num_frames.to_le_bytes());
        data[START_FRAME_OFFSET..START_FRAME_OFFSET + 2]
            .copy_from_slice(&self.start_frame.to_le_bytes());
        for (x, value) in self.reflectivity.iter().enumerate() {
            let offset = REFLECTIVITY_OFFSET + x * 4;
            data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        }
        data[BUMP_SCALE_OFFSET..BUMP_SCALE_OFFSET + 4]
            .copy_from_slice(&self.bump_scale.to_le_bytes());
        data[MIP_COUNT_OFFSET] = self.num_mip_levels;
        data[LOW_RES_FORMAT_OFFSET..LOW_RES_FORMAT_OFFSET + 4]
            .copy_from_slice(&self.low_res_format.0.to_le_bytes());
        data[LOW_RES_WIDTH_OFFSET] = self.low_res_width;
        data[LOW_RES_HEIGHT_OFFSET] = self.low_res_height;
        if self.version >= VERSION_7_2 {
            data[DEPTH_OFFSET..DEPTH_OFFSET + 2].copy_from_slice(&self.depth.to_le_bytes());
        }

        // SAFETY: Every offset written below lies within the record, which `data` covers.
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe {
            writer.write_u32_at(self.version.0, VERSION_MAJOR_OFFSET as isize);
            writer.write_u32_at(self.version.1, VERSION_MINOR_OFFSET as isize);
            writer.write_u32_at(header_size as u32, HEADER_SIZE_OFFSET as isize);
            writer.write_u32_at(self.flags, FLAGS_OFFSET as isize);
            writer.write_u32_at(self.format.0 as u32, IMAGE_FORMAT_OFFSET as isize);
            if self.version >= VERSION_7_3 {
                writer.write_u32_at(num_resources as u32, NUM_RESOURCES_OFFSET as isize);
            }
        }

        let thumbnail = thumbnail_pattern(self.thumbnail_size());
        let image = image_pattern(0, self.image_size());
        if !has_table {
            data.extend_from_slice(&thumbnail);
            data.extend_from_slice(&image);
            return data;
        }

        for (index, resource) in self.resources.iter().enumerate() {
            let (ty, flags, value) = match resource {
                BuilderResource::Inline(ty, value) => {
                    (*ty, RESOURCE_FLAG_NO_DATA_CHUNK, u32::from_le_bytes(*value))
                }
                BuilderResource::Offset(ty, offset) => (*ty, 0, *offset),
                BuilderResource::Data(ty, bytes) => {
                    let offset = data.len() as u32;
                    data.extend_from_slice(bytes);
                    (*ty, 0, offset)
                }
                BuilderResource::Thumbnail => {
                    let offset = data.len() as u32;
                    data.extend_from_slice(&thumbnail);
                    (ResourceType::LegacyLowResImage, 0, offset)
                }
                BuilderResource::Image => {
                    let offset = data.len() as u32;
                    data.extend_from_slice(&image);
                    (ResourceType::LegacyImage, 0, offset)
                }
            };

            let entry = record_size + index * RESOURCE_ENTRY_SIZE;
            let info = ty.tag() | (u32::from(flags) << 24);
            data[entry..entry + 4].copy_from_slice(&info.to_le_bytes());
            data[entry + 4..entry + 8].copy_from_slice(&value.to_le_bytes());
        }

        data
    }
}
