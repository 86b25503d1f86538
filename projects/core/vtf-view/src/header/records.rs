//! On-disk header records of each VTF version and their promotion into [`VtfHeader`].
//!
//! Every desktop version is a strict superset of the previous one, so each
//! record embeds its predecessor and adds the fields its version introduced:
//!
//! | Record | Versions | Adds |
//! |--------|----------|------|
//! | [`HeaderV70`] | 7.0, 7.1 | base layout |
//! | [`HeaderV72`] | 7.2 | `depth` |
//! | [`HeaderV73`] | 7.3, 7.4, 7.5 | `num_resources` |
//!
//! Promotion runs `HeaderV70 -> HeaderV72 -> HeaderV73 -> VtfHeader`, filling each
//! introduced field with its documented default.

use super::constants::*;
use crate::error::{VtfError, VtfResult};
use crate::format::ImageFormat;

/// Default depth of textures written before 7.2.
pub const DEFAULT_DEPTH: u16 = 1;
/// Default resource count of textures written before 7.3.
pub const DEFAULT_NUM_RESOURCES: u32 = 0;

/// The record shared by every version: signature, version and header size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseHeader {
    pub signature: [u8; 4],
    /// `[major, minor]`
    pub version: [u32; 2],
    /// Size of the header in bytes, including the resource table (7.3+).
    pub header_size: u32,
}

/// Header record of versions 7.0 and 7.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderV70 {
    pub base: BaseHeader,
    pub width: u16,
    pub height: u16,
    pub flags: u32,
    pub num_frames: u16,
    pub start_frame: u16,
    pub reflectivity: [f32; 3],
    pub bump_scale: f32,
    pub image_format: ImageFormat,
    pub num_mip_levels: u8,
    pub low_res_image_format: ImageFormat,
    pub low_res_image_width: u8,
    pub low_res_image_height: u8,
}

/// Header record of version 7.2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderV72 {
    pub v7_0: HeaderV70,
    pub depth: u16,
}

/// Header record of versions 7.3 to 7.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderV73 {
    pub v7_2: HeaderV72,
    pub num_resources: u32,
}

/// Header record of the Xbox 360 and PS3 variants.
///
/// These use a different, packed layout and a compressed payload. They are
/// parsed for inspection, but cannot be promoted into a [`VtfHeader`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsoleHeader {
    pub base: BaseHeader,
    pub flags: u32,
    pub width: u16,
    pub height: u16,
    pub depth: u16,
    pub num_frames: u16,
    pub preload_data_size: u16,
    pub mip_skip_count: u8,
    pub num_resources: u8,
    pub reflectivity: [f32; 3],
    pub bump_scale: f32,
    pub image_format: ImageFormat,
    pub low_res_image_sample: [u8; 4],
    pub compressed_size: u32,
}

/// A header as it was stored on disk, tagged with its version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderRecord {
    V7_0(HeaderV70),
    V7_1(HeaderV70),
    V7_2(HeaderV72),
    V7_3(HeaderV73),
    V7_4(HeaderV73),
    V7_5(HeaderV73),
    X360(ConsoleHeader),
    Ps3(ConsoleHeader),
}

impl HeaderRecord {
    /// The base record of this header.
    pub fn base(&self) -> &BaseHeader {
        match self {
            Self::V7_0(h) | Self::V7_1(h) => &h.base,
            Self::V7_2(h) => &h.v7_0.base,
            Self::V7_3(h) | Self::V7_4(h) | Self::V7_5(h) => &h.v7_2.v7_0.base,
            Self::X360(h) | Self::Ps3(h) => &h.base,
        }
    }

    /// Promotes this record into the canonical [`VtfHeader`].
    ///
    /// # Errors
    ///
    /// [`VtfError::UnsupportedVersion`] for the console records, which do not
    /// share the desktop layout.
    pub fn into_canonical(self) -> VtfResult<VtfHeader> {
        match self {
            Self::V7_0(h) | Self::V7_1(h) => Ok(HeaderV73::from(HeaderV72::from(h)).into()),
            Self::V7_2(h) => Ok(HeaderV73::from(h).into()),
            Self::V7_3(h) | Self::V7_4(h) | Self::V7_5(h) => Ok(h.into()),
            Self::X360(h) | Self::Ps3(h) => Err(VtfError::UnsupportedVersion {
                major: h.base.version[0],
                minor: h.base.version[1],
            }),
        }
    }
}

impl From<HeaderV70> for HeaderV72 {
    fn from(v7_0: HeaderV70) -> Self {
        Self {
            v7_0,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl From<HeaderV72> for HeaderV73 {
    fn from(v7_2: HeaderV72) -> Self {
        Self {
            v7_2,
            num_resources: DEFAULT_NUM_RESOURCES,
        }
    }
}

/// The canonical header: every field of every desktop version.
///
/// Fields introduced after the version stored in the file carry their
/// defaults ([`DEFAULT_DEPTH`], [`DEFAULT_NUM_RESOURCES`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VtfHeader {
    pub signature: [u8; 4],
    /// `[major, minor]` as stored in the file.
    pub version: [u32; 2],
    pub header_size: u32,
    pub width: u16,
    pub height: u16,
    pub flags: u32,
    pub num_frames: u16,
    pub start_frame: u16,
    pub reflectivity: [f32; 3],
    pub bump_scale: f32,
    pub image_format: ImageFormat,
    pub num_mip_levels: u8,
    pub low_res_image_format: ImageFormat,
    pub low_res_image_width: u8,
    pub low_res_image_height: u8,
    pub depth: u16,
    pub num_resources: u32,
}

impl From<HeaderV73> for VtfHeader {
    fn from(h: HeaderV73) -> Self {
        let v7_0 = h.v7_2.v7_0;
        Self {
            signature: v7_0.base.signature,
            version: v7_0.base.version,
            header_size: v7_0.base.header_size,
            width: v7_0.width,
            height: v7_0.height,
            flags: v7_0.flags,
            num_frames: v7_0.num_frames,
            start_frame: v7_0.start_frame,
            reflectivity: v7_0.reflectivity,
            bump_scale: v7_0.bump_scale,
            image_format: v7_0.image_format,
            num_mip_levels: v7_0.num_mip_levels,
            low_res_image_format: v7_0.low_res_image_format,
            low_res_image_width: v7_0.low_res_image_width,
            low_res_image_height: v7_0.low_res_image_height,
            depth: h.v7_2.depth,
            num_resources: h.num_resources,
        }
    }
}

impl VtfHeader {
    /// Whether all bits of `flag` (see [`flags`]) are set.
    #[inline]
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag == flag
    }

    /// Number of faces per frame: 6 for cubemaps ([`flags::ENVMAP`]), otherwise 1.
    #[inline]
    pub fn face_count(&self) -> u32 {
        if self.has_flag(flags::ENVMAP) {
            6
        } else {
            1
        }
    }

    /// Whether the header stores a resource table (7.3+ with at least one entry).
    #[inline]
    pub fn has_resources(&self) -> bool {
        self.num_resources != 0
    }

    /// Byte size of the low resolution thumbnail; 0 if it has no area.
    #[inline]
    pub fn low_res_image_size(&self) -> u32 {
        if self.low_res_image_width == 0 || self.low_res_image_height == 0 {
            return 0;
        }

        crate::format::mip_byte_size(
            u16::from(self.low_res_image_width),
            u16::from(self.low_res_image_height),
            1,
            self.low_res_image_format,
        )
    }
}
