//! VTF header constants and field offsets
#![allow(dead_code)]

/// `VTF\0`
pub const VTF_SIGNATURE: [u8; 4] = *b"VTF\0";

/// Size of the base record shared by every header version.
pub const BASE_HEADER_SIZE: usize = 16;

/// Size of the 7.0 and 7.1 records (fields end at 63, padded to 16 bytes).
pub const HEADER_V70_SIZE: usize = 64;
/// Size of the 7.2 record (fields end at 65, padded to 16 bytes).
pub const HEADER_V72_SIZE: usize = 80;
/// Size of the 7.3, 7.4 and 7.5 records.
pub const HEADER_V73_SIZE: usize = 80;
/// Size of the packed Xbox 360 and PS3 records.
pub const CONSOLE_HEADER_SIZE: usize = 60;

// Version pairs
pub const VERSION_7_0: (u32, u32) = (7, 0);
pub const VERSION_7_1: (u32, u32) = (7, 1);
pub const VERSION_7_2: (u32, u32) = (7, 2);
pub const VERSION_7_3: (u32, u32) = (7, 3);
pub const VERSION_7_4: (u32, u32) = (7, 4);
pub const VERSION_7_5: (u32, u32) = (7, 5);
pub const VERSION_X360: (u32, u32) = (0x0360, 8);
pub const VERSION_PS3: (u32, u32) = (0x0333, 8);

// Base record
pub(crate) const SIGNATURE_OFFSET: usize = 0x00;
pub(crate) const VERSION_MAJOR_OFFSET: usize = 0x04;
pub(crate) const VERSION_MINOR_OFFSET: usize = 0x08;
pub(crate) const HEADER_SIZE_OFFSET: usize = 0x0C;

// 7.0 record
pub(crate) const WIDTH_OFFSET: usize = 0x10;
pub(crate) const HEIGHT_OFFSET: usize = 0x12;
pub(crate) const FLAGS_OFFSET: usize = 0x14;
pub(crate) const FRAMES_OFFSET: usize = 0x18;
pub(crate) const START_FRAME_OFFSET: usize = 0x1A;
pub(crate) const REFLECTIVITY_OFFSET: usize = 0x20;
pub(crate) const BUMP_SCALE_OFFSET: usize = 0x30;
pub(crate) const IMAGE_FORMAT_OFFSET: usize = 0x34;
pub(crate) const MIP_COUNT_OFFSET: usize = 0x38;
pub(crate) const LOW_RES_FORMAT_OFFSET: usize = 0x39;
pub(crate) const LOW_RES_WIDTH_OFFSET: usize = 0x3D;
pub(crate) const LOW_RES_HEIGHT_OFFSET: usize = 0x3E;

// 7.2 record
pub(crate) const DEPTH_OFFSET: usize = 0x3F;

// 7.3 record
pub(crate) const NUM_RESOURCES_OFFSET: usize = 0x44;

// Console records
pub(crate) const CONSOLE_FLAGS_OFFSET: usize = 0x10;
pub(crate) const CONSOLE_WIDTH_OFFSET: usize = 0x14;
pub(crate) const CONSOLE_HEIGHT_OFFSET: usize = 0x16;
pub(crate) const CONSOLE_DEPTH_OFFSET: usize = 0x18;
pub(crate) const CONSOLE_FRAMES_OFFSET: usize = 0x1A;
pub(crate) const CONSOLE_PRELOAD_SIZE_OFFSET: usize = 0x1C;
pub(crate) const CONSOLE_MIP_SKIP_OFFSET: usize = 0x1E;
pub(crate) const CONSOLE_NUM_RESOURCES_OFFSET: usize = 0x1F;
pub(crate) const CONSOLE_REFLECTIVITY_OFFSET: usize = 0x20;
pub(crate) const CONSOLE_BUMP_SCALE_OFFSET: usize = 0x2C;
pub(crate) const CONSOLE_IMAGE_FORMAT_OFFSET: usize = 0x30;
pub(crate) const CONSOLE_LOW_RES_SAMPLE_OFFSET: usize = 0x34;
pub(crate) const CONSOLE_COMPRESSED_SIZE_OFFSET: usize = 0x38;

/// Texture flag bits stored in the header's flag field.
pub mod flags {
    pub const POINTSAMPLE: u32 = 0x0000_0001;
    pub const TRILINEAR: u32 = 0x0000_0002;
    pub const CLAMPS: u32 = 0x0000_0004;
    pub const CLAMPT: u32 = 0x0000_0008;
    pub const ANISOTROPIC: u32 = 0x0000_0010;
    pub const HINT_DXT5: u32 = 0x0000_0020;
    pub const PWL_CORRECTED: u32 = 0x0000_0040;
    pub const NORMAL: u32 = 0x0000_0080;
    pub const NOMIP: u32 = 0x0000_0100;
    pub const NOLOD: u32 = 0x0000_0200;
    pub const ALL_MIPS: u32 = 0x0000_0400;
    pub const PROCEDURAL: u32 = 0x0000_0800;
    pub const ONEBITALPHA: u32 = 0x0000_1000;
    pub const EIGHTBITALPHA: u32 = 0x0000_2000;
    /// Cubemap; the texture has 6 faces per frame.
    pub const ENVMAP: u32 = 0x0000_4000;
    pub const RENDERTARGET: u32 = 0x0000_8000;
    pub const DEPTHRENDERTARGET: u32 = 0x0001_0000;
    pub const NODEBUGOVERRIDE: u32 = 0x0002_0000;
    pub const SINGLECOPY: u32 = 0x0004_0000;
    pub const SRGB: u32 = 0x0008_0000;
    pub const DEFAULT_POOL: u32 = 0x0010_0000;
    pub const COMBINED: u32 = 0x0020_0000;
    pub const ASYNC_DOWNLOAD: u32 = 0x0040_0000;
    pub const NODEPTHBUFFER: u32 = 0x0080_0000;
    pub const SKIP_INITIAL_DOWNLOAD: u32 = 0x0100_0000;
    pub const CLAMPU: u32 = 0x0200_0000;
    pub const VERTEXTEXTURE: u32 = 0x0400_0000;
    pub const SSBUMP: u32 = 0x0800_0000;
    pub const MOST_MIPS: u32 = 0x1000_0000;
    pub const BORDER: u32 = 0x2000_0000;
    pub const YCOCG: u32 = 0x4000_0000;
    pub const ASYNC_SKIP_INITIAL_LOW_RES: u32 = 0x8000_0000;
}
