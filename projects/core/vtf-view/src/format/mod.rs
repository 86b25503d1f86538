//! Image formats used by VTF textures, and the calculations used to size them.

/// Static per-format layout descriptors.
pub mod info;

/// Byte size and dimension calculations for mip levels.
pub mod size;

pub use info::*;
pub use size::*;

use core::fmt;

/// Identifier of the pixel format of a VTF image.
///
/// This wraps the raw signed identifier stored in the file rather than being a
/// closed enum; files may carry identifiers this crate does not know, and those
/// are kept verbatim in the parsed header.
///
/// The named constants cover the standard engine formats (`RGBA8888` through
/// `INTZ`) and the four vendor extension formats appended after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ImageFormat(pub i32);

#[allow(missing_docs)]
impl ImageFormat {
    pub const DEFAULT: Self = Self(-2);
    pub const UNKNOWN: Self = Self(-1);

    pub const RGBA8888: Self = Self(0);
    pub const ABGR8888: Self = Self(1);
    pub const RGB888: Self = Self(2);
    pub const BGR888: Self = Self(3);
    pub const RGB565: Self = Self(4);
    pub const I8: Self = Self(5);
    pub const IA88: Self = Self(6);
    pub const P8: Self = Self(7);
    pub const A8: Self = Self(8);
    pub const RGB888_BLUESCREEN: Self = Self(9);
    pub const BGR888_BLUESCREEN: Self = Self(10);
    pub const ARGB8888: Self = Self(11);
    pub const BGRA8888: Self = Self(12);
    pub const DXT1: Self = Self(13);
    pub const DXT3: Self = Self(14);
    pub const DXT5: Self = Self(15);
    pub const BGRX8888: Self = Self(16);
    pub const BGR565: Self = Self(17);
    pub const BGRX5551: Self = Self(18);
    pub const BGRA4444: Self = Self(19);
    pub const DXT1_ONEBITALPHA: Self = Self(20);
    pub const BGRA5551: Self = Self(21);
    pub const UV88: Self = Self(22);
    pub const UVWQ8888: Self = Self(23);
    pub const RGBA16161616F: Self = Self(24);
    pub const RGBA16161616: Self = Self(25);
    pub const UVLX8888: Self = Self(26);
    pub const R32F: Self = Self(27);
    pub const RGB323232F: Self = Self(28);
    pub const RGBA32323232F: Self = Self(29);
    pub const RG1616F: Self = Self(30);
    pub const RG3232F: Self = Self(31);
    pub const RGBX8888: Self = Self(32);

    pub const NV_NULL: Self = Self(33);

    pub const ATI2N: Self = Self(34);
    pub const ATI1N: Self = Self(35);

    pub const RGBA1010102: Self = Self(36);
    pub const BGRA1010102: Self = Self(37);
    pub const R16F: Self = Self(38);

    pub const D16: Self = Self(39);
    pub const D15S1: Self = Self(40);
    pub const D32: Self = Self(41);
    pub const D24S8: Self = Self(42);
    pub const LINEAR_D24S8: Self = Self(43);
    pub const D24X8: Self = Self(44);
    pub const D24X4S4: Self = Self(45);
    pub const D24FS8: Self = Self(46);
    pub const D16_SHADOW: Self = Self(47);
    pub const D24X8_SHADOW: Self = Self(48);

    pub const LINEAR_BGRX8888: Self = Self(49);
    pub const LINEAR_RGBA8888: Self = Self(50);
    pub const LINEAR_ABGR8888: Self = Self(51);
    pub const LINEAR_ARGB8888: Self = Self(52);
    pub const LINEAR_BGRA8888: Self = Self(53);
    pub const LINEAR_RGB888: Self = Self(54);
    pub const LINEAR_BGR888: Self = Self(55);
    pub const LINEAR_BGRX5551: Self = Self(56);
    pub const LINEAR_I8: Self = Self(57);
    pub const LINEAR_RGBA16161616: Self = Self(58);
    pub const LINEAR_A8: Self = Self(59);
    pub const LINEAR_DXT1: Self = Self(60);
    pub const LINEAR_DXT3: Self = Self(61);
    pub const LINEAR_DXT5: Self = Self(62);

    pub const LE_BGRX8888: Self = Self(63);
    pub const LE_BGRA8888: Self = Self(64);

    pub const DXT1_RUNTIME: Self = Self(65);
    pub const DXT5_RUNTIME: Self = Self(66);
    pub const DXT3_RUNTIME: Self = Self(67);

    pub const INTZ: Self = Self(68);

    pub const VITAMIN_BC4: Self = Self(69);
    pub const VITAMIN_BC5: Self = Self(70);
    pub const VITAMIN_BC6H: Self = Self(71);
    pub const VITAMIN_BC7: Self = Self(72);
}

impl ImageFormat {
    /// First standard engine format.
    pub const SOURCE_FORMAT_FIRST: Self = Self::RGBA8888;
    /// Last standard engine format.
    pub const SOURCE_FORMAT_LAST: Self = Self::INTZ;
    /// First vendor extension format.
    pub const VITAMIN_FORMAT_FIRST: Self = Self::VITAMIN_BC4;
    /// Last vendor extension format.
    pub const VITAMIN_FORMAT_LAST: Self = Self::VITAMIN_BC7;

    /// Returns the layout descriptor of this format, or [`None`] if the
    /// identifier has no entry in the registry (including [`ImageFormat::DEFAULT`]).
    #[inline]
    pub fn info(self) -> Option<&'static ImageFormatInfo> {
        image_format_info(self)
    }

    /// Display name from the registry, e.g. `"DXT5"`.
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        self.info().map(|info| info.name)
    }

    /// Whether the format stores 4x4 compressed blocks rather than pixels.
    #[inline]
    pub fn is_compressed(self) -> bool {
        self.info().is_some_and(|info| info.is_compressed)
    }

    /// Bytes per 4x4 block for the block-compressed formats whose layout is known.
    ///
    /// Returns [`None`] for uncompressed formats and for compressed formats
    /// outside the two known block families.
    #[inline]
    pub fn block_size(self) -> Option<u32> {
        match self {
            Self::DXT1 | Self::DXT1_RUNTIME | Self::LINEAR_DXT1 | Self::ATI1N => Some(8),
            Self::DXT3
            | Self::DXT3_RUNTIME
            | Self::DXT5
            | Self::DXT5_RUNTIME
            | Self::LINEAR_DXT3
            | Self::LINEAR_DXT5
            | Self::ATI2N => Some(16),
            _ => None,
        }
    }
}

impl From<i32> for ImageFormat {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<ImageFormat> for i32 {
    #[inline]
    fn from(value: ImageFormat) -> Self {
        value.0
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "<format {}>", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(ImageFormat::DXT1, Some(8))]
    #[case(ImageFormat::DXT1_RUNTIME, Some(8))]
    #[case(ImageFormat::LINEAR_DXT1, Some(8))]
    #[case(ImageFormat::ATI1N, Some(8))]
    #[case(ImageFormat::DXT3, Some(16))]
    #[case(ImageFormat::DXT5, Some(16))]
    #[case(ImageFormat::DXT5_RUNTIME, Some(16))]
    #[case(ImageFormat::ATI2N, Some(16))]
    #[case(ImageFormat::DXT1_ONEBITALPHA, None)]
    #[case(ImageFormat::VITAMIN_BC7, None)]
    #[case(ImageFormat::RGBA8888, None)]
    fn block_size_matches_known_families(#[case] format: ImageFormat, #[case] expected: Option<u32>) {
        assert_eq!(format.block_size(), expected);
    }

    #[test]
    fn display_uses_registry_name() {
        assert_eq!(format!("{}", ImageFormat::DXT5), "DXT5");
        assert_eq!(format!("{}", ImageFormat::UNKNOWN), "UNKNOWN");
        assert_eq!(format!("{}", ImageFormat(500)), "<format 500>");
        assert_eq!(format!("{}", ImageFormat::DEFAULT), "<format -2>");
    }

    #[test]
    fn range_markers_bound_the_named_formats() {
        assert_eq!(ImageFormat::SOURCE_FORMAT_LAST.0 + 1, ImageFormat::VITAMIN_FORMAT_FIRST.0);
        assert_eq!(ImageFormat::VITAMIN_FORMAT_LAST.0 - ImageFormat::VITAMIN_FORMAT_FIRST.0, 3);
    }
}
