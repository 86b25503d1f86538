use super::ImageFormat;

/// Describes the memory layout of a single [`ImageFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFormatInfo {
    /// Display name of the format.
    pub name: &'static str,
    /// Bytes per pixel. Zero for most block-compressed formats.
    pub num_bytes: u8,
    pub num_red_bits: u8,
    pub num_green_bits: u8,
    pub num_blue_bits: u8,
    pub num_alpha_bits: u8,
    pub num_depth_bits: u8,
    pub num_stencil_bits: u8,
    /// Stored as 4x4 compressed blocks.
    pub is_compressed: bool,
    pub is_float: bool,
    pub is_depth_format: bool,
}

#[allow(clippy::too_many_arguments)]
const fn fmt(
    name: &'static str,
    num_bytes: u8,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    depth: u8,
    stencil: u8,
    is_compressed: bool,
    is_float: bool,
    is_depth_format: bool,
) -> ImageFormatInfo {
    ImageFormatInfo {
        name,
        num_bytes,
        num_red_bits: r,
        num_green_bits: g,
        num_blue_bits: b,
        num_alpha_bits: a,
        num_depth_bits: depth,
        num_stencil_bits: stencil,
        is_compressed,
        is_float,
        is_depth_format,
    }
}

/// Format registry, indexed by `format identifier + 1`.
///
/// Index 0 is [`ImageFormat::UNKNOWN`]. [`ImageFormat::DEFAULT`] (-2) has no entry.
/// The order of this table is part of the file format; do not reorder.
pub static IMAGE_FORMAT_INFOS: [ImageFormatInfo; 74] = [
    fmt("UNKNOWN", 0, 0, 0, 0, 0, 0, 0, false, false, false),
    fmt("RGBA8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("ABGR8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("RGB888", 3, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("BGR888", 3, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("RGB565", 2, 5, 6, 5, 0, 0, 0, false, false, false),
    fmt("I8", 1, 0, 0, 0, 0, 0, 0, false, false, false),
    fmt("IA88", 2, 0, 0, 0, 8, 0, 0, false, false, false),
    fmt("P8", 1, 0, 0, 0, 0, 0, 0, false, false, false),
    fmt("A8", 1, 0, 0, 0, 8, 0, 0, false, false, false),
    fmt("RGB888_BLUESCREEN", 3, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("BGR888_BLUESCREEN", 3, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("ARGB8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("BGRA8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("DXT1", 0, 0, 0, 0, 0, 0, 0, true, false, false),
    fmt("DXT3", 0, 0, 0, 0, 8, 0, 0, true, false, false),
    fmt("DXT5", 0, 0, 0, 0, 8, 0, 0, true, false, false),
    fmt("BGRX8888", 4, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("BGR565", 2, 5, 6, 5, 0, 0, 0, false, false, false),
    fmt("BGRX5551", 2, 5, 5, 5, 0, 0, 0, false, false, false),
    fmt("BGRA4444", 2, 4, 4, 4, 4, 0, 0, false, false, false),
    fmt("DXT1_ONEBITALPHA", 0, 0, 0, 0, 0, 0, 0, true, false, false),
    fmt("BGRA5551", 2, 5, 5, 5, 1, 0, 0, false, false, false),
    fmt("UV88", 2, 8, 8, 0, 0, 0, 0, false, false, false),
    fmt("UVWQ8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("RGBA16161616F", 8, 16, 16, 16, 16, 0, 0, false, true, false),
    fmt("RGBA16161616", 8, 16, 16, 16, 16, 0, 0, false, false, false),
    fmt("UVLX8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("R32F", 4, 32, 0, 0, 0, 0, 0, false, true, false),
    fmt("RGB323232F", 12, 32, 32, 32, 0, 0, 0, false, true, false),
    fmt("RGBA32323232F", 16, 32, 32, 32, 32, 0, 0, false, true, false),
    fmt("RG1616F", 4, 16, 16, 0, 0, 0, 0, false, true, false),
    fmt("RG3232F", 8, 32, 32, 0, 0, 0, 0, false, true, false),
    fmt("RGBX8888", 4, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("NV_NULL", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    // Vendor normal map compression
    fmt("ATI2N", 0, 0, 0, 0, 0, 0, 0, true, false, false),
    fmt("ATI1N", 0, 0, 0, 0, 0, 0, 0, true, false, false),
    fmt("RGBA1010102", 4, 10, 10, 10, 2, 0, 0, false, false, false),
    fmt("BGRA1010102", 4, 10, 10, 10, 2, 0, 0, false, false, false),
    fmt("R16F", 2, 16, 0, 0, 0, 0, 0, false, false, false),
    // Vendor shadow depth formats
    fmt("D16", 2, 0, 0, 0, 0, 16, 0, false, false, true),
    fmt("D15S1", 2, 0, 0, 0, 0, 15, 1, false, false, true),
    fmt("D32", 4, 0, 0, 0, 0, 32, 0, false, false, true),
    fmt("D24S8", 4, 0, 0, 0, 0, 24, 8, false, false, true),
    fmt("LINEAR_D24S8", 4, 0, 0, 0, 0, 24, 8, false, false, true),
    fmt("D24X8", 4, 0, 0, 0, 0, 24, 0, false, false, true),
    fmt("D24X4S4", 4, 0, 0, 0, 0, 24, 4, false, false, true),
    fmt("D24FS8", 4, 0, 0, 0, 0, 24, 8, false, false, true),
    fmt("D16_SHADOW", 2, 0, 0, 0, 0, 16, 0, false, false, true),
    fmt("D24X8_SHADOW", 4, 0, 0, 0, 0, 24, 0, false, false, true),
    fmt("LINEAR_BGRX8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("LINEAR_RGBA8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("LINEAR_ABGR8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("LINEAR_ARGB8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("LINEAR_BGRA8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("LINEAR_RGB888", 3, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("LINEAR_BGR888", 3, 8, 8, 8, 0, 0, 0, false, false, false),
    fmt("LINEAR_BGRX5551", 2, 5, 5, 5, 0, 0, 0, false, false, false),
    fmt("LINEAR_I8", 1, 0, 0, 0, 0, 0, 0, false, false, false),
    fmt("LINEAR_RGBA16161616", 8, 16, 16, 16, 16, 0, 0, false, false, false),
    fmt("LINEAR_A8", 1, 0, 0, 0, 8, 0, 0, false, false, false),
    fmt("LINEAR_DXT1", 0, 0, 0, 0, 0, 0, 0, true, false, false),
    fmt("LINEAR_DXT3", 0, 0, 0, 0, 8, 0, 0, true, false, false),
    fmt("LINEAR_DXT5", 0, 0, 0, 0, 8, 0, 0, true, false, false),
    fmt("LE_BGRX8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("LE_BGRA8888", 4, 8, 8, 8, 8, 0, 0, false, false, false),
    fmt("DXT1_RUNTIME", 0, 0, 0, 0, 0, 0, 0, true, false, false),
    fmt("DXT5_RUNTIME", 0, 0, 0, 0, 8, 0, 0, true, false, false),
    fmt("DXT3_RUNTIME", 0, 0, 0, 0, 8, 0, 0, true, false, false),
    // Vendor depth format used for resolving
    fmt("INTZ", 4, 0, 0, 0, 0, 24, 8, false, false, true),
    // Vendor extension formats, no D3D9 equivalent
    fmt("VITAMIN_BC4", 8, 0, 0, 0, 0, 0, 0, true, false, false),
    fmt("VITAMIN_BC5", 8, 8, 0, 0, 0, 0, 0, true, false, false),
    fmt("VITAMIN_BC6H", 8, 0, 0, 0, 0, 0, 0, true, true, false),
    fmt("VITAMIN_BC7", 8, 8, 8, 8, 0, 0, 0, true, false, false),
];

/// Looks up the descriptor of `format`.
///
/// # Return
///
/// [`None`] if `format + 1` falls outside [`IMAGE_FORMAT_INFOS`].
#[inline]
pub fn image_format_info(format: ImageFormat) -> Option<&'static ImageFormatInfo> {
    let index = usize::try_from(i64::from(format.0) + 1).ok()?;
    IMAGE_FORMAT_INFOS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(ImageFormat::UNKNOWN, "UNKNOWN")]
    #[case(ImageFormat::RGBA8888, "RGBA8888")]
    #[case(ImageFormat::DXT1, "DXT1")]
    #[case(ImageFormat::RGBX8888, "RGBX8888")]
    #[case(ImageFormat::ATI2N, "ATI2N")]
    #[case(ImageFormat::ATI1N, "ATI1N")]
    #[case(ImageFormat::D16, "D16")]
    #[case(ImageFormat::LINEAR_DXT5, "LINEAR_DXT5")]
    #[case(ImageFormat::INTZ, "INTZ")]
    #[case(ImageFormat::VITAMIN_BC4, "VITAMIN_BC4")]
    #[case(ImageFormat::VITAMIN_BC7, "VITAMIN_BC7")]
    fn lookup_is_offset_by_one(#[case] format: ImageFormat, #[case] name: &str) {
        assert_eq!(image_format_info(format).unwrap().name, name);
    }

    #[rstest]
    #[case(ImageFormat::DEFAULT)]
    #[case(ImageFormat(-3))]
    #[case(ImageFormat(i32::MIN))]
    #[case(ImageFormat(73))]
    #[case(ImageFormat(i32::MAX))]
    fn lookup_out_of_table_returns_none(#[case] format: ImageFormat) {
        assert!(image_format_info(format).is_none());
    }

    #[test]
    fn every_named_format_has_an_entry() {
        for id in ImageFormat::SOURCE_FORMAT_FIRST.0..=ImageFormat::VITAMIN_FORMAT_LAST.0 {
            assert!(image_format_info(ImageFormat(id)).is_some(), "format {id}");
        }
    }

    #[test]
    fn depth_formats_have_depth_bits() {
        for info in IMAGE_FORMAT_INFOS.iter().filter(|x| x.is_depth_format) {
            assert!(info.num_depth_bits > 0, "{}", info.name);
        }
    }

    #[test]
    fn uncompressed_formats_have_pixel_sizes() {
        for info in IMAGE_FORMAT_INFOS.iter().skip(1).filter(|x| !x.is_compressed) {
            assert!(info.num_bytes > 0, "{}", info.name);
        }
    }
}
