use super::ImageFormat;

/// Calculates the dimensions of a mip level.
///
/// Each axis is halved per level with a floor of 1 texel. The level is not
/// checked against any mip count; levels past the end of the chain give `(1, 1, 1)`.
#[inline]
pub fn mip_dimensions(width: u16, height: u16, depth: u16, mip_level: u8) -> (u16, u16, u16) {
    (
        shift_mip(width, mip_level),
        shift_mip(height, mip_level),
        shift_mip(depth, mip_level),
    )
}

#[inline(always)]
fn shift_mip(dimension: u16, mip_level: u8) -> u16 {
    dimension
        .checked_shr(u32::from(mip_level))
        .unwrap_or(0)
        .max(1)
}

/// Calculates the number of bytes a single image of the given dimensions
/// occupies in `format`.
///
/// # Return
///
/// `0` if any dimension is zero, the format is not in the registry, or the
/// format is block-compressed with an unknown block layout. Callers must treat
/// `0` as "size cannot be computed".
///
/// # Remarks
///
/// Block-compressed sizes round each axis down to whole 4x4 blocks (minimum 1).
/// Textures whose sides are not multiples of 4 are therefore sized as their
/// producer sized them, not as a GPU would.
#[inline]
pub fn mip_byte_size(width: u16, height: u16, depth: u16, format: ImageFormat) -> u32 {
    let Some(info) = format.info() else {
        return 0;
    };
    if width == 0 || height == 0 || depth == 0 {
        return 0;
    }

    if !info.is_compressed {
        return u32::from(width)
            .saturating_mul(u32::from(height))
            .saturating_mul(u32::from(depth))
            .saturating_mul(u32::from(info.num_bytes));
    }

    let Some(block_size) = format.block_size() else {
        return 0;
    };

    let blocks_wide = u32::from((width >> 2).max(1));
    let blocks_high = u32::from((height >> 2).max(1));
    blocks_wide
        .saturating_mul(blocks_high)
        .saturating_mul(u32::from(depth))
        .saturating_mul(block_size)
}
