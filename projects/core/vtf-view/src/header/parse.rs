use super::constants::*;
use super::records::*;
use crate::error::{VtfError, VtfResult};
use crate::format::ImageFormat;
use endian_writer::{EndianReader, LittleEndianReader};
use likely_stable::unlikely;

/// Reads the base record (signature, version, header size) of a VTF file.
///
/// # Errors
///
/// - [`VtfError::Truncated`] if `data` is shorter than [`BASE_HEADER_SIZE`].
/// - [`VtfError::InvalidSignature`] if `data` does not start with `VTF\0`.
pub fn read_base_header(data: &[u8]) -> VtfResult<BaseHeader> {
    ensure_len(data, BASE_HEADER_SIZE)?;

    let signature = read_array::<4>(data, SIGNATURE_OFFSET);
    if signature != VTF_SIGNATURE {
        return Err(VtfError::InvalidSignature);
    }

    // SAFETY: We checked data.len() >= BASE_HEADER_SIZE (16), so all base fields are in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let major = unsafe { reader.read_u32_at(VERSION_MAJOR_OFFSET as isize) };
    let minor = unsafe { reader.read_u32_at(VERSION_MINOR_OFFSET as isize) };
    let header_size = unsafe { reader.read_u32_at(HEADER_SIZE_OFFSET as isize) };

    Ok(BaseHeader {
        signature,
        version: [major, minor],
        header_size,
    })
}

/// Reads the header record of the exact version stored in `data`.
///
/// Versions are matched by equality only; there is no "closest version" fallback.
///
/// # Errors
///
/// - [`VtfError::Truncated`] if `data` is shorter than the base record or the
///   version's record.
/// - [`VtfError::InvalidSignature`] on a bad signature.
/// - [`VtfError::UnsupportedVersion`] for an unknown version pair.
pub fn read_header_record(data: &[u8]) -> VtfResult<HeaderRecord> {
    let base = read_base_header(data)?;
    let version = (base.version[0], base.version[1]);

    let record = match version {
        VERSION_7_5 => HeaderRecord::V7_5(read_v73(data, base)?),
        VERSION_7_4 => HeaderRecord::V7_4(read_v73(data, base)?),
        VERSION_7_3 => HeaderRecord::V7_3(read_v73(data, base)?),
        VERSION_7_2 => HeaderRecord::V7_2(read_v72(data, base)?),
        VERSION_7_1 => HeaderRecord::V7_1(read_v70(data, base)?),
        VERSION_7_0 => HeaderRecord::V7_0(read_v70(data, base)?),
        VERSION_X360 => HeaderRecord::X360(read_console(data, base)?),
        VERSION_PS3 => HeaderRecord::Ps3(read_console(data, base)?),
        (major, minor) => return Err(VtfError::UnsupportedVersion { major, minor }),
    };

    log::debug!(
        "Read VTF {}.{} header ({} bytes declared)",
        version.0,
        version.1,
        base.header_size
    );
    Ok(record)
}

/// Reads the header of `data` and promotes it to a [`VtfHeader`].
///
/// # Errors
///
/// As [`read_header_record`]; console headers fail with [`VtfError::UnsupportedVersion`].
#[inline]
pub fn read_header(data: &[u8]) -> VtfResult<VtfHeader> {
    read_header_record(data)?.into_canonical()
}

fn read_v70(data: &[u8], base: BaseHeader) -> VtfResult<HeaderV70> {
    ensure_len(data, HEADER_V70_SIZE)?;

    // SAFETY: We checked data.len() >= HEADER_V70_SIZE (64); every 7.0 field ends at or before 63.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe {
        Ok(HeaderV70 {
            base,
            width: reader.read_u16_at(WIDTH_OFFSET as isize),
            height: reader.read_u16_at(HEIGHT_OFFSET as isize),
            flags: reader.read_u32_at(FLAGS_OFFSET as isize),
            num_frames: reader.read_u16_at(FRAMES_OFFSET as isize),
            start_frame: reader.read_u16_at(START_FRAME_OFFSET as isize),
            reflectivity: read_vec3(&mut reader, REFLECTIVITY_OFFSET),
            bump_scale: reader.read_f32_at(BUMP_SCALE_OFFSET as isize),
            image_format: ImageFormat(reader.read_i32_at(IMAGE_FORMAT_OFFSET as isize)),
            num_mip_levels: reader.read_u8_at(MIP_COUNT_OFFSET as isize),
            low_res_image_format: ImageFormat(reader.read_i32_at(LOW_RES_FORMAT_OFFSET as isize)),
            low_res_image_width: reader.read_u8_at(LOW_RES_WIDTH_OFFSET as isize),
            low_res_image_height: reader.read_u8_at(LOW_RES_HEIGHT_OFFSET as isize),
        })
    }
}

fn read_v72(data: &[u8], base: BaseHeader) -> VtfResult<HeaderV72> {
    ensure_len(data, HEADER_V72_SIZE)?;
    let v7_0 = read_v70(data, base)?;

    // SAFETY: We checked data.len() >= HEADER_V72_SIZE (80), DEPTH_OFFSET (0x3F) + 2 is in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let depth = unsafe { reader.read_u16_at(DEPTH_OFFSET as isize) };
    Ok(HeaderV72 { v7_0, depth })
}

fn read_v73(data: &[u8], base: BaseHeader) -> VtfResult<HeaderV73> {
    ensure_len(data, HEADER_V73_SIZE)?;

    // SAFETY: We checked data.len() >= HEADER_V73_SIZE (80), NUM_RESOURCES_OFFSET (0x44) + 4 is in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let num_resources = unsafe { reader.read_u32_at(NUM_RESOURCES_OFFSET as isize) };

    Ok(HeaderV73 {
        v7_2: read_v72(data, base)?,
        num_resources,
    })
}

fn read_console(data: &[u8], base: BaseHeader) -> VtfResult<ConsoleHeader> {
    ensure_len(data, CONSOLE_HEADER_SIZE)?;

    // SAFETY: We checked data.len() >= CONSOLE_HEADER_SIZE (60); the last field ends at 60.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe {
        Ok(ConsoleHeader {
            base,
            flags: reader.read_u32_at(CONSOLE_FLAGS_OFFSET as isize),
            width: reader.read_u16_at(CONSOLE_WIDTH_OFFSET as isize),
            height: reader.read_u16_at(CONSOLE_HEIGHT_OFFSET as isize),
            depth: reader.read_u16_at(CONSOLE_DEPTH_OFFSET as isize),
            num_frames: reader.read_u16_at(CONSOLE_FRAMES_OFFSET as isize),
            preload_data_size: reader.read_u16_at(CONSOLE_PRELOAD_SIZE_OFFSET as isize),
            mip_skip_count: reader.read_u8_at(CONSOLE_MIP_SKIP_OFFSET as isize),
            num_resources: reader.read_u8_at(CONSOLE_NUM_RESOURCES_OFFSET as isize),
            reflectivity: read_vec3(&mut reader, CONSOLE_REFLECTIVITY_OFFSET),
            bump_scale: reader.read_f32_at(CONSOLE_BUMP_SCALE_OFFSET as isize),
            image_format: ImageFormat(reader.read_i32_at(CONSOLE_IMAGE_FORMAT_OFFSET as isize)),
            low_res_image_sample: read_array::<4>(data, CONSOLE_LOW_RES_SAMPLE_OFFSET),
            compressed_size: reader.read_u32_at(CONSOLE_COMPRESSED_SIZE_OFFSET as isize),
        })
    }
}

#[inline(always)]
fn ensure_len(data: &[u8], required: usize) -> VtfResult<()> {
    if unlikely(data.len() < required) {
        return Err(VtfError::Truncated {
            required,
            actual: data.len(),
        });
    }
    Ok(())
}

// `read_array` indexes `data` directly; callers have already checked the record length.

#[inline(always)]
fn read_array<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}

/// # Safety
///
/// `reader` must point at a buffer holding at least `offset + 12` bytes.
#[inline(always)]
unsafe fn read_vec3(reader: &mut LittleEndianReader, offset: usize) -> [f32; 3] {
    let offset = offset as isize;
    [
        reader.read_f32_at(offset),
        reader.read_f32_at(offset + 4),
        reader.read_f32_at(offset + 8),
    ]
}
