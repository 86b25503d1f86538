use crate::error::{VtfError, VtfResult};
use crate::header::{read_header, VtfHeader};
use crate::layout::ImageLayout;
use crate::resources::*;

/// Read-only view over the bytes of a VTF file.
///
/// The header is parsed once, in [`TextureView::new`]. Every other query is
/// computed from the header and the borrowed buffer on demand and returns
/// sub-slices of that buffer; nothing is copied or cached.
///
/// # Example
///
/// ```no_run
/// use vtf_view::{TextureView, VtfResult};
///
/// fn largest_mip(file: &[u8]) -> VtfResult<&[u8]> {
///     let view = TextureView::new(file)?;
///     view.image_data(0, 0, 0)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextureView<'a> {
    data: &'a [u8],
    header: VtfHeader,
}

impl<'a> TextureView<'a> {
    /// Parses the header of `data`.
    ///
    /// # Errors
    ///
    /// [`VtfError::Truncated`], [`VtfError::InvalidSignature`] or
    /// [`VtfError::UnsupportedVersion`] if the header cannot be read.
    pub fn new(data: &'a [u8]) -> VtfResult<Self> {
        let header = read_header(data)?;
        Ok(Self { data, header })
    }

    /// The canonical header.
    #[inline]
    pub fn header(&self) -> &VtfHeader {
        &self.header
    }

    /// The buffer this view was created from.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of faces per frame: 6 for cubemaps, otherwise 1.
    #[inline]
    pub fn face_count(&self) -> u32 {
        self.header.face_count()
    }

    /// Addressing information for the pixel data region.
    #[inline]
    pub fn layout(&self) -> ImageLayout {
        ImageLayout::from(&self.header)
    }

    /// Dimensions of the given mip level.
    #[inline]
    pub fn mip_dimensions(&self, mip_level: u8) -> (u16, u16, u16) {
        self.layout().mip_dimensions(mip_level)
    }

    /// The resource table. Empty for files before 7.3.
    ///
    /// # Errors
    ///
    /// [`VtfError::ResourceTableOutOfRange`] if the table does not fit in the buffer.
    #[inline]
    pub fn resources(&self) -> VtfResult<ResourceTable<'a>> {
        ResourceTable::new(self.data, &self.header)
    }

    /// Number of resources declared by the header.
    #[inline]
    pub fn resource_count(&self) -> u32 {
        self.header.num_resources
    }

    /// Offset of the pixel data region in the file.
    ///
    /// Files with resources locate it through the [`ResourceType::LegacyImage`]
    /// resource. Older files store it right after the header and the thumbnail.
    ///
    /// # Return
    ///
    /// `Ok(None)` if the file has resources but no image resource.
    pub fn image_data_start(&self) -> VtfResult<Option<usize>> {
        if self.header.has_resources() {
            let table = self.resources()?;
            return Ok(table
                .find_type(ResourceType::LegacyImage)
                .map(|entry| entry.data_offset()));
        }

        Ok(Some(
            (self.header.header_size as usize)
                .saturating_add(self.header.low_res_image_size() as usize),
        ))
    }

    /// The bytes of a single image: one face of one frame at one mip level.
    ///
    /// Indices are not checked against the header's frame, face and mip counts.
    ///
    /// # Return
    ///
    /// An empty slice if the pixel data region cannot be located.
    ///
    /// # Errors
    ///
    /// - [`VtfError::ImageDataOutOfRange`] if the image does not fit in the buffer.
    /// - [`VtfError::ResourceTableOutOfRange`] from locating the region.
    pub fn image_data(&self, frame: u16, face: u16, mip_level: u8) -> VtfResult<&'a [u8]> {
        let Some(start) = self.image_data_start()? else {
            return Ok(&[]);
        };

        let layout = self.layout();
        let offset = start.saturating_add(layout.image_offset(frame, face, mip_level) as usize);
        let size = layout.mip_size(mip_level) as usize;
        self.slice(offset, size)
    }

    /// The bytes of the low resolution thumbnail.
    ///
    /// # Return
    ///
    /// An empty slice if the thumbnail has no area, or the file has resources
    /// but no thumbnail resource.
    ///
    /// # Errors
    ///
    /// - [`VtfError::ImageDataOutOfRange`] if the thumbnail does not fit in the buffer.
    /// - [`VtfError::ResourceTableOutOfRange`] from locating the thumbnail.
    pub fn thumbnail_data(&self) -> VtfResult<&'a [u8]> {
        let size = self.header.low_res_image_size() as usize;
        if self.header.low_res_image_width == 0 || self.header.low_res_image_height == 0 {
            return Ok(&[]);
        }

        let start = if self.header.has_resources() {
            match self.resources()?.find_type(ResourceType::LegacyLowResImage) {
                Some(entry) => entry.data_offset(),
                None => return Ok(&[]),
            }
        } else {
            self.header.header_size as usize
        };

        self.slice(start, size)
    }

    /// The CRC32 stored in the [`ResourceType::Crc32`] resource.
    ///
    /// # Return
    ///
    /// `Ok(None)` if the resource is absent.
    ///
    /// # Errors
    ///
    /// Resource table or chunk errors; see [`ResourceTable::entry_data`].
    pub fn crc32(&self) -> VtfResult<Option<u32>> {
        Ok(self
            .resources()?
            .fixed_chunk::<CRC32_SIZE>(ResourceType::Crc32)?
            .map(u32::from_le_bytes))
    }

    /// The LOD clamp settings stored in the [`ResourceType::LodControl`] resource.
    pub fn lod_control_settings(&self) -> VtfResult<Option<LodControlSettings>> {
        Ok(self
            .resources()?
            .fixed_chunk::<{ LodControlSettings::SIZE }>(ResourceType::LodControl)?
            .map(LodControlSettings::from_bytes))
    }

    /// The extended flags stored in the [`ResourceType::SettingsEx`] resource.
    pub fn settings_ex(&self) -> VtfResult<Option<TextureSettingsEx>> {
        Ok(self
            .resources()?
            .fixed_chunk::<{ TextureSettingsEx::SIZE }>(ResourceType::SettingsEx)?
            .map(TextureSettingsEx::from_bytes))
    }

    /// The raw sprite sheet data stored in the [`ResourceType::Sheet`] resource.
    pub fn sheet_data(&self) -> VtfResult<Option<&'a [u8]>> {
        self.resources()?.length_prefixed_chunk(ResourceType::Sheet)
    }

    #[inline]
    fn slice(&self, offset: usize, size: usize) -> VtfResult<&'a [u8]> {
        let data = self.data;
        offset
            .checked_add(size)
            .and_then(|end| data.get(offset..end))
            .ok_or(VtfError::ImageDataOutOfRange {
                offset,
                size,
                len: data.len(),
            })
    }
}
