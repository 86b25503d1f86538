use super::entry::*;
use crate::error::{VtfError, VtfResult};
use crate::header::VtfHeader;
use likely_stable::unlikely;

/// The resource descriptor table of a 7.3+ VTF file.
///
/// The table sits directly before the end of the declared header, i.e. it spans
/// `header_size - num_resources * 8 .. header_size`. Files before 7.3 have an
/// empty table.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTable<'a> {
    data: &'a [u8],
    start: usize,
    count: u32,
}

impl<'a> ResourceTable<'a> {
    /// Locates the resource table of `data` described by `header`.
    ///
    /// # Errors
    ///
    /// [`VtfError::ResourceTableOutOfRange`] if the table would start before
    /// the beginning of the file or end past its end.
    pub fn new(data: &'a [u8], header: &VtfHeader) -> VtfResult<Self> {
        let count = header.num_resources;
        if count == 0 {
            return Ok(Self {
                data,
                start: 0,
                count: 0,
            });
        }

        let table_size = i64::from(count) * RESOURCE_ENTRY_SIZE as i64;
        let start = i64::from(header.header_size) - table_size;
        let end = i64::from(header.header_size);
        if unlikely(start < 0 || end > data.len() as i64) {
            log::warn!(
                "Resource table ({count} entries at {start}) lies outside the {} byte buffer",
                data.len()
            );
            return Err(VtfError::ResourceTableOutOfRange {
                start,
                count,
                len: data.len(),
            });
        }

        log::debug!("Resource table: {count} entries at offset {start}");
        Ok(Self {
            data,
            start: start as usize,
            count,
        })
    }

    /// Number of descriptors in the table.
    #[inline]
    pub fn len(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Offset of the first descriptor in the file.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// All descriptors, in file order.
    pub fn iter(&self) -> impl Iterator<Item = ResourceEntry> + 'a {
        let start = self.start;
        let table = &self.data[start..start + self.count as usize * RESOURCE_ENTRY_SIZE];
        table
            .chunks_exact(RESOURCE_ENTRY_SIZE)
            .enumerate()
            .map(move |(index, bytes)| {
                let mut entry = [0u8; RESOURCE_ENTRY_SIZE];
                entry.copy_from_slice(bytes);
                ResourceEntry::from_bytes(&entry, start + index * RESOURCE_ENTRY_SIZE)
            })
    }

    /// Finds the first descriptor with the given tag.
    pub fn find(&self, tag: u32) -> Option<ResourceEntry> {
        let found = self.iter().find(|entry| entry.tag == tag);
        log::trace!("Resource lookup {tag:#08x}: {found:?}");
        found
    }

    /// Finds the first descriptor of a known type.
    #[inline]
    pub fn find_type(&self, ty: ResourceType) -> Option<ResourceEntry> {
        self.find(ty.tag())
    }

    /// Returns the `size` byte payload of the first resource with `tag`.
    ///
    /// The table does not know how large each chunk type is; the caller supplies it.
    ///
    /// # Return
    ///
    /// `Ok(None)` if no resource has the tag.
    ///
    /// # Errors
    ///
    /// See [`ResourceTable::entry_data`].
    pub fn chunk_data(&self, tag: u32, size: usize) -> VtfResult<Option<&'a [u8]>> {
        match self.find(tag) {
            Some(entry) => self.entry_data(&entry, size).map(Some),
            None => Ok(None),
        }
    }

    /// Returns the `size` byte payload of `entry`.
    ///
    /// Inline payloads are returned as the 4-byte value field of the descriptor.
    ///
    /// # Errors
    ///
    /// - [`VtfError::ChunkSizeMismatch`] if `entry` is inline and `size` is not 4.
    /// - [`VtfError::ChunkOutOfRange`] if the payload does not fit in the file.
    pub fn entry_data(&self, entry: &ResourceEntry, size: usize) -> VtfResult<&'a [u8]> {
        if entry.is_inline() && size != 4 {
            return Err(VtfError::ChunkSizeMismatch {
                expected: size,
                actual: 4,
            });
        }

        let offset = entry.data_offset();
        let data = self.data;
        match offset.checked_add(size).and_then(|end| data.get(offset..end)) {
            Some(slice) => Ok(slice),
            None => {
                log::warn!(
                    "Resource {:#08x} at offset {offset} with size {size} lies outside the {} byte buffer",
                    entry.tag,
                    data.len()
                );
                Err(VtfError::ChunkOutOfRange {
                    offset,
                    size,
                    len: data.len(),
                })
            }
        }
    }

    /// Returns the fixed `N` byte payload of the first resource of type `ty`.
    pub fn fixed_chunk<const N: usize>(&self, ty: ResourceType) -> VtfResult<Option<[u8; N]>> {
        let Some(bytes) = self.chunk_data(ty.tag(), N)? else {
            return Ok(None);
        };

        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(Some(out))
    }

    /// Returns the payload of a resource stored as a `u32` length followed by that many bytes.
    ///
    /// Inline resources have no length prefix; their 4 value bytes are returned as-is.
    ///
    /// # Errors
    ///
    /// [`VtfError::ChunkOutOfRange`] if the length or the payload do not fit in the file.
    pub fn length_prefixed_chunk(&self, ty: ResourceType) -> VtfResult<Option<&'a [u8]>> {
        let Some(entry) = self.find_type(ty) else {
            return Ok(None);
        };
        if entry.is_inline() {
            return self.entry_data(&entry, 4).map(Some);
        }

        let prefix = self.entry_data(&entry, 4)?;
        let len = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
        let start = entry.data_offset().saturating_add(4);
        let Ok(start) = u32::try_from(start) else {
            return Err(VtfError::ChunkOutOfRange {
                offset: start,
                size: len,
                len: self.data.len(),
            });
        };
        let payload = ResourceEntry {
            payload: ChunkPayload::AtOffset(start),
            ..entry
        };
        self.entry_data(&payload, len).map(Some)
    }
}
