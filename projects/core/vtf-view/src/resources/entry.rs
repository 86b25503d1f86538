use bitfield::bitfield;
use derive_enum_all_values::AllValues;

/// Size of a single resource descriptor in the resource table.
pub const RESOURCE_ENTRY_SIZE: usize = 8;

/// Flag bit: the descriptor's value field holds the payload itself rather than an offset.
pub const RESOURCE_FLAG_NO_DATA_CHUNK: u8 = 0x02;

/// Builds a 24-bit resource tag from its three bytes, as stored on disk.
#[inline]
pub const fn make_resource_tag(a: u8, b: u8, c: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16)
}

/// The resource types this crate knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ResourceType {
    /// Full resolution image data (the mip chain). Sized by the header, not the chunk.
    LegacyImage,
    /// Low resolution thumbnail image.
    LegacyLowResImage,
    /// Sprite sheet data.
    Sheet,
    /// LOD clamp settings.
    LodControl,
    /// Extended texture flags.
    SettingsEx,
    /// CRC32 of the source image.
    Crc32,
}

impl ResourceType {
    /// The 24-bit tag identifying this type in the resource table.
    #[inline]
    pub const fn tag(self) -> u32 {
        match self {
            Self::LegacyImage => make_resource_tag(0x30, 0, 0),
            Self::LegacyLowResImage => make_resource_tag(0x01, 0, 0),
            Self::Sheet => make_resource_tag(0x10, 0, 0),
            Self::LodControl => make_resource_tag(b'L', b'O', b'D'),
            Self::SettingsEx => make_resource_tag(b'T', b'S', b'0'),
            Self::Crc32 => make_resource_tag(b'C', b'R', b'C'),
        }
    }

    /// The known type with the given tag, if any.
    #[inline]
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::all_values().iter().copied().find(|x| x.tag() == tag)
    }
}

bitfield! {
    /// First word of a resource descriptor.
    ///
    /// Bit layout:
    /// - Bits 0-23: Resource type tag (24 bits)
    /// - Bits 24-31: Flags (8 bits)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    struct ResourceEntryInfo(u32);
    impl Debug;
    u32;

    /// Resource type tag (24 bits)
    tag, _: 23, 0;
    /// Flags (8 bits)
    u8, flags, _: 31, 24;
}

/// Where a resource's payload lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkPayload {
    /// The payload is the descriptor's 4-byte value field.
    Inline([u8; 4]),
    /// The payload starts at this absolute offset in the file.
    AtOffset(u32),
}

/// A single descriptor of the resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceEntry {
    /// 24-bit type tag. See [`ResourceType::tag`].
    pub tag: u32,
    /// Raw flag byte.
    pub flags: u8,
    pub payload: ChunkPayload,
    /// Offset of this descriptor in the file.
    pub entry_offset: usize,
}

impl ResourceEntry {
    /// Decodes the descriptor stored in `bytes`, which sits at `entry_offset` in the file.
    #[inline]
    pub(crate) fn from_bytes(bytes: &[u8; RESOURCE_ENTRY_SIZE], entry_offset: usize) -> Self {
        let info = ResourceEntryInfo(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
        let value = [bytes[4], bytes[5], bytes[6], bytes[7]];
        let flags = info.flags();

        let payload = if flags & RESOURCE_FLAG_NO_DATA_CHUNK != 0 {
            ChunkPayload::Inline(value)
        } else {
            ChunkPayload::AtOffset(u32::from_le_bytes(value))
        };

        Self {
            tag: info.tag(),
            flags,
            payload,
            entry_offset,
        }
    }

    /// The known type of this entry, if any.
    #[inline]
    pub fn resource_type(&self) -> Option<ResourceType> {
        ResourceType::from_tag(self.tag)
    }

    /// Whether the payload is stored in the descriptor itself.
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.payload, ChunkPayload::Inline(_))
    }

    /// Absolute file offset where the payload begins.
    ///
    /// For inline payloads this is the position of the descriptor's value field.
    #[inline]
    pub fn data_offset(&self) -> usize {
        match self.payload {
            ChunkPayload::Inline(_) => self.entry_offset + 4,
            ChunkPayload::AtOffset(offset) => offset as usize,
        }
    }
}
