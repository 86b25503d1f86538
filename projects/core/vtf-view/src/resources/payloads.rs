//! Fixed-size payloads of typed resources.

/// LOD clamp settings (`LOD` resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LodControlSettings {
    /// Maximum mip resolution as log2 `[u, v]`.
    pub resolution_clamp: [u8; 2],
    /// As `resolution_clamp`, used on Xbox 360.
    pub resolution_clamp_360: [u8; 2],
}

impl LodControlSettings {
    pub const SIZE: usize = 4;

    #[inline]
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self {
            resolution_clamp: [bytes[0], bytes[1]],
            resolution_clamp_360: [bytes[2], bytes[3]],
        }
    }
}

/// Extended texture flags (`TS0` resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureSettingsEx {
    pub flags: [u8; 4],
}

impl TextureSettingsEx {
    pub const SIZE: usize = 4;

    #[inline]
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self { flags: bytes }
    }
}

/// Size of the CRC32 (`CRC` resource) payload.
pub const CRC32_SIZE: usize = 4;
