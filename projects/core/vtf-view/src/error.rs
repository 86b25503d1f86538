//! Error types for VTF parsing and queries.

use thiserror::Error;

/// Result type for VTF operations
pub type VtfResult<T> = Result<T, VtfError>;

/// Errors that can occur while reading a VTF file.
///
/// [`VtfError::Truncated`], [`VtfError::InvalidSignature`] and
/// [`VtfError::UnsupportedVersion`] are raised while constructing a
/// [`TextureView`]; a view that exists always has a valid header.
///
/// The remaining variants are raised by individual queries and only concern the
/// queried chunk or slice. Other queries on the same view keep working.
///
/// [`TextureView`]: crate::TextureView
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VtfError {
    /// The buffer ends before a fixed-size header structure does.
    #[error("Input buffer too short: required at least {required} bytes, got {actual} bytes")]
    Truncated { required: usize, actual: usize },

    /// The first four bytes are not `VTF\0`.
    #[error("Invalid VTF signature")]
    InvalidSignature,

    /// The header version pair is not a known (promotable) schema.
    #[error("Unsupported VTF version {major}.{minor}")]
    UnsupportedVersion { major: u32, minor: u32 },

    /// The resource descriptor table does not fit inside the header/buffer.
    #[error("Resource table with {count} entries at offset {start} lies outside the {len} byte buffer")]
    ResourceTableOutOfRange { start: i64, count: u32, len: usize },

    /// A resource chunk points outside the buffer.
    #[error("Resource chunk at offset {offset} with size {size} lies outside the {len} byte buffer")]
    ChunkOutOfRange { offset: usize, size: usize, len: usize },

    /// A resource chunk does not have the size its type requires.
    #[error("Resource chunk size mismatch: expected {expected} bytes, got {actual} bytes")]
    ChunkSizeMismatch { expected: usize, actual: usize },

    /// A computed image slice lies outside the buffer.
    #[error("Image data at offset {offset} with size {size} lies outside the {len} byte buffer")]
    ImageDataOutOfRange { offset: usize, size: usize, len: usize },
}
