/// Resource descriptors and the known resource types.
pub mod entry;

/// Payload types of the fixed-size resources.
pub mod payloads;

/// Locating and querying the resource table.
pub mod table;

pub use entry::*;
pub use payloads::*;
pub use table::*;
