/// Field offsets, record sizes, version numbers and texture flags.
pub mod constants;

/// Reading header records out of a buffer.
pub mod parse;

/// Per-version header records and the canonical header.
pub mod records;

pub use constants::flags;
pub use parse::*;
pub use records::*;
