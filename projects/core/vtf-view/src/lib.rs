#![doc = include_str!("../README.MD")]
#![no_std]
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod error;
pub mod format;
pub mod header;
pub mod layout;
pub mod resources;
pub mod view;

pub use error::{VtfError, VtfResult};
pub use format::{ImageFormat, ImageFormatInfo};
pub use header::{flags, VtfHeader};
pub use layout::ImageLayout;
pub use resources::{
    LodControlSettings, ResourceEntry, ResourceTable, ResourceType, TextureSettingsEx,
};
pub use view::TextureView;
