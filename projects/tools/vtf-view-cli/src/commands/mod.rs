pub mod info;
pub mod resources;
