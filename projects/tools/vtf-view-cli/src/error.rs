use std::io;
use thiserror::Error;
use vtf_view::VtfError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Vtf(#[from] VtfError),
    #[error("Memory mapping failed: {0}")]
    MmapError(String),
    #[error("Path is not valid UTF-8: {0}")]
    InvalidPath(String),
}
