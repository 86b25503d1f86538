#![cfg(not(tarpaulin_include))]

use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::path::*;

/// Canonicalizes a CLI path argument that must already exist.
pub fn canonicalize_input_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(Path::new(value)).map_err(|e| format!("Invalid path: {e}"))
}

/// Collects the VTF files at `path`.
///
/// A file path is returned as-is, whatever its extension. Directories are
/// searched recursively for files with a `.vtf` extension; unreadable
/// directories and entries are skipped.
pub fn find_vtf_files(path: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    if !path.is_dir() {
        files.push(path.to_path_buf());
        return Ok(());
    }

    let dir_entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Skipping unreadable directory {}: {e}", path.display());
            return Ok(());
        }
    };

    for entry in dir_entries.flatten() {
        let entry_path = entry.path();
        if entry_path.is_dir() {
            find_vtf_files(&entry_path, files)?;
        } else if entry_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("vtf"))
        {
            files.push(entry_path);
        }
    }
    Ok(())
}

/// Memory maps the file at `path` and passes its contents to `read`.
pub fn with_mapped_file<R>(
    path: &Path,
    read: impl FnOnce(&[u8]) -> Result<R, CliError>,
) -> Result<R, CliError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| CliError::InvalidPath(path.display().to_string()))?;
    let handle =
        ReadOnlyFileHandle::open(path_str).map_err(|e| CliError::MmapError(e.to_string()))?;
    let size = handle
        .size()
        .map_err(|e| CliError::MmapError(e.to_string()))? as usize;

    // Zero length mappings are rejected by the OS.
    if size == 0 {
        return read(&[]);
    }

    let mapping =
        ReadOnlyMmap::new(&handle, 0, size).map_err(|e| CliError::MmapError(e.to_string()))?;
    read(mapping.as_slice())
}
