use crate::ports::outbound::OutputPresenter;
use crate::shared::error::AttributionError;
use crate::shared::security::validate_write_target;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes `content` to `path` atomically with respect to readers of `path`
///
/// The content goes to a temporary file in the same directory, which is then
/// renamed onto the target. Readers see either the old file or the complete
/// new one, never a truncated file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_error = |details: String| AttributionError::FileWriteError {
        path: path.to_path_buf(),
        details,
    };

    validate_write_target(path).map_err(|e| write_error(e.to_string()))?;

    let dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_error(e.to_string()))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| write_error(e.to_string()))?;
    temp.persist(path)
        .map_err(|e| write_error(e.error.to_string()))?;
    Ok(())
}

/// FileSystemWriter adapter for writing a rendered artifact to a file
///
/// This adapter implements the OutputPresenter port. Missing parent
/// directories are created.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn ensure_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| AttributionError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Failed to create directory {}: {}", parent.display(), e),
                })?;
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.ensure_parent_directory()?;
        write_atomic(&self.output_path, content)
    }
}
