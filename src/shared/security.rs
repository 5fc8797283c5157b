use crate::shared::error::AttributionError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input file size (100 MB)
///
/// SBOMs of large monorepos stay well below this; anything bigger is rejected
/// before it is loaded into memory.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a regular file into a string after validating it
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description of the file (e.g., "SBOM", "license map") for error messages
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `MAX_FILE_SIZE`
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?
        .len();
    validate_file_size(size, path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Reads a regular file whose content is trusted as-is
///
/// Same checks as [`read_regular_file`], but invalid UTF-8 sequences are
/// replaced instead of failing the read.
pub fn read_regular_file_lossy(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?
        .len();
    validate_file_size(size, path, MAX_FILE_SIZE)?;

    let bytes = fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        return Err(AttributionError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point to the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that an existing output path is not a symbolic link
///
/// A missing path is fine: it will be created by the writer.
pub fn validate_write_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(AttributionError::SecurityError {
            path: path.to_path_buf(),
            reason: "output target is a symbolic link".to_string(),
            hint: "Remove the link; outputs are never written through symbolic links".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Validates that a license id is safe to use as a file name or URL path segment
///
/// # Security
/// License ids can come verbatim from the SBOM, so an id like `../../x`
/// must never reach the file system or a URL.
pub fn validate_license_id(license_id: &str) -> Result<()> {
    if license_id.is_empty() {
        anyhow::bail!("License id must not be empty");
    }

    if license_id.contains('/') || license_id.contains('\\') || license_id.contains("..") {
        anyhow::bail!(
            "Security: license id '{}' contains path separators or '..' which are not allowed",
            license_id
        );
    }

    if license_id.chars().any(|c| c.is_control() || matches!(c, '#' | '?' | '%')) {
        anyhow::bail!(
            "Security: license id '{}' contains characters that are not allowed",
            license_id
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
