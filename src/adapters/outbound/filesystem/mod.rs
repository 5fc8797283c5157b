/// Filesystem adapters for file I/O operations
mod custom_license;
mod file_reader;
mod file_writer;
mod license_cache;

pub use custom_license::CustomLicenseDirectory;
pub use file_reader::FileSystemReader;
pub use file_writer::{write_atomic, FileSystemWriter};
pub use license_cache::LicenseCacheDirectory;
