/// Network adapters for external API calls
mod spdx_client;

pub use spdx_client::{SpdxLicenseListClient, DEFAULT_SPDX_BASE_URL};
