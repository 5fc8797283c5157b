use crate::attribution::domain::SpdxNames;
use crate::attribution::services::LICENSE_REF_PREFIX;

/// DisplayNamePolicy - decides the human readable name shown for a license id
///
/// Priority order:
/// 1. name from the SPDX license list
/// 2. for `LicenseRef-` ids: the suffix with hyphens turned into spaces, marked as custom
/// 3. the id itself
pub struct DisplayNamePolicy;

impl DisplayNamePolicy {
    pub fn resolve(license_id: &str, spdx_names: &SpdxNames) -> String {
        if let Some(name) = spdx_names.get(license_id).filter(|n| !n.is_empty()) {
            return name.clone();
        }

        match license_id.strip_prefix(LICENSE_REF_PREFIX) {
            Some(suffix) => format!("{} (custom license)", suffix.replace('-', " ")),
            None => license_id.to_string(),
        }
    }
}
