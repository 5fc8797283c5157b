/// Application services shared by the use cases
mod license_text_resolver;

pub use license_text_resolver::{LicenseText, LicenseTextResolver};
