use super::OutComponent;

/// One license with its text and every component that uses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseBlock {
    pub id: String,
    pub name: String,
    /// License text, or an inline error placeholder when resolution failed
    pub text: String,
    /// Components sorted by name + version
    pub used_by: Vec<OutComponent>,
}

/// Overview table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewItem {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Complete attribution report handed to the formatters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportModel {
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    pub overview: Vec<OverviewItem>,
    pub licenses: Vec<LicenseBlock>,
    pub notices: Vec<OutComponent>,
}
