use crate::attribution::domain::ReportModel;

/// AttributionResponse - Internal response DTO from the attribution use case
///
/// Only produced when every license id was resolved; the formatters turn
/// the model into the output artifacts.
#[derive(Debug, Clone)]
pub struct AttributionResponse {
    pub model: ReportModel,
    /// Number of SBOM components dropped by the filters
    pub ignored_components: usize,
}

impl AttributionResponse {
    pub fn new(model: ReportModel, ignored_components: usize) -> Self {
        Self {
            model,
            ignored_components,
        }
    }
}
