use crate::attribution::domain::ReportModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the attribution report
///
/// One implementation per output artifact (HTML attribution page, NOTICE file).
pub trait ReportFormatter {
    /// Renders the report model
    ///
    /// # Errors
    /// Returns an error if a template override cannot be read or rendered
    fn format(&self, model: &ReportModel) -> Result<String>;
}
