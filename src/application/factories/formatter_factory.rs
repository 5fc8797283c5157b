use crate::adapters::outbound::formatters::{
    HtmlFormatter, NoticeFormatter, TemplateOverride, HTML_FILE_NAME, NOTICE_FILE_NAME,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::AttributionError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// The artifacts produced by one attribution run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// THIRD_PARTY_LICENSES.html
    Html,
    /// NOTICE.md
    Notice,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Html, ReportKind::Notice];

    /// File name of the artifact inside the output directory
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Html => HTML_FILE_NAME,
            ReportKind::Notice => NOTICE_FILE_NAME,
        }
    }
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for an artifact, using a template override when given
    ///
    /// # Errors
    /// Returns an error if the template override cannot be read
    ///
    /// # Examples
    /// ```
    /// use oss_attributions::application::factories::{FormatterFactory, ReportKind};
    ///
    /// let formatter = FormatterFactory::create(ReportKind::Html, None).unwrap();
    /// ```
    pub fn create(kind: ReportKind, template_path: Option<&Path>) -> Result<Box<dyn ReportFormatter>> {
        let template = template_path.map(Self::load_template).transpose()?;

        Ok(match (kind, template) {
            (ReportKind::Html, None) => Box::new(HtmlFormatter::new()),
            (ReportKind::Html, Some(template)) => Box::new(HtmlFormatter::with_template(template)),
            (ReportKind::Notice, None) => Box::new(NoticeFormatter::new()),
            (ReportKind::Notice, Some(template)) => {
                Box::new(NoticeFormatter::with_template(template))
            }
        })
    }

    /// Returns the progress message for the specified artifact
    ///
    /// # Examples
    /// ```
    /// use oss_attributions::application::factories::{FormatterFactory, ReportKind};
    ///
    /// let message = FormatterFactory::progress_message(ReportKind::Notice);
    /// assert_eq!(message, "📝 Rendering NOTICE.md...");
    /// ```
    pub fn progress_message(kind: ReportKind) -> &'static str {
        match kind {
            ReportKind::Html => "📝 Rendering THIRD_PARTY_LICENSES.html...",
            ReportKind::Notice => "📝 Rendering NOTICE.md...",
        }
    }

    fn load_template(path: &Path) -> Result<TemplateOverride> {
        let content = read_regular_file(path, "template").map_err(|e| {
            AttributionError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;
        Ok(TemplateOverride::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::domain::ReportModel;
    use std::fs;
    use tempfile::TempDir;

    fn empty_model() -> ReportModel {
        ReportModel {
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            overview: vec![],
            licenses: vec![],
            notices: vec![],
        }
    }

    #[test]
    fn test_create_default_formatters() {
        let html = FormatterFactory::create(ReportKind::Html, None).unwrap();
        assert!(html.format(&empty_model()).unwrap().starts_with("<!DOCTYPE html>"));

        let notice = FormatterFactory::create(ReportKind::Notice, None).unwrap();
        assert!(notice.format(&empty_model()).unwrap().starts_with("# NOTICE"));
    }

    #[test]
    fn test_create_with_template_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notice.tpl");
        fs::write(&path, "Custom notice {{generated_at}}").unwrap();

        let notice = FormatterFactory::create(ReportKind::Notice, Some(&path)).unwrap();
        assert_eq!(
            notice.format(&empty_model()).unwrap(),
            "Custom notice 2026-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FormatterFactory::create(
            ReportKind::Html,
            Some(&temp_dir.path().join("missing.html")),
        );

        assert!(result.is_err());
        assert!(format!("{}", result.err().unwrap()).contains("Failed to read file"));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ReportKind::Html.file_name(), "THIRD_PARTY_LICENSES.html");
        assert_eq!(ReportKind::Notice.file_name(), "NOTICE.md");
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(ReportKind::Html),
            "📝 Rendering THIRD_PARTY_LICENSES.html..."
        );
    }
}
