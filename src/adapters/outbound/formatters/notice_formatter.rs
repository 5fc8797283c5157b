use super::template::{Sections, TemplateOverride};
use super::HTML_FILE_NAME;
use crate::attribution::domain::{LicenseBlock, OutComponent, OverviewItem, ReportModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// NoticeFormatter adapter for the NOTICE.md file
///
/// Lists the copyright notice of every component that declares one and
/// points to the HTML page for the full license texts.
pub struct NoticeFormatter {
    template: Option<TemplateOverride>,
}

impl NoticeFormatter {
    pub fn new() -> Self {
        Self { template: None }
    }

    pub fn with_template(template: TemplateOverride) -> Self {
        Self {
            template: Some(template),
        }
    }

    /// Keeps user data from breaking the surrounding Markdown structure
    fn escape_markdown(text: &str) -> String {
        text.replace('\n', " ").replace('*', "\\*").replace('_', "\\_")
    }

    fn heading(component: &OutComponent) -> String {
        let name = Self::escape_markdown(&component.name);
        if component.version.is_empty() {
            name
        } else {
            format!("{} {}", name, Self::escape_markdown(&component.version))
        }
    }

    fn render_overview(overview: &[OverviewItem]) -> String {
        overview
            .iter()
            .map(|item| {
                format!(
                    "- {} ({}): {}\n",
                    Self::escape_markdown(&item.name),
                    item.id,
                    item.count
                )
            })
            .collect()
    }

    fn render_licenses(licenses: &[LicenseBlock]) -> String {
        licenses
            .iter()
            .map(|block| {
                let users: Vec<String> = block.used_by.iter().map(Self::heading).collect();
                format!("- {}: {}\n", block.id, users.join(", "))
            })
            .collect()
    }

    fn render_notices(notices: &[OutComponent]) -> String {
        notices
            .iter()
            .map(|component| {
                format!(
                    "## {}\n\n{}\n\n",
                    Self::heading(component),
                    component.copyright.trim()
                )
            })
            .collect()
    }

    fn render_document(sections: &Sections) -> String {
        let mut output = String::from("# NOTICE\n\n");
        output.push_str(&format!(
            "This product includes third-party software. The full license texts are listed in {}.\n\n",
            HTML_FILE_NAME
        ));
        output.push_str(&format!("Generated at: {}\n\n", sections.generated_at));
        output.push_str(&sections.notices);
        output
    }
}

impl Default for NoticeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for NoticeFormatter {
    fn format(&self, model: &ReportModel) -> Result<String> {
        let sections = Sections {
            generated_at: model.generated_at.clone(),
            overview: Self::render_overview(&model.overview),
            licenses: Self::render_licenses(&model.licenses),
            notices: Self::render_notices(&model.notices),
        };

        Ok(match &self.template {
            Some(template) => template.render(&sections),
            None => Self::render_document(&sections),
        })
    }
}
