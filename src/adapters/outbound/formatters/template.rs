/// Placeholder for the RFC 3339 generation timestamp
pub const GENERATED_AT: &str = "{{generated_at}}";
/// Placeholder for the rendered overview section
pub const OVERVIEW: &str = "{{overview}}";
/// Placeholder for the rendered license blocks
pub const LICENSES: &str = "{{licenses}}";
/// Placeholder for the rendered notices section
pub const NOTICES: &str = "{{notices}}";

/// Rendered sections of a report, substituted into a template override
pub struct Sections {
    pub generated_at: String,
    pub overview: String,
    pub licenses: String,
    pub notices: String,
}

/// Operator supplied template replacing a formatter's built-in page layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOverride {
    content: String,
}

impl TemplateOverride {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Substitutes every placeholder; unknown `{{...}}` sequences are left untouched
    ///
    /// Substitution is single pass, so section content that happens to
    /// contain a placeholder is never expanded again.
    pub fn render(&self, sections: &Sections) -> String {
        let replacements = [
            (GENERATED_AT, sections.generated_at.as_str()),
            (OVERVIEW, sections.overview.as_str()),
            (LICENSES, sections.licenses.as_str()),
            (NOTICES, sections.notices.as_str()),
        ];

        let mut output = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let candidate = &rest[start..];
            match replacements
                .iter()
                .find(|(placeholder, _)| candidate.starts_with(placeholder))
            {
                Some((placeholder, value)) => {
                    output.push_str(value);
                    rest = &candidate[placeholder.len()..];
                }
                None => {
                    output.push_str("{{");
                    rest = &candidate[2..];
                }
            }
        }
        output.push_str(rest);
        output
    }
}
