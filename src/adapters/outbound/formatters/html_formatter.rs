use super::template::{Sections, TemplateOverride};
use crate::attribution::domain::{LicenseBlock, OutComponent, OverviewItem, ReportModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const STYLE: &str = "body{font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Helvetica,Arial,sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem;color:#24292f}\
table{border-collapse:collapse}th,td{border:1px solid #d0d7de;padding:.3rem .8rem;text-align:left}\
pre{background:#f6f8fa;padding:1rem;overflow-x:auto;white-space:pre-wrap}\
.license{border-top:1px solid #d0d7de;margin-top:2rem}";

/// Escapes text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HtmlFormatter adapter for the THIRD_PARTY_LICENSES.html attribution page
///
/// Renders a self-contained page: overview table, one section per license
/// with the components using it and the full text, then the notices.
pub struct HtmlFormatter {
    template: Option<TemplateOverride>,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self { template: None }
    }

    pub fn with_template(template: TemplateOverride) -> Self {
        Self {
            template: Some(template),
        }
    }

    fn render_overview(overview: &[OverviewItem]) -> String {
        let mut output = String::from(
            "<table class=\"overview\">\n<thead><tr><th>License</th><th>Identifier</th><th>Components</th></tr></thead>\n<tbody>\n",
        );
        for item in overview {
            output.push_str(&format!(
                "<tr><td><a href=\"#{id}\">{name}</a></td><td>{id}</td><td>{count}</td></tr>\n",
                id = escape_html(&item.id),
                name = escape_html(&item.name),
                count = item.count
            ));
        }
        output.push_str("</tbody>\n</table>\n");
        output
    }

    fn render_component(component: &OutComponent) -> String {
        let name = escape_html(&component.name);
        let label = match &component.homepage {
            Some(homepage) => format!("<a href=\"{}\">{}</a>", escape_html(homepage), name),
            None => name,
        };

        if component.version.is_empty() {
            format!("<li>{}</li>\n", label)
        } else {
            format!("<li>{} {}</li>\n", label, escape_html(&component.version))
        }
    }

    fn render_licenses(licenses: &[LicenseBlock]) -> String {
        let mut output = String::new();
        for block in licenses {
            output.push_str(&format!(
                "<section class=\"license\" id=\"{}\">\n<h2>{}</h2>\n<p>Used by:</p>\n<ul>\n",
                escape_html(&block.id),
                escape_html(&block.name)
            ));
            for component in &block.used_by {
                output.push_str(&Self::render_component(component));
            }
            output.push_str(&format!(
                "</ul>\n<pre>{}</pre>\n</section>\n",
                escape_html(&block.text)
            ));
        }
        output
    }

    fn render_notices(notices: &[OutComponent]) -> String {
        if notices.is_empty() {
            return String::new();
        }

        let mut output = String::from("<section class=\"notices\">\n<h2>Notices</h2>\n<dl>\n");
        for component in notices {
            output.push_str(&format!(
                "<dt>{} {}</dt><dd>{}</dd>\n",
                escape_html(&component.name),
                escape_html(&component.version),
                escape_html(component.copyright.trim())
            ));
        }
        output.push_str("</dl>\n</section>\n");
        output
    }

    fn sections(model: &ReportModel) -> Sections {
        Sections {
            generated_at: escape_html(&model.generated_at),
            overview: Self::render_overview(&model.overview),
            licenses: Self::render_licenses(&model.licenses),
            notices: Self::render_notices(&model.notices),
        }
    }

    fn render_page(sections: &Sections) -> String {
        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        output.push_str("<title>Third Party Licenses</title>\n");
        output.push_str(&format!("<style>{}</style>\n", STYLE));
        output.push_str("</head>\n<body>\n<h1>Third Party Licenses</h1>\n");
        output.push_str(&format!("<p>Generated: {}</p>\n", sections.generated_at));
        output.push_str("<h2>Overview</h2>\n");
        output.push_str(&sections.overview);
        output.push_str(&sections.licenses);
        output.push_str(&sections.notices);
        output.push_str("</body>\n</html>\n");
        output
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, model: &ReportModel) -> Result<String> {
        let sections = Self::sections(model);
        Ok(match &self.template {
            Some(template) => template.render(&sections),
            None => Self::render_page(&sections),
        })
    }
}
