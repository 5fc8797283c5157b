/// Formatter adapters for the attribution report artifacts
mod html_formatter;
mod notice_formatter;
mod template;

pub use html_formatter::{escape_html, HtmlFormatter};
pub use notice_formatter::NoticeFormatter;
pub use template::TemplateOverride;

/// File name of the HTML attribution page
pub const HTML_FILE_NAME: &str = "THIRD_PARTY_LICENSES.html";
/// File name of the notice file
pub const NOTICE_FILE_NAME: &str = "NOTICE.md";
