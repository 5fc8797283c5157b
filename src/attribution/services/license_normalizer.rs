use super::unique_sorted;
use crate::attribution::domain::{LicenseAliasMap, LicenseDeclaration};
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of locally-defined license ids that need an operator supplied text
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// Upper bound for the sanitized part of a `LicenseRef-` id (it becomes a file name)
const MAX_CUSTOM_ID_LENGTH: usize = 40;

/// Separators of a flat license list: " and ", " or " (any case, optionally after a
/// comma, padded with spaces or underscores) and bare commas
static LICENSE_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(,?[_\s]+(?i:or|and)[_\s]+)|(,\s*)").expect("license split regex is valid")
});

/// LicenseNormalizer - turns raw license declarations into canonical license ids
///
/// Compound expressions are flattened: "MIT OR Apache-2.0" and "MIT AND Apache-2.0"
/// both associate the component with both licenses.
pub struct LicenseNormalizer<'a> {
    alias_map: &'a LicenseAliasMap,
}

impl<'a> LicenseNormalizer<'a> {
    pub fn new(alias_map: &'a LicenseAliasMap) -> Self {
        Self { alias_map }
    }

    /// Resolves declarations to a sorted, deduplicated list of license ids
    ///
    /// Per declaration, in order:
    /// 1. an explicit id is taken verbatim
    /// 2. blank free text contributes nothing
    /// 3. an exact alias map hit wins and skips splitting
    /// 4. otherwise the text is split and each token becomes either a known
    ///    SPDX id or a synthesized `LicenseRef-` id
    pub fn normalize(&self, declarations: &[LicenseDeclaration]) -> Vec<String> {
        let mut ids = Vec::new();

        for declaration in declarations {
            if let Some(id) = declaration.explicit_id() {
                ids.push(id.to_string());
                continue;
            }

            let expression = declaration.free_text().trim();
            if expression.is_empty() {
                continue;
            }

            if let Some(mapped) = self.alias_map.lookup(expression) {
                ids.push(mapped.to_string());
                continue;
            }

            ids.extend(
                LICENSE_SPLIT_REGEX
                    .split(expression)
                    .filter_map(resolve_token),
            );
        }

        unique_sorted(ids)
    }
}

/// Maps one token of a split expression to a license id
fn resolve_token(token: &str) -> Option<String> {
    let token = token
        .trim()
        .trim_matches(|c| c == '(' || c == ')')
        .trim();
    if token.is_empty() {
        return None;
    }

    if let Some(rest) = token.strip_prefix(LICENSE_REF_PREFIX) {
        return custom_id(rest);
    }

    match canonical_spdx_id(token) {
        Some(id) => Some(id.to_string()),
        None => custom_id(token),
    }
}

fn custom_id(text: &str) -> Option<String> {
    let sanitized = sanitize_id(text);
    if sanitized.is_empty() {
        None
    } else {
        Some(format!("{}{}", LICENSE_REF_PREFIX, sanitized))
    }
}

/// Finds the canonical SPDX id for a loosely formatted token
///
/// Tries, in order: exact id, case-insensitive id, spaces replaced by hyphens,
/// full license name, and the same again without a trailing "License" word.
fn canonical_spdx_id(token: &str) -> Option<&'static str> {
    let licenses = spdx::identifiers::LICENSES;

    if let Some(id) = licenses
        .iter()
        .find(|(id, _, _)| *id == token)
        .map(|(id, _, _)| *id)
    {
        return Some(id);
    }

    let lookup = |candidate: &str| -> Option<&'static str> {
        let hyphenated = candidate.split_whitespace().collect::<Vec<_>>().join("-");
        licenses
            .iter()
            .find(|(id, full_name, _)| {
                id.eq_ignore_ascii_case(candidate)
                    || id.eq_ignore_ascii_case(&hyphenated)
                    || full_name.eq_ignore_ascii_case(candidate)
            })
            .map(|(id, _, _)| *id)
    };

    lookup(token).or_else(|| strip_license_suffix(token).and_then(lookup))
}

fn strip_license_suffix(token: &str) -> Option<&str> {
    let lower = token.to_ascii_lowercase();
    [" license", "-license", "_license"]
        .iter()
        .find(|suffix| lower.ends_with(*suffix))
        .map(|suffix| token[..token.len() - suffix.len()].trim())
        .filter(|rest| !rest.is_empty())
}

/// Replaces every run of non-alphanumeric characters with one hyphen, trims
/// hyphens at both ends and caps the length so the id stays usable as a file name
pub fn sanitize_id(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out.truncate(MAX_CUSTOM_ID_LENGTH);
    out.trim_matches('-').to_string()
}
