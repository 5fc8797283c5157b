/// A single license declaration attached to an SBOM component
///
/// CycloneDX allows either a structured license (`{license: {id, name}}`)
/// or a free-form SPDX-ish expression (`{expression: "..."}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseDeclaration {
    /// Structured license; `id` may be empty, in which case `name` is used as free text
    License { id: String, name: String },
    /// Free-form expression such as "MIT OR Apache-2.0" or "Apache 2.0"
    Expression(String),
}

impl LicenseDeclaration {
    /// Declaration carrying an explicit license id
    pub fn id(id: impl Into<String>) -> Self {
        Self::License {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Declaration carrying only a free-text license name
    pub fn named(name: impl Into<String>) -> Self {
        Self::License {
            id: String::new(),
            name: name.into(),
        }
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        Self::Expression(expression.into())
    }

    /// Returns the explicit id when one is present and non-blank
    pub fn explicit_id(&self) -> Option<&str> {
        match self {
            Self::License { id, .. } if !id.trim().is_empty() => Some(id.as_str()),
            _ => None,
        }
    }

    /// Returns the free text to resolve when there is no explicit id
    pub fn free_text(&self) -> &str {
        match self {
            Self::License { name, .. } => name,
            Self::Expression(expression) => expression,
        }
    }
}

/// Component entry as it appears in the SBOM
///
/// Not unique on its own: the same package may be listed several times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Component {
    pub name: String,
    pub version: String,
    pub purl: String,
    pub supplier: String,
    pub copyright: String,
    pub licenses: Vec<LicenseDeclaration>,
}

impl Component {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = purl.into();
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    pub fn with_license(mut self, declaration: LicenseDeclaration) -> Self {
        self.licenses.push(declaration);
        self
    }
}

/// The parts of a CycloneDX SBOM the attribution engine reads
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sbom {
    pub components: Vec<Component>,
}

impl Sbom {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_id_present() {
        let declaration = LicenseDeclaration::License {
            id: "MIT".to_string(),
            name: "Ignored name".to_string(),
        };
        assert_eq!(declaration.explicit_id(), Some("MIT"));
    }

    #[test]
    fn test_explicit_id_blank_falls_back_to_name() {
        let declaration = LicenseDeclaration::License {
            id: "  ".to_string(),
            name: "Apache 2.0".to_string(),
        };
        assert_eq!(declaration.explicit_id(), None);
        assert_eq!(declaration.free_text(), "Apache 2.0");
    }

    #[test]
    fn test_expression_has_no_explicit_id() {
        let declaration = LicenseDeclaration::expression("MIT OR Apache-2.0");
        assert_eq!(declaration.explicit_id(), None);
        assert_eq!(declaration.free_text(), "MIT OR Apache-2.0");
    }

    #[test]
    fn test_component_builder() {
        let component = Component::new("serde", "1.0.0")
            .with_purl("pkg:cargo/serde@1.0.0")
            .with_supplier("dtolnay")
            .with_copyright("(c) David Tolnay")
            .with_license(LicenseDeclaration::id("MIT"));

        assert_eq!(component.name, "serde");
        assert_eq!(component.purl, "pkg:cargo/serde@1.0.0");
        assert_eq!(component.licenses.len(), 1);
    }
}
