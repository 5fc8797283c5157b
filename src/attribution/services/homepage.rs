use once_cell::sync::Lazy;
use regex::Regex;

/// `pkg:<type>/<namespace/name>@<version>`
static PURL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^pkg:([^/]+)/(.+)@([^@]+)$").expect("purl regex is valid"));

/// HomepageResolver - derives a package registry URL from a PURL
pub struct HomepageResolver;

impl HomepageResolver {
    /// Returns the registry/homepage URL for known ecosystems, None otherwise
    pub fn from_purl(purl: &str) -> Option<String> {
        let captures = PURL_REGEX.captures(purl)?;
        let purl_type = captures.get(1)?.as_str();
        let name = captures.get(2)?.as_str();

        match purl_type {
            "npm" => Some(format!("https://www.npmjs.com/package/{}", name)),
            "pypi" => Some(format!("https://pypi.org/project/{}/", name)),
            "cargo" => Some(format!("https://crates.io/crates/{}", name)),
            "golang" => Some(Self::golang_homepage(name)),
            _ => None,
        }
    }

    fn golang_homepage(module: &str) -> String {
        if let Some(rest) = module.strip_prefix("github.com/") {
            let mut parts = rest.split('/');
            if let (Some(owner), Some(repo)) = (parts.next(), parts.next()) {
                return format!("https://github.com/{}/{}", owner, repo);
            }
        }
        format!("https://pkg.go.dev/{}", module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_purl_has_no_homepage() {
        assert_eq!(HomepageResolver::from_purl(""), None);
        assert_eq!(HomepageResolver::from_purl("not-a-purl"), None);
    }

    #[test]
    fn test_registry_homepages() {
        assert_eq!(
            HomepageResolver::from_purl("pkg:npm/foo@1.2.30").as_deref(),
            Some("https://www.npmjs.com/package/foo")
        );
        assert_eq!(
            HomepageResolver::from_purl("pkg:pypi/bar@2.3.4").as_deref(),
            Some("https://pypi.org/project/bar/")
        );
        assert_eq!(
            HomepageResolver::from_purl("pkg:cargo/serde@1.0.200").as_deref(),
            Some("https://crates.io/crates/serde")
        );
    }

    #[test]
    fn test_golang_homepages() {
        assert_eq!(
            HomepageResolver::from_purl("pkg:golang/github.com/traefik/traefik@v3.6.0").as_deref(),
            Some("https://github.com/traefik/traefik")
        );
        assert_eq!(
            HomepageResolver::from_purl("pkg:golang/golang.org/x/baz@v4.5.6").as_deref(),
            Some("https://pkg.go.dev/golang.org/x/baz")
        );
    }

    #[test]
    fn test_unknown_ecosystem() {
        assert_eq!(
            HomepageResolver::from_purl("pkg:maven/com.example/qux@1.0.0"),
            None
        );
    }
}
