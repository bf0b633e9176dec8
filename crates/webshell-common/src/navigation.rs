//! Navigation allow-list.
//!
//! A navigation may proceed only when the URL parses, uses the `https`
//! scheme, and names a host on the allow-list. Anything else fails closed.

use std::collections::BTreeSet;

use tracing::warn;
use url::{Host, Url};

/// The only scheme the embedded page may navigate to.
pub const ALLOWED_SCHEME: &str = "https";

/// Hosts allowed when no configuration overrides them.
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &["example.com", "www.example.com", "api.example.com"];

/// Why a navigation request was blocked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationRejection {
    #[error("unparseable URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("scheme '{0}' is not allowed")]
    DisallowedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("host '{0}' is not in the allow-list")]
    DisallowedHost(String),
}

/// Why an allow-list entry cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHost {
    #[error("empty host")]
    Empty,

    #[error("wildcards are not supported; list each host explicitly")]
    Wildcard,

    #[error("not a valid host name: {0}")]
    Malformed(#[from] url::ParseError),
}

/// Normalize one allow-list entry the way `url` normalizes a URL's host
/// (trimmed, lowercased, IDNA-encoded).
pub fn normalize_host(raw: &str) -> Result<String, InvalidHost> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InvalidHost::Empty);
    }
    // `Host::parse` accepts `*` as an ordinary label character.
    if raw.contains('*') {
        return Err(InvalidHost::Wildcard);
    }
    Ok(Host::parse(raw)?.to_string())
}

/// Allow-list of hosts reachable over `https`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPolicy {
    allowed_hosts: BTreeSet<String>,
}

impl NavigationPolicy {
    /// Build a policy from host names.
    ///
    /// Entries go through [`normalize_host`]. Empty entries are ignored and
    /// unusable ones are skipped with a warning.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allowed_hosts = BTreeSet::new();
        for host in hosts {
            let raw = host.as_ref();
            match normalize_host(raw) {
                Ok(normalized) => {
                    allowed_hosts.insert(normalized);
                }
                Err(InvalidHost::Empty) => {}
                Err(e) => warn!(host = %raw.trim(), error = %e, "ignoring invalid allow-list host"),
            }
        }
        Self { allowed_hosts }
    }

    /// Check a URL, returning the parsed URL or the reason it is blocked.
    pub fn check(&self, raw: &str) -> Result<Url, NavigationRejection> {
        let url = Url::parse(raw)?;

        if url.scheme() != ALLOWED_SCHEME {
            return Err(NavigationRejection::DisallowedScheme(url.scheme().to_string()));
        }

        let host = url.host_str().ok_or(NavigationRejection::MissingHost)?;
        if !self.allowed_hosts.contains(host) {
            return Err(NavigationRejection::DisallowedHost(host.to_string()));
        }

        Ok(url)
    }

    /// Whether a navigation to `raw` may proceed.
    pub fn validate(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }

    pub fn allowed_hosts(&self) -> impl Iterator<Item = &str> {
        self.allowed_hosts.iter().map(String::as_str)
    }
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_HOSTS)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> NavigationPolicy {
        NavigationPolicy::default()
    }

    // -- Allowed URLs --

    #[test]
    fn allows_allow_listed_https_pages() {
        assert!(policy().validate("https://www.example.com/page"));
        assert!(policy().validate("https://example.com"));
        assert!(policy().validate("https://api.example.com/v1/user?id=7#top"));
    }

    #[test]
    fn allows_non_default_port_on_allowed_host() {
        assert!(policy().validate("https://www.example.com:8443/"));
    }

    #[test]
    fn scheme_and_host_are_case_insensitive() {
        assert!(policy().validate("HTTPS://WWW.EXAMPLE.COM/Page"));
    }

    // -- Blocked URLs --

    #[test]
    fn blocks_http_unencrypted() {
        assert_eq!(
            policy().check("http://www.example.com"),
            Err(NavigationRejection::DisallowedScheme("http".into()))
        );
        assert!(!policy().validate("http://example.com/login"));
    }

    #[test]
    fn blocks_hosts_outside_allow_list() {
        assert_eq!(
            policy().check("https://evil.com"),
            Err(NavigationRejection::DisallowedHost("evil.com".into()))
        );
        assert!(!policy().validate("https://google.com"));
        assert!(!policy().validate("https://cdn.example.com/app.js"));
    }

    #[test]
    fn blocks_lookalike_hosts() {
        assert!(!policy().validate("https://example.com.evil.com/"));
        assert!(!policy().validate("https://wwwexample.com/"));
        assert!(!policy().validate("https://example.co/"));
        // Userinfo does not change the host.
        assert!(!policy().validate("https://www.example.com@evil.com/"));
    }

    #[test]
    fn blocks_other_protocols() {
        assert!(!policy().validate("file:///etc/passwd"));
        assert!(!policy().validate("javascript:alert(1)"));
        assert!(!policy().validate("data:text/html,<h1>XSS</h1>"));
        assert!(!policy().validate("ftp://example.com/file"));
        assert!(!policy().validate("about:blank"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(matches!(
            policy().check(""),
            Err(NavigationRejection::InvalidUrl(_))
        ));
        assert!(!policy().validate("   "));
        assert!(!policy().validate("not-a-url"));
        assert!(!policy().validate("www.example.com/page"));
        assert!(!policy().validate("https://"));
    }

    #[test]
    fn blocks_ip_hosts_not_listed() {
        assert!(!policy().validate("https://127.0.0.1/"));
        assert!(!policy().validate("https://[::1]/"));
    }

    // -- Allow-list structure --

    #[test]
    fn default_allow_list_has_expected_entries() {
        let binding = policy();
        let hosts: Vec<&str> = binding.allowed_hosts().collect();
        assert_eq!(hosts, vec!["api.example.com", "example.com", "www.example.com"]);
    }

    #[test]
    fn entries_are_normalized_and_invalid_ones_skipped() {
        let p = NavigationPolicy::new([" Shop.Example.ORG ", "", "bad host/"]);
        let hosts: Vec<&str> = p.allowed_hosts().collect();
        assert_eq!(hosts, vec!["shop.example.org"]);
        assert!(p.validate("https://shop.example.org/cart"));
    }

    #[test]
    fn internationalized_entries_match_punycode_hosts() {
        let p = NavigationPolicy::new(["bücher.example"]);
        assert_eq!(p.allowed_hosts().collect::<Vec<_>>(), vec!["xn--bcher-kva.example"]);
        assert!(p.validate("https://bücher.example/"));
        assert!(p.validate("https://xn--bcher-kva.example/katalog"));
    }

    #[test]
    fn wildcard_entries_are_refused() {
        assert_eq!(normalize_host("*.example.com"), Err(InvalidHost::Wildcard));
        let p = NavigationPolicy::new(["*.example.com", "example.com"]);
        assert_eq!(p.allowed_hosts().collect::<Vec<_>>(), vec!["example.com"]);
        assert!(!p.validate("https://shop.example.com/"));
    }

    #[test]
    fn normalize_host_reports_each_failure() {
        assert_eq!(normalize_host("  "), Err(InvalidHost::Empty));
        assert!(matches!(
            normalize_host("bad host/"),
            Err(InvalidHost::Malformed(_))
        ));
        assert_eq!(normalize_host(" API.Example.COM "), Ok("api.example.com".to_string()));
    }

    #[test]
    fn empty_policy_blocks_everything() {
        let p = NavigationPolicy::new(Vec::<String>::new());
        assert!(!p.validate("https://www.example.com"));
    }
}
