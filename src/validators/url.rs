use url::{Host, ParseError, Url};

use super::domain;
use crate::reason::InvalidReason;
use crate::suffix::SuffixProvider;

/// Validate `value` as an absolute http(s) URL.
///
/// Scheme-relative and bare-host forms are rejected; `javascript:` and
/// `data:` are rejected anywhere in the string, not just as the scheme,
/// since this input arrives by paste. The normalized form is the `url`
/// crate's serialization: lowercase scheme and host, path case preserved.
pub(crate) fn check(value: &str, suffixes: &dyn SuffixProvider) -> Result<String, InvalidReason> {
    if value.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidReason::Whitespace);
    }

    let lower = value.to_ascii_lowercase();
    if lower.contains("javascript:") || lower.contains("data:") {
        return Err(InvalidReason::UnsafeScheme);
    }
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(InvalidReason::MissingScheme);
    }
    // Checked on the raw string: the parser resolves dot segments away
    // before `path()` could see them. Everything past the authority counts.
    let after_scheme = &value[value.find("://").map(|i| i + 3).unwrap_or(0)..];
    if let Some(slash) = after_scheme.find('/') {
        if after_scheme[slash..].contains("..") {
            return Err(InvalidReason::PathTraversal);
        }
    }

    let url = Url::parse(value).map_err(|e| match e {
        ParseError::InvalidPort => InvalidReason::BadPort,
        ParseError::EmptyHost => InvalidReason::BadHost,
        _ => InvalidReason::BadUrl,
    })?;

    if url.port() == Some(0) {
        return Err(InvalidReason::BadPort);
    }

    match url.host() {
        Some(Host::Domain(host)) => {
            domain::check(host, false, suffixes).map_err(|_| InvalidReason::BadHost)?;
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        None => return Err(InvalidReason::BadHost),
    }

    Ok(url.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix::BundledSuffixes;

    fn check_url(value: &str) -> Result<String, InvalidReason> {
        check(value, &BundledSuffixes)
    }

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(check_url("http://foo.com").unwrap(), "http://foo.com/");
        assert_eq!(
            check_url("https://api.example.com/v1/Assets").unwrap(),
            "https://api.example.com/v1/Assets"
        );
        assert_eq!(
            check_url("https://example.com:8443/x").unwrap(),
            "https://example.com:8443/x"
        );
    }

    #[test]
    fn normalizes_scheme_and_host_but_not_path() {
        assert_eq!(
            check_url("HTTPS://API.Example.COM/Keep/Case").unwrap(),
            "https://api.example.com/Keep/Case"
        );
    }

    #[test]
    fn accepts_ip_hosts() {
        assert_eq!(check_url("http://192.168.1.1/admin").unwrap(), "http://192.168.1.1/admin");
        assert_eq!(check_url("http://[::1]:8080/").unwrap(), "http://[::1]:8080/");
    }

    #[test]
    fn rejects_missing_or_foreign_scheme() {
        assert_eq!(check_url("foo.com/path"), Err(InvalidReason::MissingScheme));
        assert_eq!(check_url("//foo.com/path"), Err(InvalidReason::MissingScheme));
        assert_eq!(check_url("ftp://foo.com"), Err(InvalidReason::MissingScheme));
    }

    #[test]
    fn rejects_unsafe_schemes_anywhere() {
        assert_eq!(check_url("javascript:alert(1)"), Err(InvalidReason::UnsafeScheme));
        assert_eq!(check_url("data:text/html,x"), Err(InvalidReason::UnsafeScheme));
        assert_eq!(
            check_url("http://foo.com/?next=javascript:alert(1)"),
            Err(InvalidReason::UnsafeScheme)
        );
    }

    #[test]
    fn rejects_bad_hosts() {
        assert_eq!(check_url("http://localhost/x"), Err(InvalidReason::BadHost));
        assert_eq!(check_url("http://not_a_host.com/x"), Err(InvalidReason::BadHost));
    }

    #[test]
    fn rejects_bad_ports() {
        assert_eq!(check_url("http://foo.com:0/"), Err(InvalidReason::BadPort));
        assert_eq!(check_url("http://foo.com:99999/"), Err(InvalidReason::BadPort));
    }

    #[test]
    fn rejects_path_traversal_and_whitespace() {
        assert_eq!(
            check_url("http://foo.com/../etc/passwd"),
            Err(InvalidReason::PathTraversal)
        );
        assert_eq!(
            check_url("http://foo.com/a..b"),
            Err(InvalidReason::PathTraversal)
        );
        assert_eq!(check_url("http://foo.com/a b"), Err(InvalidReason::Whitespace));
    }
}
