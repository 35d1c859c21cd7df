//! Target URL validation.
//!
//! Only absolute `http` and `https` URLs may be shortened. The check is purely
//! syntactic: no DNS lookups, no requests.

use url::Url;

/// Schemes a short link may redirect to.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Checks whether `input` is an acceptable redirect target.
///
/// The input must parse as an absolute URL with scheme `http` or `https`.
/// The raw string is stored as-is and later sent back in the `Location`
/// header, so input the parser would quietly clean up (surrounding
/// whitespace, embedded tabs or newlines) is rejected instead.
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_validator::is_valid_target_url;
///
/// assert!(is_valid_target_url("https://example.com/path?q=1#top"));
/// assert!(!is_valid_target_url("ftp://example.com"));
/// assert!(!is_valid_target_url("javascript:alert(1)"));
/// assert!(!is_valid_target_url("/relative/path"));
/// ```
pub fn is_valid_target_url(input: &str) -> bool {
    if input.is_empty() || input.trim() != input || input.chars().any(|c| c.is_ascii_control()) {
        return false;
    }

    match Url::parse(input) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()) && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        assert!(is_valid_target_url("http://example.com"));
        assert!(is_valid_target_url("http://www.example.com"));
    }

    #[test]
    fn test_accepts_https() {
        assert!(is_valid_target_url("https://example.com"));
        assert!(is_valid_target_url("https://www.example.com/path"));
    }

    #[test]
    fn test_accepts_query_and_fragment() {
        assert!(is_valid_target_url("https://example.com?param=value"));
        assert!(is_valid_target_url("https://example.com/page#section"));
        assert!(is_valid_target_url(
            "https://example.com/a/b?x=1&y=two#frag"
        ));
    }

    #[test]
    fn test_accepts_ports_and_ip_hosts() {
        assert!(is_valid_target_url("http://localhost:8080/health"));
        assert!(is_valid_target_url("http://127.0.0.1/"));
        assert!(is_valid_target_url("https://[::1]:8443/"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(is_valid_target_url("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_valid_target_url("ftp://example.com"));
        assert!(!is_valid_target_url("javascript:alert(1)"));
        assert!(!is_valid_target_url("data:text/html,<h1>hi</h1>"));
        assert!(!is_valid_target_url("file:///etc/passwd"));
        assert!(!is_valid_target_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_rejects_empty_and_relative() {
        assert!(!is_valid_target_url(""));
        assert!(!is_valid_target_url("not-a-url"));
        assert!(!is_valid_target_url("example.com"));
        assert!(!is_valid_target_url("/relative/path"));
        assert!(!is_valid_target_url("//example.com"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_target_url("http://"));
        assert!(!is_valid_target_url("https://exa mple.com"));
        assert!(!is_valid_target_url("http://[::1"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace_and_controls() {
        assert!(!is_valid_target_url(" https://example.com"));
        assert!(!is_valid_target_url("https://example.com "));
        assert!(!is_valid_target_url("https://example.com/\npath"));
        assert!(!is_valid_target_url("https://exam\tple.com"));
    }
}
