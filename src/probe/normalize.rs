use crate::core::constants::defaults::SCHEME_PREFIX;

/// Turn a raw input line into an absolute URL.
///
/// Surrounding whitespace is trimmed. Input without a recognizable
/// `<scheme>://` prefix gets `http://` in front of it. Never fails: anything
/// still malformed after this is left for the probe to reject.
///
/// # Examples
/// ```
/// use urlsweep::probe::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "http://example.com");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com");
/// ```
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{SCHEME_PREFIX}{trimmed}")
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`,
/// here required to be followed by `://`.
pub fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_normalize_url__adds_http_when_scheme_missing() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("example.com/path?q=1"), "http://example.com/path?q=1");
        assert_eq!(normalize_url("localhost:8080"), "http://localhost:8080");
    }

    #[test]
    fn test_normalize_url__keeps_existing_scheme() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("ftp://example.com"), "ftp://example.com");
        assert_eq!(normalize_url("svn+ssh://host/repo"), "svn+ssh://host/repo");
    }

    #[test]
    fn test_normalize_url__trims_whitespace() {
        assert_eq!(normalize_url("  example.com\n"), "http://example.com");
        assert_eq!(normalize_url("\thttps://example.com \r\n"), "https://example.com");
    }

    #[test]
    fn test_normalize_url__malformed_input_is_still_prefixed() {
        assert_eq!(normalize_url("bad url with spaces"), "http://bad url with spaces");
        assert_eq!(normalize_url("://missing-scheme"), "http://://missing-scheme");
        assert_eq!(normalize_url("1http://digit-first"), "http://1http://digit-first");
    }

    #[test]
    fn test_normalize_url__blank_line() {
        assert_eq!(normalize_url(""), "http://");
        assert_eq!(normalize_url("   "), "http://");
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://a"));
        assert!(has_scheme("a.b-c+d://x"));
        assert!(!has_scheme("example.com"));
        assert!(!has_scheme("mailto:someone@example.com"));
        assert!(!has_scheme("://x"));
        assert!(!has_scheme("ht tp://x"));
    }
}
