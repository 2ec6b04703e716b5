//! Provider redirect link resolution
//!
//! DuckDuckGo wraps result links as
//! `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.

/// Query parameter carrying the percent-encoded destination
const REDIRECT_PARAM: &str = "uddg=";

/// Resolve a listing link to its destination URL
///
/// Returns the percent-decoded `uddg` parameter when present, otherwise the
/// link unchanged. A parameter that does not decode to UTF-8 also leaves the
/// link unchanged.
#[must_use]
pub fn resolve_redirect_url(href: &str) -> String {
    let Some(pos) = href.find(REDIRECT_PARAM) else {
        return href.to_string();
    };

    let start = pos + REDIRECT_PARAM.len();
    let end = href[start..].find('&').map_or(href.len(), |i| start + i);

    urlencoding::decode(&href[start..end]).map_or_else(|_| href.to_string(), |url| url.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_redirect_parameter() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage%3Fa%3D1&rut=abc";
        assert_eq!(resolve_redirect_url(href), "https://example.com/page?a=1");
    }

    #[test]
    fn parameter_at_end_of_link() {
        let href = "/l/?kh=-1&uddg=https%3A%2F%2Frust-lang.org%2F";
        assert_eq!(resolve_redirect_url(href), "https://rust-lang.org/");
    }

    #[test]
    fn link_without_parameter_is_unchanged() {
        assert_eq!(
            resolve_redirect_url("https://example.com/direct"),
            "https://example.com/direct"
        );
    }

    #[test]
    fn plus_is_not_a_space() {
        let href = "/l/?uddg=https%3A%2F%2Fexample.com%2Fa+b";
        assert_eq!(resolve_redirect_url(href), "https://example.com/a+b");
    }

    #[test]
    fn invalid_utf8_leaves_link_unchanged() {
        let href = "/l/?uddg=%FF%FE";
        assert_eq!(resolve_redirect_url(href), href);
    }

    #[test]
    fn empty_parameter_decodes_to_empty() {
        assert_eq!(resolve_redirect_url("/l/?uddg=&rut=1"), "");
    }
}
