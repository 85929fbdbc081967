//! Cookie header helpers

use hyper::header::COOKIE;
use hyper::HeaderMap;

/// Name of the session cookie
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// Find the first cookie called `name` across all `Cookie` headers.
///
/// Surrounding double quotes on the value are dropped. Header values that
/// are not visible ASCII are skipped.
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.trim();
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
        })
}

/// Format a `Set-Cookie` value scoped to the whole site.
#[must_use]
pub fn format_set_cookie(name: &str, value: &str, secure: bool, http_only: bool) -> String {
    let secure_flag = if secure { "; Secure" } else { "" };
    let http_only_flag = if http_only { "; HttpOnly" } else { "" };
    format!("{name}={value}; Path=/{secure_flag}{http_only_flag}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    fn headers(values: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for value in values {
            map.append(COOKIE, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_find_single_cookie() {
        let map = headers(&["session_id=Abcd1234=="]);
        assert_eq!(find_cookie(&map, SESSION_COOKIE_NAME), Some("Abcd1234=="));
    }

    #[test]
    fn test_find_among_several() {
        let map = headers(&["theme=dark; session_id=xyz; lang=en"]);
        assert_eq!(find_cookie(&map, "session_id"), Some("xyz"));
        assert_eq!(find_cookie(&map, "lang"), Some("en"));
    }

    #[test]
    fn test_first_match_wins_across_headers() {
        let map = headers(&["a=1", "session_id=first", "session_id=second"]);
        assert_eq!(find_cookie(&map, "session_id"), Some("first"));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(find_cookie(&HeaderMap::new(), "session_id"), None);
        let map = headers(&["session=abc; session_idx=def"]);
        assert_eq!(find_cookie(&map, "session_id"), None);
    }

    #[test]
    fn test_quoted_value() {
        let map = headers(&["session_id=\"quoted\""]);
        assert_eq!(find_cookie(&map, "session_id"), Some("quoted"));
    }

    #[test]
    fn test_format_set_cookie() {
        assert_eq!(
            format_set_cookie("session_id", "abc=", true, true),
            "session_id=abc=; Path=/; Secure; HttpOnly"
        );
        assert_eq!(
            format_set_cookie("session_id", "abc=", true, false),
            "session_id=abc=; Path=/; Secure"
        );
    }
}
