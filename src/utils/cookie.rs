//! Minimal `Cookie` / `Set-Cookie` handling for the session cookie.

use axum::http::{HeaderMap, header::COOKIE};

/// Finds the value of cookie `name` across all `Cookie` headers.
///
/// Multiple cookies per header are split on `;`; other cookies are ignored.
pub fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Builds a session `Set-Cookie` value.
///
/// The cookie has no `Max-Age`, so browsers drop it when the browser session
/// ends. The server side expires it separately after idle time.
pub fn session_cookie(name: &str, value: &str, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_find_cookie_among_many() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; articlegen_session=abc123; lang=te"),
        );

        assert_eq!(
            find_cookie(&headers, "articlegen_session").as_deref(),
            Some("abc123")
        );
        assert_eq!(find_cookie(&headers, "theme").as_deref(), Some("dark"));
        assert_eq!(find_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_find_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("articlegen_session=xyz"));

        assert_eq!(
            find_cookie(&headers, "articlegen_session").as_deref(),
            Some("xyz")
        );
    }

    #[test]
    fn test_empty_value_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("articlegen_session="));

        assert_eq!(find_cookie(&headers, "articlegen_session"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        assert_eq!(
            session_cookie("sid", "v", false),
            "sid=v; Path=/; HttpOnly; SameSite=Lax"
        );
        assert!(session_cookie("sid", "v", true).ends_with("; Secure"));
    }
}
