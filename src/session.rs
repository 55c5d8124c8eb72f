use axum::http::{header, HeaderMap, HeaderName};
use std::fmt;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "focus_session";

/// Key of one client's dashboard, carried in the `focus_session` cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reads the session cookie; malformed values count as absent.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
            .map(Self)
    }

    pub fn set_cookie(&self) -> [(HeaderName, String); 1] {
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.0),
        )]
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_session_among_other_cookies() {
        let id = SessionId::generate();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}; lang=en")).unwrap(),
        );
        assert_eq!(SessionId::from_headers(&headers), Some(id));
    }

    #[test]
    fn ignores_missing_or_malformed_cookie() {
        let mut headers = HeaderMap::new();
        assert_eq!(SessionId::from_headers(&headers), None);

        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("focus_session=not-a-uuid"),
        );
        assert_eq!(SessionId::from_headers(&headers), None);
    }

    #[test]
    fn set_cookie_round_trips() {
        let id = SessionId::generate();
        let [(name, value)] = id.set_cookie();
        assert_eq!(name, header::SET_COOKIE);
        let cookie = value.split(';').next().unwrap().to_string();

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(&cookie).unwrap());
        assert_eq!(SessionId::from_headers(&headers), Some(id));
    }
}
