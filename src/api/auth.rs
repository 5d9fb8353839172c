use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

pub const TENANT_CODE_HEADER: &str = "aw-tenant-code";

/// Assembles the fixed header set for API v1 Basic authentication:
/// tenant code, JSON content negotiation, and `Basic base64(user:pass)`.
pub fn build_headers(username: &str, password: &str, tenant_code: &str) -> Result<HeaderMap> {
    let encoded = STANDARD.encode(format!("{username}:{password}"));

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TENANT_CODE_HEADER),
        HeaderValue::from_str(tenant_code).context("Tenant code is not a valid header value")?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut authorization = HeaderValue::from_str(&format!("Basic {encoded}"))
        .context("Credentials are not a valid header value")?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_basic_auth() {
        let headers = build_headers("user", "pass", "tcode").unwrap();
        // base64("user:pass")
        assert_eq!(headers[AUTHORIZATION], "Basic dXNlcjpwYXNz");
        assert_eq!(headers[TENANT_CODE_HEADER], "tcode");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn is_deterministic() {
        let a = build_headers("u", "p", "t").unwrap();
        let b = build_headers("u", "p", "t").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_credentials_invalid_in_headers() {
        assert!(build_headers("user", "pass", "bad\ncode").is_err());
    }
}
