//! HTTP transport used by [`GeniusApi`](super::GeniusApi).
//!
//! The client only needs "GET this URL with these parameters and headers,
//! give me the status and the body". [`ReqwestTransport`] is the default;
//! tests and callers with their own stack can plug in another implementation.

use async_trait::async_trait;

use crate::error::Result;

/// User agent sent by the default transport.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An outgoing GET request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Absolute URL without query string.
    pub url: String,
    /// Query parameters, in order.
    pub query: Vec<(&'static str, String)>,
    /// Request headers.
    pub headers: Vec<(&'static str, String)>,
}

impl HttpRequest {
    /// Value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, see [`decode_body`].
    pub body: String,
}

/// Turn raw body bytes into text.
///
/// The bytes are taken as UTF-8 whatever the `Content-Type` charset says, so
/// UTF-8 bodies come through byte for byte. Invalid sequences are replaced
/// with U+FFFD.
pub fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Transport able to perform a GET request.
///
/// Implementations must not interpret the status; the client does that.
/// Failures of non-reqwest transports are reported as
/// [`GeniusError::Transport`](crate::error::GeniusError::Transport).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    /// Create a transport with a fresh `reqwest` client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Wrap an existing `reqwest` client (timeouts, proxies, pooling...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = decode_body(&response.bytes().await?);

        Ok(HttpResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeniusError;

    #[test]
    fn test_request_lookup_helpers() {
        let request = HttpRequest {
            url: "https://api.genius.com/search".to_string(),
            query: vec![("q", "token".to_string())],
            headers: vec![("Authorization", "Bearer abc".to_string())],
        };
        assert_eq!(request.query_param("q"), Some("token"));
        assert_eq!(request.query_param("page"), None);
        assert_eq!(request.header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_mock_records_requests() {
        let mock = mocks::MockTransport::new(500, "rate limited");
        let request = HttpRequest {
            url: "https://api.genius.com/account/".to_string(),
            query: Vec::new(),
            headers: Vec::new(),
        };

        let response = tokio_test::block_on(mock.get(request.clone())).unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(response.body, "rate limited");
        assert_eq!(mock.last_request(), Some(request));
    }

    #[test]
    fn test_mock_transport_failure() {
        let mock = mocks::MockTransport::failing("connection refused");
        let request = HttpRequest {
            url: "https://api.genius.com/search".to_string(),
            query: Vec::new(),
            headers: Vec::new(),
        };

        let err = tokio_test::block_on(mock.get(request)).unwrap_err();
        assert!(matches!(err, GeniusError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(mock.requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body("rate limited".as_bytes()), "rate limited");
        assert_eq!(decode_body("Beyoncé".as_bytes()), "Beyoncé");
        assert_eq!(decode_body(&[b'o', b'k', 0xff]), "ok\u{fffd}");
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("genius/"));
    }
}
