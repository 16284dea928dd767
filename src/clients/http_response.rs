//! HTTP response type for the Chainstarters SDK.

/// A raw HTTP response from the Chainstarters API.
///
/// The body is kept as text so non-200 responses can be surfaced verbatim.
///
/// # Example
///
/// ```rust
/// use chainstarters::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, None, r#"{"data":{}}"#.to_string());
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The `X-Request-Id` header value, if the server sent one.
    pub request_id: Option<String>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, request_id: Option<String>, body: String) -> Self {
        Self {
            code,
            request_id,
            body,
        }
    }

    /// Returns `true` only for HTTP 200.
    ///
    /// Other 2xx codes are not treated as success by the GraphQL endpoint.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_ok() {
        assert!(HttpResponse::new(200, None, String::new()).is_ok());
        assert!(!HttpResponse::new(201, None, String::new()).is_ok());
        assert!(!HttpResponse::new(204, None, String::new()).is_ok());
        assert!(!HttpResponse::new(500, None, String::new()).is_ok());
    }

    #[test]
    fn test_request_id_accessor() {
        let response = HttpResponse::new(500, Some("req-1".to_string()), "oops".to_string());
        assert_eq!(response.request_id(), Some("req-1"));

        let response = HttpResponse::new(200, None, String::new());
        assert!(response.request_id().is_none());
    }
}
