//! Transport response abstraction
//!
//! The HTTP wrapper never talks to the network. It only needs a response
//! that has already been received, exposed through [`TransportResponse`].
//! [`BufferedResponse`] is the stock implementation and can be captured from
//! a `reqwest::Response`.

use std::borrow::Cow;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ResponseResult;

/// A fully received HTTP response
pub trait TransportResponse {
    /// HTTP status code
    fn status_code(&self) -> u16;

    /// Value of a header (case-insensitive name), if present and readable
    fn header(&self, name: &str) -> Option<&str>;

    /// Raw body
    fn text(&self) -> Cow<'_, str>;

    /// Parse the body as JSON, failing if it is not valid JSON
    fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.text())
    }
}

/// An HTTP response held entirely in memory
///
/// # Example
///
/// ```
/// use globus_sdk_core::response::{BufferedResponse, TransportResponse};
///
/// let response = BufferedResponse::new(200)
///     .with_header("Content-Type", "application/json")
///     .with_body(r#"{"id": 7}"#);
///
/// assert_eq!(response.status_code(), 200);
/// assert_eq!(response.header("content-type"), Some("application/json"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferedResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl BufferedResponse {
    /// Create an empty response with the given status
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    /// Set a header, replacing any previous value.
    ///
    /// Names or values that are not valid HTTP are dropped with a warning.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => warn!(header = name, "ignoring invalid HTTP header"),
        }
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// JSON body with a matching `Content-Type`
    pub fn with_json(self, body: &Value) -> Self {
        self.with_header("Content-Type", "application/json")
            .with_body(body.to_string())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Read a `reqwest` response to completion
    pub async fn from_reqwest(response: reqwest::Response) -> ResponseResult<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "captured HTTP response");

        Ok(Self {
            status,
            headers,
            body,
        })
    }
}

impl TransportResponse for BufferedResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.body)
    }
}
