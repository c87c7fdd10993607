//! HTTP response wrapper
//!
//! Wraps a received HTTP response. If the body is JSON, the parsed document
//! is available from `data()`; otherwise `data()` is `None` and `text()`
//! should be used instead. The body is decoded again on every call to
//! `data()` (and so on every indexed access); nothing is cached.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use tracing::trace;

use super::base::GlobusResponse;
use super::error::ResponseResult;
use super::index::{Indexable, ResponseKey};
use super::transport::{BufferedResponse, TransportResponse};

/// Response wrapping a transport-level HTTP response
///
/// # Example
///
/// ```
/// use globus_sdk_core::response::{BufferedResponse, GlobusHttpResponse};
///
/// let response = GlobusHttpResponse::new(
///     BufferedResponse::new(200)
///         .with_header("Content-Type", "application/json")
///         .with_body(r#"{"id": 7}"#),
/// );
///
/// assert_eq!(response.http_status(), 200);
/// assert_eq!(response.get("id").unwrap(), 7);
/// assert_eq!(response.text(), r#"{"id": 7}"#);
/// ```
#[derive(Debug, Clone)]
pub struct GlobusHttpResponse<R = BufferedResponse> {
    inner: GlobusResponse<R>,
    http_status: u16,
    content_type: Option<String>,
}

impl<R: TransportResponse> GlobusHttpResponse<R> {
    /// Wrap a response; status and content type are captured now
    pub fn new(response: R) -> Self {
        let http_status = response.status_code();
        let content_type = response.header("Content-Type").map(str::to_owned);
        Self {
            inner: GlobusResponse::new(response),
            http_status,
            content_type,
        }
    }

    /// HTTP status code returned by the server
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// `Content-Type` header returned by the server, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The body parsed as JSON, or `None` if it is not JSON
    pub fn data(&self) -> Option<Value> {
        match self.inner.data().json() {
            Ok(value) => Some(value),
            Err(e) => {
                trace!(status = self.http_status, error = %e, "response body is not JSON");
                None
            }
        }
    }

    /// The raw body, whether or not it is JSON
    pub fn text(&self) -> Cow<'_, str> {
        self.inner.data().text()
    }

    /// `data()[key]`.
    ///
    /// A non-JSON body has no data and fails with `NotIndexable`, like any
    /// other value without indexing support.
    pub fn get<'k>(&self, key: impl Into<ResponseKey<'k>>) -> ResponseResult<Value> {
        let data = self.data();
        data.index_by(key.into()).cloned()
    }

    /// The wrapped transport response
    pub fn response(&self) -> &R {
        self.inner.data()
    }

    pub fn into_response(self) -> R {
        self.inner.into_inner()
    }
}

impl GlobusHttpResponse<BufferedResponse> {
    /// Capture a `reqwest` response and wrap it
    pub async fn from_reqwest(response: reqwest::Response) -> ResponseResult<Self> {
        Ok(Self::new(BufferedResponse::from_reqwest(response).await?))
    }
}

impl<R: TransportResponse> From<R> for GlobusHttpResponse<R> {
    fn from(response: R) -> Self {
        Self::new(response)
    }
}

impl<R: TransportResponse> fmt::Display for GlobusHttpResponse<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            Some(data) => write!(f, "GlobusHttpResponse({data})"),
            None => f.write_str("GlobusHttpResponse(None)"),
        }
    }
}
