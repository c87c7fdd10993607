//! Generic response wrapper

use std::fmt;

use super::error::ResponseResult;
use super::index::{Indexable, ResponseKey};

/// A response that always wraps some data
///
/// The most common payload is a JSON document, so the wrapper supports
/// direct indexed access as an alias for indexing `data()`:
///
/// ```
/// use globus_sdk_core::response::GlobusResponse;
/// use serde_json::json;
///
/// let response = GlobusResponse::new(json!({"id": "abc"}));
/// assert_eq!(response.get("id").unwrap(), "abc");
///
/// let scalar = GlobusResponse::new(json!(5));
/// assert!(scalar.get(0usize).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GlobusResponse<T> {
    data: T,
}

impl<T> GlobusResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// The wrapped data, exactly as given
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: Indexable> GlobusResponse<T> {
    /// `data[key]`.
    ///
    /// Fails with `NotIndexable` when the data has no indexing support;
    /// a missing key or index is reported as such.
    pub fn get<'k>(&self, key: impl Into<ResponseKey<'k>>) -> ResponseResult<&T::Output> {
        self.data.index_by(key.into())
    }
}

impl<T> From<T> for GlobusResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: fmt::Debug> fmt::Display for GlobusResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GlobusResponse({:?})", self.data)
    }
}
