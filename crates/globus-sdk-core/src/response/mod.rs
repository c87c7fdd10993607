//! Response wrappers
//!
//! - `GlobusResponse<T>`: wraps any data and supports `get(key)` when the
//!   data is indexable
//! - `GlobusHttpResponse<R>`: wraps a received HTTP response, decoding the
//!   body as JSON on demand

mod error;
mod index;
mod base;
mod transport;
mod http;

pub use error::{ResponseError, ResponseResult};
pub use index::{Indexable, ResponseKey};
pub use base::GlobusResponse;
pub use transport::{TransportResponse, BufferedResponse};
pub use http::GlobusHttpResponse;
