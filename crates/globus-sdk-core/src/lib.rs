//! Globus SDK core
//!
//! The two pieces of the SDK that carry real precedence and fallback rules:
//!
//! ## Configuration
//!
//! `config` merges the packaged defaults, `/etc/globus.cfg` and the user's
//! `~/.globus.cfg` into one store and answers scoped lookups:
//!
//! ```rust,no_run
//! use globus_sdk_core::config::{self, LookupOptions};
//!
//! let transfer = config::get_service_url("default", "transfer")?;
//! let token = config::get_auth_token("default")?;
//!
//! let store = config::global()?;
//! let verbose = store.get(
//!     "verbose",
//!     &LookupOptions::new().with_environment("test").failover_to_general(),
//! )?;
//! # Ok::<(), globus_sdk_core::config::ConfigError>(())
//! ```
//!
//! ## Responses
//!
//! `response` wraps payloads and HTTP responses. JSON bodies are decoded on
//! access and indexing failures are reported with one error kind.

pub mod config;
pub mod response;

// Re-export commonly used types
pub use config::{
    ConfigStore, ConfigStoreBuilder, ConfigSource, ConfigLevel, ConfigError, ConfigResult,
    LookupOptions, FileConfigSource, MemoryConfigSource,
    EnvReader, ProcessEnv, MemoryEnv,
    global, get_service_url, get_auth_token,
};

pub use response::{
    GlobusResponse, GlobusHttpResponse,
    TransportResponse, BufferedResponse,
    Indexable, ResponseKey, ResponseError, ResponseResult,
};
