//! Layered configuration
//!
//! Sources, lowest priority first:
//! - `MemoryConfigSource::packaged()`: defaults compiled into the library
//! - `FileConfigSource::system()`: `/etc/globus.cfg`
//! - `FileConfigSource::user_config_dir()` and `FileConfigSource::user_dotfile()`
//!
//! They are merged into one [`ConfigStore`]. The process-wide store is
//! available through [`global`], [`get_service_url`] and [`get_auth_token`].

mod traits;
mod memory;
mod file;
mod parser;
mod env;
mod store;
mod global;

pub use traits::{ConfigSource, ConfigLevel, ConfigError, ConfigResult};
pub use memory::{MemoryConfigSource, PACKAGED_CONFIG};
pub use file::{FileConfigSource, default_sources, CONFIG_FILE_NAME};
pub use parser::{parse, ParsedSection, GENERAL_SECTION, DEFAULT_SECTION};
pub use env::{EnvReader, ProcessEnv, MemoryEnv, env_var_name, ENV_PREFIX};
pub use store::{ConfigStore, ConfigStoreBuilder, LookupOptions, MAX_INTERPOLATION_DEPTH};
pub use global::{global, get_service_url, get_auth_token};
