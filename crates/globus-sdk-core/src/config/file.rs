//! File-based configuration sources
//!
//! Default search order, lowest priority first:
//! 1. packaged `globus.cfg` compiled into the library
//! 2. system file (`/etc/globus.cfg`, `%PROGRAMDATA%\globus.cfg` on Windows)
//! 3. `<config dir>/globus/globus.cfg` (`~/.config` on Linux, `~/Library/Application Support` on macOS)
//! 4. `~/.globus.cfg`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::memory::MemoryConfigSource;
use super::traits::{ConfigError, ConfigLevel, ConfigResult, ConfigSource};

/// Name of the config file in every location
pub const CONFIG_FILE_NAME: &str = "globus.cfg";

/// A configuration file on disk
///
/// A missing or unreadable file is not an error, it is simply skipped when
/// the store is built.
///
/// # Example
///
/// ```no_run
/// use globus_sdk_core::config::FileConfigSource;
///
/// let user = FileConfigSource::user_dotfile();
/// let custom = FileConfigSource::new("/opt/globus/site.cfg", globus_sdk_core::config::ConfigLevel::System);
/// ```
pub struct FileConfigSource {
    path: PathBuf,
    name: String,
    level: ConfigLevel,
}

impl FileConfigSource {
    /// Create a file source for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name, level }
    }

    /// The system-wide file, if the platform has a location for one
    pub fn system() -> Option<Self> {
        system_config_path().map(|path| Self::new(path, ConfigLevel::System))
    }

    /// `globus/globus.cfg` under the platform config directory
    pub fn user_config_dir() -> Option<Self> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join("globus").join(CONFIG_FILE_NAME), ConfigLevel::User))
    }

    /// `~/.globus.cfg`
    pub fn user_dotfile() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(".globus.cfg"), ConfigLevel::User)
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl std::fmt::Debug for FileConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigSource")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

impl ConfigSource for FileConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> ConfigLevel {
        self.level
    }

    fn read(&self) -> ConfigResult<Option<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "skipping unreadable config source");
                return Ok(None);
            }
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| ConfigError::invalid_encoding(&self.name))
    }
}

#[cfg(unix)]
fn system_config_path() -> Option<PathBuf> {
    Some(PathBuf::from("/etc").join(CONFIG_FILE_NAME))
}

#[cfg(windows)]
fn system_config_path() -> Option<PathBuf> {
    std::env::var_os("PROGRAMDATA").map(|dir| PathBuf::from(dir).join(CONFIG_FILE_NAME))
}

#[cfg(not(any(unix, windows)))]
fn system_config_path() -> Option<PathBuf> {
    None
}

/// The standard sources in merge order (lowest priority first)
pub fn default_sources() -> Vec<Box<dyn ConfigSource>> {
    let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(MemoryConfigSource::packaged())];

    if let Some(system) = FileConfigSource::system() {
        sources.push(Box::new(system));
    }
    if let Some(config_dir) = FileConfigSource::user_config_dir() {
        sources.push(Box::new(config_dir));
    }
    sources.push(Box::new(FileConfigSource::user_dotfile()));

    sources
}
