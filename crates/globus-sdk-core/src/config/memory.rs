//! In-memory configuration source

use super::traits::{ConfigLevel, ConfigResult, ConfigSource};

/// Defaults shipped inside the library
pub const PACKAGED_CONFIG: &str = include_str!("../../data/globus.cfg");

/// Configuration text held in memory
///
/// Used for the packaged defaults and for tests that don't want to touch
/// the filesystem.
#[derive(Debug, Clone)]
pub struct MemoryConfigSource {
    name: String,
    level: ConfigLevel,
    text: String,
}

impl MemoryConfigSource {
    /// Create a new in-memory source
    pub fn new(name: impl Into<String>, level: ConfigLevel, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            text: text.into(),
        }
    }

    /// The `globus.cfg` compiled into the library
    pub fn packaged() -> Self {
        Self::new("<packaged globus.cfg>", ConfigLevel::Packaged, PACKAGED_CONFIG)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ConfigSource for MemoryConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> ConfigLevel {
        self.level
    }

    fn read(&self) -> ConfigResult<Option<String>> {
        Ok(Some(self.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_always_reads() {
        let source = MemoryConfigSource::new("inline", ConfigLevel::User, "a = 1\n");
        assert_eq!(source.name(), "inline");
        assert_eq!(source.level(), ConfigLevel::User);
        assert_eq!(source.read().unwrap().as_deref(), Some("a = 1\n"));
    }

    #[test]
    fn test_packaged_defaults_define_production_services() {
        let source = MemoryConfigSource::packaged();
        assert_eq!(source.level(), ConfigLevel::Packaged);
        assert!(source.text().contains("[environment default]"));
        assert!(source.text().contains("auth_service"));
    }
}
