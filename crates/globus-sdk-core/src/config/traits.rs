//! Configuration source trait and errors

/// Where a configuration source sits in the override order.
///
/// Sources are merged lowest level first, so a `User` file overrides the
/// `System` file, which overrides the `Packaged` defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLevel {
    /// Defaults compiled into the library
    Packaged,
    /// System-wide file (`/etc/globus.cfg`)
    System,
    /// Per-user file (`~/.globus.cfg`)
    User,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::Packaged => "packaged",
            ConfigLevel::System => "system",
            ConfigLevel::User => "user",
        }
    }
}

impl std::fmt::Display for ConfigLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place configuration text can be read from
///
/// Implementations:
/// - `FileConfigSource`: a path on disk that may or may not exist
/// - `MemoryConfigSource`: text held in memory (packaged defaults, tests)
pub trait ConfigSource: Send + Sync {
    /// Name used in logs and parse errors (usually the path)
    fn name(&self) -> &str;

    /// Override level of this source
    fn level(&self) -> ConfigLevel;

    /// Read the full text of the source.
    ///
    /// `Ok(None)` means the source is absent or unreadable and should be
    /// skipped. `Err` is reserved for content that exists but can never be
    /// parsed.
    fn read(&self) -> ConfigResult<Option<String>>;
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{source_name}, line {line}: section [{section}] is declared more than once")]
    DuplicateSection {
        source_name: String,
        line: usize,
        section: String,
    },

    #[error("{source_name}, line {line}: malformed section header: {content}")]
    InvalidSectionHeader {
        source_name: String,
        line: usize,
        content: String,
    },

    #[error("{source_name}, line {line}: expected 'key = value' or 'key: value', found: {content}")]
    InvalidLine {
        source_name: String,
        line: usize,
        content: String,
    },

    #[error("{source_name}: file is not valid UTF-8")]
    InvalidEncoding { source_name: String },

    #[error("[{section}] {option}: '%' must be followed by '%' or '(name)s', found: {content}")]
    InterpolationSyntax {
        section: String,
        option: String,
        content: String,
    },

    #[error("[{section}] {option}: no option '{reference}' to substitute")]
    InterpolationMissing {
        section: String,
        option: String,
        reference: String,
    },

    #[error("[{section}] {option}: substitutions nested more than {max} deep")]
    InterpolationDepth {
        section: String,
        option: String,
        max: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn duplicate_section(source_name: &str, line: usize, section: impl Into<String>) -> Self {
        Self::DuplicateSection {
            source_name: source_name.to_string(),
            line,
            section: section.into(),
        }
    }

    pub fn invalid_section_header(source_name: &str, line: usize, content: impl Into<String>) -> Self {
        Self::InvalidSectionHeader {
            source_name: source_name.to_string(),
            line,
            content: content.into(),
        }
    }

    pub fn invalid_line(source_name: &str, line: usize, content: impl Into<String>) -> Self {
        Self::InvalidLine {
            source_name: source_name.to_string(),
            line,
            content: content.into(),
        }
    }

    pub fn invalid_encoding(source_name: &str) -> Self {
        Self::InvalidEncoding {
            source_name: source_name.to_string(),
        }
    }

    pub fn interpolation_syntax(section: &str, option: &str, content: impl Into<String>) -> Self {
        Self::InterpolationSyntax {
            section: section.to_string(),
            option: option.to_string(),
            content: content.into(),
        }
    }

    pub fn interpolation_missing(section: &str, option: &str, reference: impl Into<String>) -> Self {
        Self::InterpolationMissing {
            section: section.to_string(),
            option: option.to_string(),
            reference: reference.into(),
        }
    }

    pub fn interpolation_depth(section: &str, option: &str, max: usize) -> Self {
        Self::InterpolationDepth {
            section: section.to_string(),
            option: option.to_string(),
            max,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
