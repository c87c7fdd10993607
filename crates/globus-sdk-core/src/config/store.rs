//! Merged configuration store
//!
//! Sources are merged in order, so for any `(section, option)` pair the
//! value from the last source that defines it wins. Lookups can be scoped to
//! a section or to an environment (`[environment <name>]`), optionally
//! overridden by a `GLOBUS_SDK_<OPTION>` environment variable, and
//! optionally fall back to the `general` section.
//!
//! Values read from files may refer to other options of the same section
//! (or of `DEFAULT`) as `%(name)s`; `%%` is a literal `%`. Substitution
//! happens at lookup time. Values from environment variables are used as is.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, trace};

use super::env::{env_var_name, EnvReader, ProcessEnv};
use super::file::{default_sources, FileConfigSource};
use super::parser::{normalize_key, parse, DEFAULT_SECTION, GENERAL_SECTION};
use super::traits::{ConfigError, ConfigLevel, ConfigResult, ConfigSource};

type Options = BTreeMap<String, String>;

/// Deepest chain of `%(name)s` substitutions that is followed
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

/// How to resolve a single option
///
/// # Example
///
/// ```
/// use globus_sdk_core::config::LookupOptions;
///
/// let lookup = LookupOptions::new()
///     .with_environment("production")
///     .failover_to_general()
///     .check_env();
/// assert_eq!(lookup.scope(), "environment production");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub section: Option<String>,
    pub environment: Option<String>,
    pub failover_to_general: bool,
    pub check_env: bool,
}

impl LookupOptions {
    /// Look in `general`, no fallback, no environment variable
    pub fn new() -> Self {
        Self::default()
    }

    /// Look in an explicit section
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Look in `[environment <name>]`; takes precedence over `with_section`
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Retry once in `general` when the scoped section lacks the option
    pub fn failover_to_general(mut self) -> Self {
        self.failover_to_general = true;
        self
    }

    /// Let `GLOBUS_SDK_<OPTION>` override every file
    pub fn check_env(mut self) -> Self {
        self.check_env = true;
        self
    }

    /// Section this lookup reads first
    pub fn scope(&self) -> Cow<'_, str> {
        match (self.environment.as_deref().filter(|e| !e.is_empty()), self.section.as_deref()) {
            (Some(environment), _) => Cow::Owned(format!("environment {environment}")),
            (None, Some(section)) => Cow::Borrowed(section),
            (None, None) => Cow::Borrowed(GENERAL_SECTION),
        }
    }
}

/// Read-only view of all configuration sources merged together
///
/// Build one with [`ConfigStore::builder`], [`ConfigStore::from_paths`] or
/// [`ConfigStore::load_default`]; most code uses the process-wide instance
/// from [`crate::config::global`].
#[derive(Clone)]
pub struct ConfigStore {
    sections: BTreeMap<String, Options>,
    defaults: Options,
    loaded: Vec<(String, ConfigLevel)>,
    env: Arc<dyn EnvReader>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            sections: BTreeMap::new(),
            defaults: Options::new(),
            loaded: Vec::new(),
            env: Arc::new(ProcessEnv),
        }
    }
}

impl ConfigStore {
    /// A store with no sources
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Merge files in order (lowest priority first).
    ///
    /// The last path is the user's file; every earlier one is treated as a
    /// system file.
    pub fn from_paths<I, P>(paths: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        let last = paths.len().saturating_sub(1);
        paths
            .into_iter()
            .enumerate()
            .fold(Self::builder(), |builder, (i, path)| {
                let level = if i == last { ConfigLevel::User } else { ConfigLevel::System };
                builder.with_path_at(path, level)
            })
            .build()
    }

    /// Packaged defaults, then the system file, then the user files
    pub fn load_default() -> ConfigResult<Self> {
        Self::builder().with_sources(default_sources()).build()
    }

    fn merge(&mut self, source: &dyn ConfigSource) -> ConfigResult<()> {
        let Some(text) = source.read()? else {
            return Ok(());
        };

        let parsed = parse(source.name(), &text)?;
        for section in parsed {
            let target = if section.name == DEFAULT_SECTION {
                &mut self.defaults
            } else {
                self.sections.entry(section.name).or_default()
            };
            target.extend(section.options);
        }

        debug!(source = source.name(), level = %source.level(), "loaded config source");
        self.loaded.push((source.name().to_string(), source.level()));
        Ok(())
    }

    /// Look up `option` according to `lookup`.
    ///
    /// Returns `Ok(None)` when nothing defines the option; a miss is never
    /// an error. A value whose `%(name)s` substitutions cannot be resolved
    /// is.
    pub fn get(&self, option: &str, lookup: &LookupOptions) -> ConfigResult<Option<String>> {
        let scope = lookup.scope();

        if lookup.check_env {
            let var = env_var_name(option);
            if let Some(value) = self.env.var(&var) {
                trace!(option, var = %var, "option set by environment variable");
                return Ok(Some(value));
            }
        }

        // At most one extra hop: the scoped section, then general.
        let mut scopes: Vec<&str> = vec![&scope];
        if lookup.failover_to_general && scope != GENERAL_SECTION {
            scopes.push(GENERAL_SECTION);
        }

        for section in scopes {
            if let Some(value) = self.lookup(section, option)? {
                trace!(option, section, "option resolved");
                return Ok(Some(value));
            }
        }

        trace!(option, scope = %scope, "option not configured");
        Ok(None)
    }

    /// Shorthand for an unscoped lookup in `general`
    pub fn get_general(&self, option: &str) -> ConfigResult<Option<String>> {
        self.get(option, &LookupOptions::new())
    }

    /// `<service>_service` for an environment; the URL is not validated
    pub fn service_url(&self, environment: &str, service: &str) -> ConfigResult<Option<String>> {
        let option = format!("{service}_service");
        self.get(&option, &LookupOptions::new().with_environment(environment))
    }

    /// `auth_token` for an environment.
    ///
    /// `GLOBUS_SDK_AUTH_TOKEN` wins over every file; otherwise the
    /// environment section is checked, then `general`.
    pub fn auth_token(&self, environment: &str) -> ConfigResult<Option<String>> {
        let lookup = LookupOptions::new()
            .with_environment(environment)
            .failover_to_general()
            .check_env();
        self.get("auth_token", &lookup)
    }

    fn lookup(&self, section: &str, option: &str) -> ConfigResult<Option<String>> {
        let key = normalize_key(option);
        let options = if section == DEFAULT_SECTION {
            &self.defaults
        } else {
            match self.sections.get(section) {
                Some(options) => options,
                None => return Ok(None),
            }
        };
        let Some(raw) = options.get(&key).or_else(|| self.defaults.get(&key)) else {
            return Ok(None);
        };

        let interpolation = Interpolation {
            section,
            option: &key,
            options,
            defaults: &self.defaults,
        };
        let mut value = String::with_capacity(raw.len());
        interpolation.expand(raw, &mut value, 1)?;
        Ok(Some(value))
    }

    /// Names of the sources that were read, in merge order
    pub fn loaded_sources(&self) -> Vec<&str> {
        self.loaded.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Sources that were read with their override level, in merge order
    pub fn loaded_levels(&self) -> impl Iterator<Item = (&str, ConfigLevel)> {
        self.loaded.iter().map(|(name, level)| (name.as_str(), *level))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn has_section(&self, section: &str) -> bool {
        section == DEFAULT_SECTION || self.sections.contains_key(section)
    }

    /// Options defined directly in `section` (without `DEFAULT` values),
    /// exactly as written
    pub fn options(&self, section: &str) -> Option<&BTreeMap<String, String>> {
        if section == DEFAULT_SECTION {
            return Some(&self.defaults);
        }
        self.sections.get(section)
    }

    /// Merged store as pretty JSON, `{section: {option: value}}`
    pub fn export_json(&self) -> ConfigResult<String> {
        let mut all: BTreeMap<&str, &Options> =
            self.sections.iter().map(|(name, options)| (name.as_str(), options)).collect();
        if !self.defaults.is_empty() {
            all.insert(DEFAULT_SECTION, &self.defaults);
        }
        Ok(serde_json::to_string_pretty(&all)?)
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("sections", &self.sections.keys().collect::<Vec<_>>())
            .field("loaded", &self.loaded)
            .finish()
    }
}

/// `%(name)s` substitution for one value of one section
struct Interpolation<'a> {
    section: &'a str,
    option: &'a str,
    options: &'a Options,
    defaults: &'a Options,
}

impl Interpolation<'_> {
    fn expand(&self, raw: &str, out: &mut String, depth: usize) -> ConfigResult<()> {
        if depth > MAX_INTERPOLATION_DEPTH {
            return Err(ConfigError::interpolation_depth(
                self.section,
                self.option,
                MAX_INTERPOLATION_DEPTH,
            ));
        }

        let mut rest = raw;
        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];

            if let Some(tail) = rest.strip_prefix("%%") {
                out.push('%');
                rest = tail;
                continue;
            }

            let (name, tail) = rest
                .strip_prefix("%(")
                .and_then(|inner| {
                    let close = inner.find(')')?;
                    let tail = inner[close + 1..].strip_prefix('s')?;
                    Some((&inner[..close], tail))
                })
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ConfigError::interpolation_syntax(self.section, self.option, rest))?;

            let name = name.to_lowercase();
            let value = self
                .options
                .get(&name)
                .or_else(|| self.defaults.get(&name))
                .ok_or_else(|| ConfigError::interpolation_missing(self.section, self.option, &name))?;

            if value.contains('%') {
                self.expand(value, out, depth + 1)?;
            } else {
                out.push_str(value);
            }
            rest = tail;
        }
        out.push_str(rest);
        Ok(())
    }
}

/// Collects sources, then merges them into a [`ConfigStore`]
pub struct ConfigStoreBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
    env: Arc<dyn EnvReader>,
}

impl Default for ConfigStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStoreBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            env: Arc::new(ProcessEnv),
        }
    }

    /// Add a source; later sources override earlier ones
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Box<dyn ConfigSource>>) -> Self {
        self.sources.extend(sources);
        self
    }

    /// Add a user file that may or may not exist
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        self.with_path_at(path, ConfigLevel::User)
    }

    /// Add a file at an explicit override level
    pub fn with_path_at(self, path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        self.with_source(FileConfigSource::new(path, level))
    }

    /// Replace the reader used for `GLOBUS_SDK_*` overrides
    pub fn with_env(mut self, env: impl EnvReader + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Read and merge every source.
    ///
    /// Fails on the first source that exists but cannot be parsed.
    pub fn build(self) -> ConfigResult<ConfigStore> {
        let mut store = ConfigStore {
            env: self.env,
            ..ConfigStore::default()
        };
        for source in &self.sources {
            store.merge(source.as_ref())?;
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::MemoryEnv;
    use crate::config::memory::MemoryConfigSource;

    fn source(name: &str, text: &str) -> MemoryConfigSource {
        MemoryConfigSource::new(name, ConfigLevel::User, text)
    }

    fn store(texts: &[&str]) -> ConfigStore {
        texts
            .iter()
            .enumerate()
            .fold(ConfigStore::builder().with_env(MemoryEnv::new()), |b, (i, text)| {
                b.with_source(source(&format!("source-{i}"), text))
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_scope_resolution() {
        assert_eq!(LookupOptions::new().scope(), "general");
        assert_eq!(LookupOptions::new().with_section("s").scope(), "s");
        assert_eq!(
            LookupOptions::new().with_section("s").with_environment("prod").scope(),
            "environment prod"
        );
        assert_eq!(LookupOptions::new().with_environment("").scope(), "general");
    }

    #[test]
    fn test_later_source_wins() {
        let store = store(&[
            "a = low\nonly_low = 1\n[environment prod]\nurl = low-url\n",
            "[environment prod]\nurl = high-url\n[general]\na = high\n",
        ]);

        assert_eq!(store.get_general("a").unwrap().as_deref(), Some("high"));
        assert_eq!(store.get_general("only_low").unwrap().as_deref(), Some("1"));
        assert_eq!(
            store.get("url", &LookupOptions::new().with_environment("prod")).unwrap().as_deref(),
            Some("high-url")
        );
    }

    #[test]
    fn test_last_occurrence_in_one_file_wins() {
        let store = store(&["a = 1\na = 2\n"]);
        assert_eq!(store.get_general("a").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_lookup_is_case_insensitive_for_options() {
        let store = store(&["Auth_Token = x\n"]);
        assert_eq!(store.get_general("AUTH_TOKEN").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_environment_scope_does_not_read_general_without_failover() {
        let store = store(&["x = general-x\n[environment prod]\ny = prod-y\n"]);
        let prod = LookupOptions::new().with_environment("prod");

        assert_eq!(store.get("y", &prod).unwrap().as_deref(), Some("prod-y"));
        assert!(store.get("x", &prod).unwrap().is_none());
        assert_eq!(
            store.get("x", &prod.clone().failover_to_general()).unwrap().as_deref(),
            Some("general-x")
        );
    }

    #[test]
    fn test_failover_when_section_missing() {
        let store = store(&["x = general-x\n"]);
        let lookup = LookupOptions::new().with_section("nowhere").failover_to_general();
        assert_eq!(store.get("x", &lookup).unwrap().as_deref(), Some("general-x"));
    }

    #[test]
    fn test_env_var_overrides_files() {
        let store = ConfigStore::builder()
            .with_source(source("a", "token = file\n[environment prod]\ntoken = prod-file\n"))
            .with_env(MemoryEnv::new().with_var("GLOBUS_SDK_TOKEN", "from-env"))
            .build()
            .unwrap();

        let prod = LookupOptions::new().with_environment("prod");
        assert_eq!(store.get("token", &prod).unwrap().as_deref(), Some("prod-file"));
        assert_eq!(
            store.get("token", &prod.clone().check_env()).unwrap().as_deref(),
            Some("from-env")
        );
        assert_eq!(
            store.get("token", &LookupOptions::new().check_env()).unwrap().as_deref(),
            Some("from-env")
        );
    }

    #[test]
    fn test_empty_env_var_still_wins() {
        let store = ConfigStore::builder()
            .with_source(source("a", "token = file\n"))
            .with_env(MemoryEnv::new().with_var("GLOBUS_SDK_TOKEN", ""))
            .build()
            .unwrap();

        assert_eq!(store.get("token", &LookupOptions::new().check_env()).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_absent_is_none_for_every_flag_combination() {
        let store = store(&["a = 1\n"]);

        for failover in [false, true] {
            for check_env in [false, true] {
                for base in [
                    LookupOptions::new(),
                    LookupOptions::new().with_section("missing"),
                    LookupOptions::new().with_environment("missing"),
                ] {
                    let mut lookup = base;
                    lookup.failover_to_general = failover;
                    lookup.check_env = check_env;
                    assert!(store.get("nope", &lookup).unwrap().is_none(), "{lookup:?}");
                }
            }
        }
    }

    #[test]
    fn test_default_section_backs_existing_sections() {
        let store = store(&["[DEFAULT]\nregion = us\n[environment prod]\nurl = u\n"]);

        let prod = LookupOptions::new().with_environment("prod");
        assert_eq!(store.get("region", &prod).unwrap().as_deref(), Some("us"));
        assert_eq!(store.get_general("region").unwrap().as_deref(), Some("us"));
        assert_eq!(
            store.get("region", &LookupOptions::new().with_section("DEFAULT")).unwrap().as_deref(),
            Some("us")
        );
        // DEFAULT does not conjure sections into existence
        assert!(store
            .get("region", &LookupOptions::new().with_environment("test")).unwrap()
            .is_none());
    }

    #[test]
    fn test_helpers() {
        let store = store(&[
            "auth_token = general-token\n[environment prod]\ntransfer_service = not a url\n",
        ]);

        assert_eq!(store.service_url("prod", "transfer").unwrap().as_deref(), Some("not a url"));
        assert!(store.service_url("prod", "auth").unwrap().is_none());
        assert_eq!(store.auth_token("prod").unwrap().as_deref(), Some("general-token"));
    }

    #[test]
    fn test_auth_token_env_var() {
        let store = ConfigStore::builder()
            .with_source(source("a", "[environment prod]\nauth_token = file-token\n"))
            .with_env(MemoryEnv::new().with_var("GLOBUS_SDK_AUTH_TOKEN", "env-token"))
            .build()
            .unwrap();

        assert_eq!(store.auth_token("prod").unwrap().as_deref(), Some("env-token"));
    }

    #[test]
    fn test_malformed_source_halts_build() {
        let result = ConfigStore::builder()
            .with_source(source("good", "a = 1\n"))
            .with_source(source("bad", "[x]\n[x]\n"))
            .build();

        match result {
            Err(ConfigError::DuplicateSection { source_name, .. }) => assert_eq!(source_name, "bad"),
            other => panic!("expected duplicate section error, got {other:?}"),
        }
    }

    #[test]
    fn test_introspection() {
        let store = store(&["a = 1\n[environment prod]\nb = 2\n"]);

        assert_eq!(store.loaded_sources(), ["source-0".to_string()]);
        assert_eq!(
            store.section_names().collect::<Vec<_>>(),
            vec!["environment prod", "general"]
        );
        assert!(store.has_section("general"));
        assert!(!store.has_section("environment test"));
        assert_eq!(store.options("environment prod").unwrap()["b"], "2");

        let json: serde_json::Value = serde_json::from_str(&store.export_json().unwrap()).unwrap();
        assert_eq!(json["general"]["a"], "1");
        assert_eq!(json["environment prod"]["b"], "2");
    }

    #[test]
    fn test_empty_store() {
        let store = ConfigStore::empty();
        assert!(store.loaded_sources().is_empty());
        assert!(store.get_general("anything").unwrap().is_none());
        assert!(!store.has_section("general"));
    }

    #[test]
    fn test_interpolation_in_same_section() {
        let store = store(&[
            "[environment prod]\nbase = https://p.org\ntransfer_service = %(base)s/transfer\n",
        ]);

        assert_eq!(
            store.service_url("prod", "transfer").unwrap().as_deref(),
            Some("https://p.org/transfer")
        );
        // Introspection shows values as written
        assert_eq!(
            store.options("environment prod").unwrap()["transfer_service"],
            "%(base)s/transfer"
        );
    }

    #[test]
    fn test_interpolation_nested_and_from_default() {
        let store = store(&[
            "[DEFAULT]\nhost = globus.org\n\
             [environment prod]\n\
             scheme = https\n\
             base = %(scheme)s://%(HOST)s\n\
             auth_service = %(base)s/auth\n",
        ]);

        assert_eq!(
            store.service_url("prod", "auth").unwrap().as_deref(),
            Some("https://globus.org/auth")
        );
    }

    #[test]
    fn test_interpolation_section_beats_default() {
        let store = store(&["[DEFAULT]\nhost = default.org\nurl = %(host)s\n[environment prod]\nhost = prod.org\n"]);

        let prod = LookupOptions::new().with_environment("prod");
        assert_eq!(store.get("url", &prod).unwrap().as_deref(), Some("prod.org"));
        assert_eq!(store.get_general("url").unwrap().as_deref(), Some("default.org"));
    }

    #[test]
    fn test_double_percent_is_literal() {
        let store = store(&["ratio = 50%%\nescaped = %%(base)s\n"]);

        assert_eq!(store.get_general("ratio").unwrap().as_deref(), Some("50%"));
        assert_eq!(store.get_general("escaped").unwrap().as_deref(), Some("%(base)s"));
    }

    #[test]
    fn test_missing_reference_is_an_error() {
        let store = store(&["[environment prod]\nurl = %(base)s/x\n"]);

        match store.get("url", &LookupOptions::new().with_environment("prod")) {
            Err(ConfigError::InterpolationMissing {
                section,
                option,
                reference,
            }) => {
                assert_eq!(section, "environment prod");
                assert_eq!(option, "url");
                assert_eq!(reference, "base");
            }
            other => panic!("expected missing reference, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_reference_does_not_fail_over() {
        let store = store(&["url = general\n[environment prod]\nurl = %(base)s\n"]);
        let lookup = LookupOptions::new().with_environment("prod").failover_to_general();

        assert!(store.get("url", &lookup).is_err());
    }

    #[test]
    fn test_bad_percent_is_an_error() {
        for bad in ["50%", "%(unterminated", "%(name)d", "%()s", "%x"] {
            let store = store(&[format!("v = {bad}\nname = n\n").as_str()]);
            assert!(
                matches!(store.get_general("v"), Err(ConfigError::InterpolationSyntax { .. })),
                "expected syntax error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_reference_loop_hits_depth_limit() {
        let store = store(&["a = %(b)s\nb = %(a)s\nselfish = <%(selfish)s>\n"]);

        assert!(matches!(
            store.get_general("a"),
            Err(ConfigError::InterpolationDepth { max: MAX_INTERPOLATION_DEPTH, .. })
        ));
        assert!(matches!(
            store.get_general("selfish"),
            Err(ConfigError::InterpolationDepth { .. })
        ));
    }

    #[test]
    fn test_depth_limit_boundary() {
        // v0 reaches v9 at the tenth level; too_deep needs an eleventh
        let mut text = String::from("v10 = end\n");
        for i in 0..10 {
            text.push_str(&format!("v{i} = %(v{})s\n", i + 1));
        }
        text.push_str("too_deep = %(v0)s\n");
        let chained = store(&[text.as_str()]);

        assert_eq!(chained.get_general("v0").unwrap().as_deref(), Some("end"));
        assert!(matches!(
            chained.get_general("too_deep"),
            Err(ConfigError::InterpolationDepth { .. })
        ));
    }

    #[test]
    fn test_env_values_are_not_interpolated() {
        let store = ConfigStore::builder()
            .with_source(source("a", "base = b\n"))
            .with_env(MemoryEnv::new().with_var("GLOBUS_SDK_URL", "%(base)s"))
            .build()
            .unwrap();

        assert_eq!(
            store.get("url", &LookupOptions::new().check_env()).unwrap().as_deref(),
            Some("%(base)s")
        );
    }

    #[test]
    fn test_from_paths_assigns_levels_by_position() {
        let dir = tempfile::TempDir::new().unwrap();
        let system = dir.path().join("system.cfg");
        let user = dir.path().join("user.cfg");
        std::fs::write(&system, "a = 1\n").unwrap();
        std::fs::write(&user, "a = 2\n").unwrap();

        let store = ConfigStore::from_paths([&system, &user]).unwrap();
        let levels: Vec<ConfigLevel> = store.loaded_levels().map(|(_, level)| level).collect();
        assert_eq!(levels, vec![ConfigLevel::System, ConfigLevel::User]);

        let store = ConfigStore::builder()
            .with_path_at(&system, ConfigLevel::System)
            .with_source(source("mem", ""))
            .build()
            .unwrap();
        let system_name = system.display().to_string();
        assert_eq!(
            store.loaded_levels().collect::<Vec<_>>(),
            vec![(system_name.as_str(), ConfigLevel::System), ("mem", ConfigLevel::User)]
        );
    }
}
