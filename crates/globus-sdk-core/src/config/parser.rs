//! INI-style parser for `globus.cfg` files
//!
//! Grammar:
//! - `[section]` headers; a section may be declared once per file
//! - `key = value` or `key: value`, split at the first `=` or `:`
//! - keys are lower-cased, keys and values are trimmed
//! - blank lines and lines starting with `#` or `;` are ignored
//! - an indented line after an option continues that option's value and is
//!   kept as written (trimmed), even if it starts with `#` or `;`
//! - ` ;` starts an inline comment in the first line of a value
//! - a value written as `""` is empty
//!
//! Anything before the first header belongs to the `general` section, as if
//! every file started with `[general]`.

use std::collections::HashSet;

use super::traits::{ConfigError, ConfigResult};

/// Section for options given without a header
pub const GENERAL_SECTION: &str = "general";

/// Section whose options are visible from every other section
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// One section block as it appeared in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    pub name: String,
    /// Options in declaration order; a repeated key appears twice
    pub options: Vec<(String, String)>,
}

impl ParsedSection {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }
}

/// Parse configuration text into section blocks in file order.
///
/// The first block is always the implicit `general` block, possibly empty.
pub fn parse(source_name: &str, text: &str) -> ConfigResult<Vec<ParsedSection>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut sections = vec![ParsedSection::new(GENERAL_SECTION)];
    // The implicit general block is not a declaration, so an explicit
    // `[general]` is still allowed once.
    let mut declared: HashSet<String> = HashSet::new();
    let mut continuing = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            continue;
        }

        if continuing && raw.starts_with(char::is_whitespace) {
            if let Some((_, value)) = sections.last_mut().and_then(|s| s.options.last_mut()) {
                value.push('\n');
                value.push_str(trimmed);
            }
            continue;
        }

        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('[') {
            let name = parse_header(trimmed)
                .ok_or_else(|| ConfigError::invalid_section_header(source_name, line, trimmed))?;
            if !declared.insert(name.to_string()) {
                return Err(ConfigError::duplicate_section(source_name, line, name));
            }
            sections.push(ParsedSection::new(name));
            continuing = false;
            continue;
        }

        let (key, value) =
            parse_option(trimmed).ok_or_else(|| ConfigError::invalid_line(source_name, line, trimmed))?;
        if let Some(section) = sections.last_mut() {
            section.options.push((key, value));
        }
        continuing = true;
    }

    Ok(sections)
}

/// Normalized form of an option key
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn parse_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() || inner.contains(['[', ']']) {
        return None;
    }
    Some(inner)
}

fn parse_option(line: &str) -> Option<(String, String)> {
    let split = line.find(['=', ':'])?;
    let key = line[..split].trim();
    if key.is_empty() {
        return None;
    }

    let value = strip_inline_comment(line[split + 1..].trim()).trim_end();
    let value = if value == "\"\"" { "" } else { value };

    Some((normalize_key(key), value.to_string()))
}

fn strip_inline_comment(value: &str) -> &str {
    let mut prev_is_space = false;
    for (pos, c) in value.char_indices() {
        if c == ';' && prev_is_space {
            return &value[..pos];
        }
        prev_is_space = c.is_whitespace();
    }
    value
}
