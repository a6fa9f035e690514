//! Placeholder-based template blocks
//!
//! A block is a raw string containing placeholders such as `{{navText}}`.
//! Placeholders naming an unknown value are left verbatim, so a block can
//! carry literal text that happens to look like a placeholder.
//!
//! With empty delimiters every identifier in the block is a candidate, which
//! allows terse blocks like `[navLink:navText]`.

use crate::navigation::{NavigationError, Result};
use crate::template::{TemplateEngine, TemplateValues};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Default placeholder pattern: `{{ name }}` (inner whitespace allowed)
static DEFAULT_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Opening and closing placeholder markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
        }
    }
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// No markers: bare identifiers are substituted
    pub fn bare() -> Self {
        Self::new("", "")
    }

    fn pattern(&self) -> Result<Regex> {
        if self.open.is_empty() != self.close.is_empty() {
            return Err(NavigationError::config(
                "template delimiters must be both empty or both non-empty",
            ));
        }
        if *self == Self::default() {
            return Ok(DEFAULT_PLACEHOLDER.clone());
        }
        let pattern = format!(
            r"{}([A-Za-z_][A-Za-z0-9_]*){}",
            regex::escape(&self.open),
            regex::escape(&self.close)
        );
        Regex::new(&pattern).map_err(|e| NavigationError::config(e.to_string()))
    }
}

/// On-disk form of a template set
#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(default)]
    delimiters: Delimiters,
    blocks: HashMap<String, String>,
}

/// A set of named raw blocks rendered by placeholder substitution
///
/// # Examples
///
/// ```rust
/// use sitenav_core::template::{BlockTemplates, TemplateEngine, TemplateValues};
///
/// let templates = BlockTemplates::new().with_block("entry", "<li><a href=\"{{navLink}}\">{{navText}}</a></li>");
/// let values = TemplateValues::new().with("navLink", "/a/index.html").with("navText", "A");
/// assert_eq!(
///     templates.render_block("entry", &values),
///     "<li><a href=\"/a/index.html\">A</a></li>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BlockTemplates {
    blocks: HashMap<String, String>,
    placeholder: Regex,
}

impl Default for BlockTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockTemplates {
    /// Empty template set using `{{name}}` placeholders
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
            placeholder: DEFAULT_PLACEHOLDER.clone(),
        }
    }

    /// Empty template set using custom placeholder delimiters
    pub fn with_delimiters(delimiters: &Delimiters) -> Result<Self> {
        Ok(Self {
            blocks: HashMap::new(),
            placeholder: delimiters.pattern()?,
        })
    }

    /// Parse a template set from JSON
    ///
    /// ```json
    /// { "delimiters": { "open": "${", "close": "}" },
    ///   "blocks": { "entry": "<li>${navText}</li>" } }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: TemplateFile = serde_json::from_str(json)?;
        let mut templates = Self::with_delimiters(&file.delimiters)?;
        templates.blocks = file.blocks;
        Ok(templates)
    }

    /// Load a template set from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| NavigationError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Builder-style block definition
    pub fn with_block(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.set_block(name, raw);
        self
    }

    pub fn set_block(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.blocks.insert(name.into(), raw.into());
    }

    /// Unprocessed content of a block
    pub fn raw_block(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    fn substitute(&self, raw: &str, values: &TemplateValues) -> String {
        self.placeholder
            .replace_all(raw, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl TemplateEngine for BlockTemplates {
    fn has_block(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    fn render_block(&self, name: &str, values: &TemplateValues) -> String {
        match self.raw_block(name) {
            Some(raw) => self.substitute(raw, values),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> TemplateValues {
        TemplateValues::new()
            .with("navText", "Home")
            .with("navLink", "/index.html")
            .with("count", "1")
    }

    #[test]
    fn test_default_placeholders() {
        let templates = BlockTemplates::new().with_block("entry", "{{count}}. {{ navText }} -> {{navLink}}");
        assert_eq!(
            templates.render_block("entry", &values()),
            "1. Home -> /index.html"
        );
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let templates = BlockTemplates::new().with_block("entry", "{{navText}} {{unknown}}");
        assert_eq!(templates.render_block("entry", &values()), "Home {{unknown}}");
    }

    #[test]
    fn test_missing_block_renders_empty() {
        let templates = BlockTemplates::new();
        assert!(!templates.has_block("entry"));
        assert_eq!(templates.render_block("entry", &values()), "");
    }

    #[test]
    fn test_bare_identifiers() {
        let templates = BlockTemplates::with_delimiters(&Delimiters::bare())
            .unwrap()
            .with_block("entry", "[navLink:navText]");
        assert_eq!(
            templates.render_block("entry", &values()),
            "[/index.html:Home]"
        );
    }

    #[test]
    fn test_bare_identifiers_do_not_match_inside_words() {
        let templates = BlockTemplates::with_delimiters(&Delimiters::bare())
            .unwrap()
            .with_block("entry", "counter count");
        assert_eq!(templates.render_block("entry", &values()), "counter 1");
    }

    #[test]
    fn test_custom_delimiters_are_escaped() {
        let templates = BlockTemplates::with_delimiters(&Delimiters::new("${", "}"))
            .unwrap()
            .with_block("entry", "${navText} {{navText}}");
        assert_eq!(templates.render_block("entry", &values()), "Home {{navText}}");
    }

    #[test]
    fn test_mismatched_delimiters_rejected() {
        let err = BlockTemplates::with_delimiters(&Delimiters::new("<", "")).unwrap_err();
        assert!(matches!(err, NavigationError::Config(_)));
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let templates = BlockTemplates::new().with_block("entry", "{{navText}}");
        let values = TemplateValues::new().with("navText", "{{navLink}}").with("navLink", "x");
        assert_eq!(templates.render_block("entry", &values), "{{navLink}}");
    }

    #[test]
    fn test_from_json() {
        let templates = BlockTemplates::from_json_str(
            r#"{"delimiters":{"open":"%","close":"%"},"blocks":{"entry":"<b>%navText%</b>"}}"#,
        )
        .unwrap();
        assert_eq!(templates.raw_block("entry"), Some("<b>%navText%</b>"));
        assert_eq!(templates.render_block("entry", &values()), "<b>Home</b>");
    }

    #[test]
    fn test_from_json_default_delimiters() {
        let templates =
            BlockTemplates::from_json_str(r#"{"blocks":{"entry":"{{navText}}"}}"#).unwrap();
        assert_eq!(templates.render_block("entry", &values()), "Home");
    }
}
