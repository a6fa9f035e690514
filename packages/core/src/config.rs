//! Configuration for navigation builds
//!
//! Every name the engine relies on (property names, template block names,
//! template value names) and the two naming conventions (temporary prefix,
//! index file) live here, so a host can match its own content model.

use crate::navigation::{NavigationError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names of the template blocks consumed by the renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockNames {
    /// Block rendered for every non-current entry (required for any output)
    pub entry: String,
    /// Block rendered for the current entry (falls back to `entry`)
    pub current: String,
    /// Emitted before each non-empty tree level
    pub tree_start: String,
    /// Emitted after each non-empty tree level
    pub tree_end: String,
}

impl Default for BlockNames {
    fn default() -> Self {
        Self {
            entry: "entry".to_string(),
            current: "current".to_string(),
            tree_start: "treeStart".to_string(),
            tree_end: "treeEnd".to_string(),
        }
    }
}

/// Names of the values handed to every block render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueNames {
    pub nav_text: String,
    pub nav_link: String,
    pub count: String,
}

impl Default for ValueNames {
    fn default() -> Self {
        Self {
            nav_text: "navText".to_string(),
            nav_link: "navLink".to_string(),
            count: "count".to_string(),
        }
    }
}

/// Configuration for the navigation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    /// Property holding the navigation position (decimal string)
    pub position_property: String,

    /// Property holding the navigation text
    pub text_property: String,

    /// Resources whose name starts with this prefix are hidden unless requested
    pub temp_prefix: String,

    /// File name appended to folder links
    pub index_file: String,

    pub blocks: BlockNames,

    pub values: ValueNames,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            position_property: "navPos".to_string(),
            text_property: "navText".to_string(),
            temp_prefix: "~".to_string(),
            index_file: "index.html".to_string(),
            blocks: BlockNames::default(),
            values: ValueNames::default(),
        }
    }
}

impl NavigationConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| NavigationError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Validate configuration
    ///
    /// An empty `temp_prefix` is allowed and disables temporary-name hiding.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("positionProperty", &self.position_property),
            ("textProperty", &self.text_property),
            ("blocks.entry", &self.blocks.entry),
            ("blocks.current", &self.blocks.current),
            ("blocks.treeStart", &self.blocks.tree_start),
            ("blocks.treeEnd", &self.blocks.tree_end),
            ("values.navText", &self.values.nav_text),
            ("values.navLink", &self.values.nav_link),
            ("values.count", &self.values.count),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(NavigationError::config(format!("{field} cannot be empty")));
            }
        }

        if self.index_file.contains('/') {
            return Err(NavigationError::config(format!(
                "indexFile must be a plain file name, got '{}'",
                self.index_file
            )));
        }

        Ok(())
    }

    /// True when `name` follows the temporary-resource naming convention
    pub fn is_temporary_name(&self, name: &str) -> bool {
        !self.temp_prefix.is_empty() && name.starts_with(&self.temp_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = NavigationConfig::default();
        assert_eq!(config.position_property, "navPos");
        assert_eq!(config.text_property, "navText");
        assert_eq!(config.temp_prefix, "~");
        assert_eq!(config.index_file, "index.html");
        assert_eq!(config.blocks.entry, "entry");
        assert_eq!(config.blocks.tree_start, "treeStart");
        assert_eq!(config.values.nav_link, "navLink");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            NavigationConfig::from_json_str(r#"{"tempPrefix":"tmp_","blocks":{"entry":"navEntry"}}"#)
                .unwrap();
        assert_eq!(config.temp_prefix, "tmp_");
        assert_eq!(config.blocks.entry, "navEntry");
        assert_eq!(config.blocks.current, "current");
        assert_eq!(config.position_property, "navPos");
    }

    #[test]
    fn test_config_validation() {
        let mut config = NavigationConfig::default();

        config.position_property = String::new();
        assert!(matches!(config.validate(), Err(NavigationError::Config(_))));

        config = NavigationConfig::default();
        config.index_file = "sub/index.html".to_string();
        assert!(config.validate().is_err());

        config = NavigationConfig::default();
        config.temp_prefix = String::new();
        assert!(config.validate().is_ok());
        assert!(!config.is_temporary_name("~draft"));
    }

    #[test]
    fn test_is_temporary_name() {
        let config = NavigationConfig::default();
        assert!(config.is_temporary_name("~draft.html"));
        assert!(!config.is_temporary_name("draft~.html"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"indexFile":"default.htm"}}"#).unwrap();

        let config = NavigationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.index_file, "default.htm");
    }

    #[test]
    fn test_from_missing_file() {
        let err = NavigationConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, NavigationError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = NavigationConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, NavigationError::Serialization(_)));
    }
}
