//! Template Substitution Contract
//!
//! The renderers never build markup themselves. They hand a set of named
//! values to a `TemplateEngine` and ask it to render a named block.
//!
//! # Architecture
//!
//! - **Immutable values**: every render call receives its own `TemplateValues`
//!   map; engines keep no per-entry state between calls
//! - **Pure rendering**: `render_block(name, values)` depends only on its
//!   arguments and the engine's block definitions
//! - **Missing blocks**: rendering an undefined block yields `""`
//!
//! [`BlockTemplates`] is the bundled engine: named raw blocks with
//! `{{name}}`-style placeholders.

mod blocks;

pub use blocks::{BlockTemplates, Delimiters};

use std::collections::BTreeMap;

/// Named values substituted into a block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    values: BTreeMap<String, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Renders named template blocks from an explicit value map
pub trait TemplateEngine {
    /// Whether a block with this name is defined
    fn has_block(&self, name: &str) -> bool;

    /// Render the named block with `values`; `""` if the block is undefined
    fn render_block(&self, name: &str, values: &TemplateValues) -> String;
}
