//! Flat navigation rendering
//!
//! Each entry is rendered by handing `navText`, `navLink` and a 1-based
//! `count` to the template engine and picking either the `current` or the
//! `entry` block.
//!
//! # Block Fallbacks
//!
//! Resolved once per render by [`BlockPlan`]:
//!
//! - no `entry` block: the navigation is absent and renders as `""`
//! - no `current` block: the current entry is rendered with the `entry` block
//! - no `treeStart`/`treeEnd` block: nothing is emitted for them

use crate::config::NavigationConfig;
use crate::models::NavigationEntry;
use crate::template::{TemplateEngine, TemplateValues};

/// Block names chosen for one render
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlockPlan<'c> {
    pub entry: &'c str,
    pub current: &'c str,
    pub tree_start: Option<&'c str>,
    pub tree_end: Option<&'c str>,
}

impl<'c> BlockPlan<'c> {
    /// `None` when the templates define no entry block
    pub fn resolve(templates: &dyn TemplateEngine, config: &'c NavigationConfig) -> Option<Self> {
        let blocks = &config.blocks;
        if !templates.has_block(&blocks.entry) {
            tracing::warn!(block = %blocks.entry, "No entry block defined, navigation is empty");
            return None;
        }

        let current = if templates.has_block(&blocks.current) {
            blocks.current.as_str()
        } else {
            blocks.entry.as_str()
        };
        let optional = |name: &'c String| templates.has_block(name).then_some(name.as_str());

        Some(Self {
            entry: &blocks.entry,
            current,
            tree_start: optional(&blocks.tree_start),
            tree_end: optional(&blocks.tree_end),
        })
    }
}

/// Link emitted for `link`: servlet prefix, plus the index file for folders
pub fn entry_link(servlet_path: &str, link: &str, index_file: &str) -> String {
    if link.ends_with('/') {
        format!("{servlet_path}{link}{index_file}")
    } else {
        format!("{servlet_path}{link}")
    }
}

/// Renders an ordered entry list through a template engine
pub struct NavigationRenderer<'a> {
    templates: &'a dyn TemplateEngine,
    config: &'a NavigationConfig,
}

impl<'a> NavigationRenderer<'a> {
    pub fn new(templates: &'a dyn TemplateEngine, config: &'a NavigationConfig) -> Self {
        Self { templates, config }
    }

    /// Render `entries` in order
    ///
    /// An entry is current when its link equals `reference_path` or
    /// `active_request_path`.
    pub fn render(
        &self,
        entries: &[NavigationEntry],
        active_request_path: &str,
        reference_path: &str,
        servlet_path: &str,
    ) -> String {
        if entries.is_empty() {
            return String::new();
        }
        let Some(plan) = BlockPlan::resolve(self.templates, self.config) else {
            return String::new();
        };

        let mut output = String::new();
        for (index, entry) in entries.iter().enumerate() {
            output.push_str(&self.render_entry(
                &plan,
                entry,
                index,
                active_request_path,
                reference_path,
                servlet_path,
            ));
        }
        output
    }

    /// Values handed to the template engine for the entry at `index`
    pub fn entry_values(
        &self,
        entry: &NavigationEntry,
        index: usize,
        servlet_path: &str,
    ) -> TemplateValues {
        let names = &self.config.values;
        TemplateValues::new()
            .with(&names.nav_text, &entry.text)
            .with(&names.count, (index + 1).to_string())
            .with(
                &names.nav_link,
                entry_link(servlet_path, &entry.link, &self.config.index_file),
            )
    }

    pub(crate) fn render_entry(
        &self,
        plan: &BlockPlan<'_>,
        entry: &NavigationEntry,
        index: usize,
        active_request_path: &str,
        reference_path: &str,
        servlet_path: &str,
    ) -> String {
        let values = self.entry_values(entry, index, servlet_path);
        let block = if entry.is_current(reference_path, active_request_path) {
            tracing::trace!(link = %entry.link, "Rendering current entry");
            plan.current
        } else {
            plan.entry
        };
        self.templates.render_block(block, &values)
    }

    pub(crate) fn render_block(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => self.templates.render_block(name, &TemplateValues::new()),
            None => String::new(),
        }
    }
}
