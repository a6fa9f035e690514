//! Recursive (tree) navigation rendering
//!
//! Depth-first, pre-order: every non-empty level is wrapped in the
//! `treeStart`/`treeEnd` blocks, and each folder entry is immediately
//! followed by the rendered listing of that folder's own children.
//!
//! Folders are fetched lazily from the store as the walk reaches them. The
//! store is assumed to be a finite tree; cycles are not detected.

use crate::config::NavigationConfig;
use crate::models::NavigationEntry;
use crate::navigation::extractor::NavigationExtractor;
use crate::navigation::renderer::{BlockPlan, NavigationRenderer};
use crate::navigation::Result;
use crate::store::ResourceStore;
use crate::template::TemplateEngine;

/// Per-render inputs shared by every level of the walk
struct TreeWalk<'p> {
    plan: BlockPlan<'p>,
    active_request_path: &'p str,
    reference_path: &'p str,
    servlet_path: &'p str,
}

pub struct TreeRenderer<'a> {
    store: &'a dyn ResourceStore,
    extractor: NavigationExtractor<'a>,
    renderer: NavigationRenderer<'a>,
    templates: &'a dyn TemplateEngine,
    config: &'a NavigationConfig,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(
        store: &'a dyn ResourceStore,
        templates: &'a dyn TemplateEngine,
        config: &'a NavigationConfig,
    ) -> Self {
        Self {
            store,
            extractor: NavigationExtractor::new(store, config),
            renderer: NavigationRenderer::new(templates, config),
            templates,
            config,
        }
    }

    /// Render `entries` and, recursively, the children of every folder entry
    ///
    /// # Errors
    ///
    /// Store failures and invalid positions met anywhere in the walk abort the
    /// whole render; no partial output is returned.
    pub fn render_tree(
        &self,
        entries: &[NavigationEntry],
        active_request_path: &str,
        reference_path: &str,
        servlet_path: &str,
    ) -> Result<String> {
        let Some(plan) = BlockPlan::resolve(self.templates, self.config) else {
            return Ok(String::new());
        };
        let walk = TreeWalk {
            plan,
            active_request_path,
            reference_path,
            servlet_path,
        };

        let mut output = String::new();
        self.render_level(&walk, entries, 0, &mut output)?;
        Ok(output)
    }

    fn render_level(
        &self,
        walk: &TreeWalk<'_>,
        entries: &[NavigationEntry],
        depth: usize,
        output: &mut String,
    ) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        output.push_str(&self.renderer.render_block(walk.plan.tree_start));
        for (index, entry) in entries.iter().enumerate() {
            output.push_str(&self.renderer.render_entry(
                &walk.plan,
                entry,
                index,
                walk.active_request_path,
                walk.reference_path,
                walk.servlet_path,
            ));

            if entry.is_folder() {
                let children = self.store.list_children(&entry.link)?;
                let nested = self
                    .extractor
                    .extract(&children, walk.active_request_path)?;
                tracing::debug!(
                    folder = %entry.link,
                    depth = depth + 1,
                    entries = nested.len(),
                    "Descending into navigation folder"
                );
                self.render_level(walk, &nested, depth + 1, output)?;
            }
        }
        output.push_str(&self.renderer.render_block(walk.plan.tree_end));
        Ok(())
    }
}
