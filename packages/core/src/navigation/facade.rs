//! Named navigation operations for one request
//!
//! `NavigationFacade` composes the resolver, extractor and renderers against a
//! reference folder: the current folder, the root folder, or a folder selected
//! by a level argument.
//!
//! # Level Arguments
//!
//! Levels arrive as optional strings, as written by page authors. `None`
//! means `0`; anything that is not an integer is rejected with
//! `NavigationError::InvalidLevel`.
//!
//! - parent-relative operations go up `level` segments from the current folder
//! - root-relative operations keep the first `level` segments of the current folder
//! - `level <= 0` selects the current folder (parent) or the root folder (root)
//!
//! # Examples
//!
//! ```rust
//! use sitenav_core::config::NavigationConfig;
//! use sitenav_core::models::{RequestContext, ResourceNode};
//! use sitenav_core::navigation::NavigationFacade;
//! use sitenav_core::store::MemoryStore;
//! use sitenav_core::template::BlockTemplates;
//!
//! let mut store = MemoryStore::new();
//! store.insert_with_nav(ResourceNode::folder("/a/"), "navPos", "1", "navText", "A");
//! store.insert_with_nav(ResourceNode::folder("/b/"), "navPos", "0.5", "navText", "B");
//!
//! let config = NavigationConfig::default();
//! let templates = BlockTemplates::new().with_block("entry", "[{{navLink}}:{{navText}}]");
//! let request = RequestContext::for_uri("/index.html").with_servlet_path("/base");
//!
//! let nav = NavigationFacade::new(&store, &templates, &config, &request);
//! assert_eq!(
//!     nav.nav_root(None).unwrap(),
//!     "[/base/b/index.html:B][/base/a/index.html:A]"
//! );
//! ```

use crate::config::NavigationConfig;
use crate::models::{NavigationEntry, RequestContext};
use crate::navigation::extractor::NavigationExtractor;
use crate::navigation::path_resolver::resolve_folder;
use crate::navigation::renderer::NavigationRenderer;
use crate::navigation::tree_renderer::TreeRenderer;
use crate::navigation::{NavigationError, Result};
use crate::store::ResourceStore;
use crate::template::TemplateEngine;

/// Parse an optional level argument; `None` is level 0
pub fn parse_level(arg: Option<&str>) -> Result<i32> {
    match arg {
        None => Ok(0),
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| NavigationError::invalid_level(raw)),
    }
}

/// Split a `level,property` argument
pub fn parse_level_and_property(arg: &str) -> Result<(i32, &str)> {
    let (level, property) = arg
        .split_once(',')
        .ok_or_else(|| NavigationError::invalid_argument(arg, "expected 'level,property'"))?;
    Ok((parse_level(Some(level))?, property))
}

/// Navigation operations bound to one request
pub struct NavigationFacade<'a> {
    store: &'a dyn ResourceStore,
    templates: &'a dyn TemplateEngine,
    config: &'a NavigationConfig,
    request: &'a RequestContext,
}

impl<'a> NavigationFacade<'a> {
    pub fn new(
        store: &'a dyn ResourceStore,
        templates: &'a dyn TemplateEngine,
        config: &'a NavigationConfig,
        request: &'a RequestContext,
    ) -> Self {
        Self {
            store,
            templates,
            config,
            request,
        }
    }

    //
    // FOLDER AND PAGE ACCESSORS
    //

    /// The folder containing the requested page
    pub fn folder_current(&self) -> &str {
        &self.request.current_folder
    }

    /// Link of the site root (`servlet_path + "/"`)
    pub fn folder_root(&self) -> String {
        self.request.root_page()
    }

    /// The requested page
    pub fn page_current(&self) -> &str {
        &self.request.requested_uri
    }

    //
    // FLAT AND TREE NAVIGATION
    //

    /// Navigation of the current folder
    pub fn nav_current(&self) -> Result<String> {
        self.flat_nav(&self.request.current_folder)
    }

    /// Navigation of the folder `level` segments above the current folder
    pub fn nav_parent(&self, level: Option<&str>) -> Result<String> {
        let folder = self.parent_relative_folder(parse_level(level)?);
        self.flat_nav(&folder)
    }

    /// Navigation of the root folder, or of the first `level` segments of the current folder
    pub fn nav_root(&self, level: Option<&str>) -> Result<String> {
        let folder = self.root_relative_folder(parse_level(level)?);
        self.flat_nav(&folder)
    }

    /// Recursive navigation starting at the same folder as [`Self::nav_root`]
    pub fn nav_tree(&self, level: Option<&str>) -> Result<String> {
        let folder = self.root_relative_folder(parse_level(level)?);
        let entries = self.entries_of(&folder)?;
        tracing::debug!(folder = %folder, entries = entries.len(), "Rendering navigation tree");

        TreeRenderer::new(self.store, self.templates, self.config).render_tree(
            &entries,
            &self.request.requested_uri,
            &self.request.current_folder,
            &self.request.servlet_path,
        )
    }

    //
    // PAGE LOOKUPS
    //

    /// Link of the entry after the current one in the current folder
    ///
    /// Clamps to the last entry. When the current page is not listed, the
    /// entry at index 1 is returned (the first entry if there is only one).
    pub fn page_next(&self) -> Result<String> {
        let entries = self.current_entries()?;
        let index = match self.current_index(&entries) {
            Some(index) => index + 1,
            None => 1,
        };
        Ok(link_at(&entries, index))
    }

    /// Link of the entry before the current one; the first entry if not listed
    pub fn page_previous(&self) -> Result<String> {
        let entries = self.current_entries()?;
        let index = self
            .current_index(&entries)
            .map_or(0, |index| index.saturating_sub(1));
        Ok(link_at(&entries, index))
    }

    /// Link of the entry `level` places before the current one
    ///
    /// `level <= 0` returns the requested page itself.
    pub fn page_parent(&self, level: Option<&str>) -> Result<String> {
        let level = parse_level(level)?;
        if level <= 0 {
            return Ok(self.request.requested_uri.clone());
        }

        let entries = self.current_entries()?;
        let index = self
            .current_index(&entries)
            .map_or(0, |index| index.saturating_sub(level as usize));
        Ok(link_at(&entries, index))
    }

    /// Link of the entry at index `min(level, current index)`
    ///
    /// `level <= 0` returns the site root page.
    pub fn page_root(&self, level: Option<&str>) -> Result<String> {
        let level = parse_level(level)?;
        if level <= 0 {
            return Ok(self.request.root_page());
        }

        let entries = self.current_entries()?;
        let index = self
            .current_index(&entries)
            .map_or(0, |index| index.min(level as usize));
        Ok(link_at(&entries, index))
    }

    //
    // PROPERTY LOOKUPS
    //

    /// Property of the current folder; `""` when no name is given
    pub fn property_current(&self, name: Option<&str>) -> Result<String> {
        match name {
            Some(name) => self.read_property(&self.request.current_folder, name),
            None => Ok(String::new()),
        }
    }

    /// Property of a parent-relative folder, argument `level,property`
    pub fn property_parent(&self, arg: Option<&str>) -> Result<String> {
        let Some(arg) = arg else {
            return Ok(String::new());
        };
        let (level, name) = parse_level_and_property(arg)?;
        let folder = self.parent_relative_folder(level);
        self.read_property(&folder, name)
    }

    /// Property of a root-relative folder, argument `level,property`
    pub fn property_root(&self, arg: Option<&str>) -> Result<String> {
        let Some(arg) = arg else {
            return Ok(String::new());
        };
        let (level, name) = parse_level_and_property(arg)?;
        let folder = self.root_relative_folder(level);
        self.read_property(&folder, name)
    }

    /// Property of the requested page
    pub fn property_uri(&self, name: &str) -> Result<String> {
        self.read_property(&self.request.requested_uri, name)
    }

    //
    // HELPERS
    //

    fn parent_relative_folder(&self, level: i32) -> String {
        if level <= 0 {
            self.request.current_folder.clone()
        } else {
            resolve_folder(&self.request.current_folder, -level)
        }
    }

    fn root_relative_folder(&self, level: i32) -> String {
        if level <= 0 {
            self.request.root_folder.clone()
        } else {
            resolve_folder(&self.request.current_folder, level)
        }
    }

    fn entries_of(&self, folder: &str) -> Result<Vec<NavigationEntry>> {
        let resources = self.store.list_children(folder)?;
        NavigationExtractor::new(self.store, self.config)
            .extract(&resources, &self.request.requested_uri)
    }

    fn current_entries(&self) -> Result<Vec<NavigationEntry>> {
        self.entries_of(&self.request.current_folder)
    }

    fn flat_nav(&self, folder: &str) -> Result<String> {
        let entries = self.entries_of(folder)?;
        tracing::debug!(folder = %folder, entries = entries.len(), "Rendering navigation");

        Ok(NavigationRenderer::new(self.templates, self.config).render(
            &entries,
            &self.request.requested_uri,
            &self.request.current_folder,
            &self.request.servlet_path,
        ))
    }

    /// Index of the last entry matching the current folder or the requested page
    fn current_index(&self, entries: &[NavigationEntry]) -> Option<usize> {
        entries.iter().rposition(|entry| {
            entry.is_current(&self.request.current_folder, &self.request.requested_uri)
        })
    }

    fn read_property(&self, path: &str, name: &str) -> Result<String> {
        Ok(self.store.read_property(path, name)?.unwrap_or_default())
    }
}

/// Link at `index`, clamped to the last entry; `""` for an empty list
fn link_at(entries: &[NavigationEntry], index: usize) -> String {
    match entries.len() {
        0 => String::new(),
        len => entries[index.min(len - 1)].link.clone(),
    }
}

#[cfg(test)]
#[path = "facade_test.rs"]
mod facade_test;
