//! Resource Store Abstraction
//!
//! This module defines the `ResourceStore` trait, the boundary between the
//! navigation engine and whatever holds the resource tree (a CMS repository,
//! a file system, a database).
//!
//! # Design Decisions
//!
//! 1. **Synchronous**: a navigation build is a single call-and-return pass;
//!    stores backed by async I/O should present a blocking snapshot view
//! 2. **Direct children only**: recursion into sub-folders is the engine's job
//! 3. **Error Handling**: uses `anyhow::Result` so any backend fault can be
//!    passed through to the caller untouched
//!
//! # Examples
//!
//! ```rust
//! use sitenav_core::store::{MemoryStore, ResourceStore};
//! use sitenav_core::models::ResourceNode;
//!
//! let mut store = MemoryStore::new();
//! store.insert(ResourceNode::folder("/docs/"));
//! store.set_property("/docs/", "navText", "Docs");
//!
//! let folders = store.list_subfolders("/").unwrap();
//! assert_eq!(folders.len(), 1);
//! assert_eq!(store.read_property("/docs/", "navText").unwrap().as_deref(), Some("Docs"));
//! ```

mod memory_store;

pub use memory_store::MemoryStore;

use crate::models::ResourceNode;
use anyhow::Result;

/// Read-only access to a tree of files and folders
///
/// Implementations must return resources belonging directly to `path`, in a
/// stable enumeration order: navigation ties are broken by that order.
pub trait ResourceStore {
    /// Folders directly inside `path`
    fn list_subfolders(&self, path: &str) -> Result<Vec<ResourceNode>>;

    /// Files directly inside `path`
    fn list_files(&self, path: &str) -> Result<Vec<ResourceNode>>;

    /// Read a single property of the resource at `path`
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the property is set
    /// - `Ok(None)` if the resource or the property doesn't exist (not an error)
    /// - `Err(_)` if the store itself fails
    fn read_property(&self, path: &str, name: &str) -> Result<Option<String>>;

    /// Sub-folders followed by files, the candidate list for one navigation level
    fn list_children(&self, path: &str) -> Result<Vec<ResourceNode>> {
        let mut resources = self.list_subfolders(path)?;
        resources.extend(self.list_files(path)?);
        Ok(resources)
    }
}
