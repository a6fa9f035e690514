//! Resource Data Structures
//!
//! This module defines `ResourceNode`, the read-only view of a file or folder
//! as handed out by a [`ResourceStore`](crate::store::ResourceStore).
//!
//! # Path Conventions
//!
//! - Paths are absolute and start with `/`
//! - Folder paths end with `/` (e.g. `/docs/guide/`)
//! - `name` is the last non-empty path segment (`guide` for `/docs/guide/`)
//!
//! # Examples
//!
//! ```rust
//! use sitenav_core::models::{ResourceKind, ResourceNode, ResourceState};
//!
//! let folder = ResourceNode::folder("/docs/guide/");
//! assert_eq!(folder.name, "guide");
//! assert_eq!(folder.kind, ResourceKind::Folder);
//!
//! let page = ResourceNode::file("/docs/intro.html").with_state(ResourceState::Deleted);
//! assert!(page.is_deleted());
//! ```

use serde::{Deserialize, Serialize};

/// Kind of a resource in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Folder,
}

/// Lifecycle state of a resource as reported by the store
///
/// Only `Deleted` matters to navigation: deleted resources never appear in a
/// listing, whatever their metadata says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceState {
    #[default]
    Unchanged,
    New,
    Changed,
    Deleted,
}

/// A file or folder owned by the resource store
///
/// Navigation metadata (position, text) is not carried here; it is read by
/// name through [`ResourceStore::read_property`](crate::store::ResourceStore::read_property).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    /// Absolute path; folders end with `/`
    pub path: String,

    /// Last path segment
    pub name: String,

    pub kind: ResourceKind,

    #[serde(default)]
    pub state: ResourceState,
}

impl ResourceNode {
    /// Create a folder node, normalizing the path to end with `/`
    pub fn folder(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        Self {
            name: last_segment(&path).to_string(),
            path,
            kind: ResourceKind::Folder,
            state: ResourceState::Unchanged,
        }
    }

    /// Create a file node
    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: last_segment(&path).to_string(),
            path,
            kind: ResourceKind::File,
            state: ResourceState::Unchanged,
        }
    }

    pub fn with_state(mut self, state: ResourceState) -> Self {
        self.state = state;
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ResourceKind::Folder
    }

    pub fn is_deleted(&self) -> bool {
        self.state == ResourceState::Deleted
    }

    /// Path of the folder directly containing this resource (`None` for `/`)
    pub fn parent_path(&self) -> Option<String> {
        parent_folder(&self.path)
    }
}

/// Last non-empty segment of a path (`""` for the root folder)
pub(crate) fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Folder containing `path`, with trailing slash
pub(crate) fn parent_folder(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .rfind('/')
        .map(|idx| trimmed[..=idx].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_and_trailing_slash() {
        let folder = ResourceNode::folder("/docs/guide");
        assert_eq!(folder.path, "/docs/guide/");
        assert_eq!(folder.name, "guide");
        assert!(folder.is_folder());
    }

    #[test]
    fn test_file_name() {
        let file = ResourceNode::file("/docs/intro.html");
        assert_eq!(file.name, "intro.html");
        assert!(!file.is_folder());
        assert_eq!(file.state, ResourceState::Unchanged);
    }

    #[test]
    fn test_root_folder_has_empty_name() {
        let root = ResourceNode::folder("/");
        assert_eq!(root.path, "/");
        assert_eq!(root.name, "");
        assert_eq!(root.parent_path(), None);
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(
            ResourceNode::folder("/a/b/").parent_path().as_deref(),
            Some("/a/")
        );
        assert_eq!(
            ResourceNode::file("/a/page.html").parent_path().as_deref(),
            Some("/a/")
        );
        assert_eq!(ResourceNode::folder("/a/").parent_path().as_deref(), Some("/"));
    }

    #[test]
    fn test_state_deserializes_lowercase_with_default() {
        let node: ResourceNode =
            serde_json::from_str(r#"{"path":"/a/","name":"a","kind":"folder"}"#).unwrap();
        assert_eq!(node.state, ResourceState::Unchanged);

        let node: ResourceNode = serde_json::from_str(
            r#"{"path":"/x.html","name":"x.html","kind":"file","state":"deleted"}"#,
        )
        .unwrap();
        assert!(node.is_deleted());
    }
}
