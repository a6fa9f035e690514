//! In-memory resource store
//!
//! Resources are kept in insertion order, which is also the enumeration
//! order of `list_subfolders`/`list_files`. Parent/child relations are derived
//! from paths, so inserting `/a/b/page.html` does not require `/a/b/` to exist.

use super::ResourceStore;
use crate::models::{ResourceKind, ResourceNode, ResourceState};
use crate::navigation::{NavigationError, Result as NavResult};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One resource of a JSON snapshot, with its properties inline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotResource {
    path: String,
    kind: ResourceKind,
    #[serde(default)]
    state: ResourceState,
    #[serde(default)]
    properties: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Snapshot {
    resources: Vec<SnapshotResource>,
}

/// A `ResourceStore` holding the whole tree in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: Vec<ResourceNode>,
    index: HashMap<String, usize>,
    properties: HashMap<String, HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON snapshot
    ///
    /// ```json
    /// { "resources": [
    ///     { "path": "/docs/", "kind": "folder",
    ///       "properties": { "navPos": "1", "navText": "Docs" } },
    ///     { "path": "/docs/old.html", "kind": "file", "state": "deleted" }
    /// ] }
    /// ```
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let mut store = Self::new();
        for resource in snapshot.resources {
            if !resource.path.starts_with('/') {
                return Err(NavigationError::config(format!(
                    "snapshot resource path must be absolute: '{}'",
                    resource.path
                )));
            }
            let node = match resource.kind {
                ResourceKind::Folder => ResourceNode::folder(resource.path),
                ResourceKind::File => ResourceNode::file(resource.path),
            }
            .with_state(resource.state);
            let path = node.path.clone();
            store.insert(node);
            for (name, value) in resource.properties {
                store.set_property(&path, name, value);
            }
        }
        Ok(store)
    }

    /// Load a JSON snapshot from disk
    pub fn from_file(path: impl AsRef<Path>) -> NavResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| NavigationError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Insert a resource, replacing (in place) any resource with the same path
    pub fn insert(&mut self, node: ResourceNode) {
        match self.index.get(&node.path) {
            Some(&idx) => self.resources[idx] = node,
            None => {
                self.index.insert(node.path.clone(), self.resources.len());
                self.resources.push(node);
            }
        }
    }

    /// Insert a resource together with its navigation metadata
    pub fn insert_with_nav(
        &mut self,
        node: ResourceNode,
        position_property: &str,
        position: &str,
        text_property: &str,
        text: &str,
    ) {
        let path = node.path.clone();
        self.insert(node);
        self.set_property(&path, position_property, position);
        self.set_property(&path, text_property, text);
    }

    pub fn set_property(&mut self, path: &str, name: impl Into<String>, value: impl Into<String>) {
        self.properties
            .entry(path.to_string())
            .or_default()
            .insert(name.into(), value.into());
    }

    pub fn get(&self, path: &str) -> Option<&ResourceNode> {
        self.index.get(path).map(|&idx| &self.resources[idx])
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn children_of_kind(&self, path: &str, kind: ResourceKind) -> Vec<ResourceNode> {
        self.resources
            .iter()
            .filter(|node| node.kind == kind && node.parent_path().as_deref() == Some(path))
            .cloned()
            .collect()
    }
}

impl ResourceStore for MemoryStore {
    fn list_subfolders(&self, path: &str) -> Result<Vec<ResourceNode>> {
        Ok(self.children_of_kind(path, ResourceKind::Folder))
    }

    fn list_files(&self, path: &str) -> Result<Vec<ResourceNode>> {
        Ok(self.children_of_kind(path, ResourceKind::File))
    }

    fn read_property(&self, path: &str, name: &str) -> Result<Option<String>> {
        Ok(self
            .properties
            .get(path)
            .and_then(|props| props.get(name))
            .cloned())
    }
}
