//! Navigation entries derived from resources
//!
//! A `NavigationEntry` lives only for one navigation build: the extractor
//! creates the list, a renderer consumes it, and it is dropped afterwards.

use serde::{Deserialize, Serialize};

/// A resource exposed in a navigation listing
///
/// Whether an entry is "current" is not stored here; renderers
/// compute it per render from the active request path and the reference path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    /// Absolute resource path (folder links keep the trailing `/`)
    pub link: String,

    /// Display label taken from the navigation text property
    pub text: String,

    /// Parsed navigation position, used for ordering only
    pub position: f64,
}

impl NavigationEntry {
    pub fn new(link: impl Into<String>, text: impl Into<String>, position: f64) -> Self {
        Self {
            link: link.into(),
            text: text.into(),
            position,
        }
    }

    /// Folder links end with `/` and get descended into by tree renders
    pub fn is_folder(&self) -> bool {
        self.link.ends_with('/')
    }

    /// True when this entry matches either the reference folder or the requested page
    pub fn is_current(&self, reference_path: &str, active_request_path: &str) -> bool {
        self.link == reference_path || self.link == active_request_path
    }
}
