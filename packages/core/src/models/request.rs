//! Request context for one navigation build

use serde::{Deserialize, Serialize};

use super::resource::parent_folder;

/// Describes the page currently being rendered
///
/// # Fields
///
/// - `requested_uri`: absolute path of the requested resource
/// - `current_folder`: folder containing the requested resource (trailing `/`)
/// - `servlet_path`: prefix applied to every emitted link (may be empty)
/// - `root_folder`: root of the resource tree, `/` unless the store is mounted elsewhere
///
/// # Examples
///
/// ```rust
/// use sitenav_core::models::RequestContext;
///
/// let request = RequestContext::for_uri("/docs/guide/intro.html").with_servlet_path("/site");
/// assert_eq!(request.current_folder, "/docs/guide/");
/// assert_eq!(request.root_page(), "/site/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub requested_uri: String,
    pub current_folder: String,
    #[serde(default)]
    pub servlet_path: String,
    #[serde(default = "default_root_folder")]
    pub root_folder: String,
}

fn default_root_folder() -> String {
    "/".to_string()
}

impl RequestContext {
    pub fn new(requested_uri: impl Into<String>, current_folder: impl Into<String>) -> Self {
        Self {
            requested_uri: requested_uri.into(),
            current_folder: current_folder.into(),
            servlet_path: String::new(),
            root_folder: default_root_folder(),
        }
    }

    /// Build a context whose current folder is the folder containing `uri`
    ///
    /// A folder URI (trailing `/`) is its own current folder.
    pub fn for_uri(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let current_folder = if uri.ends_with('/') {
            uri.clone()
        } else {
            parent_folder(&uri).unwrap_or_else(default_root_folder)
        };
        Self::new(uri, current_folder)
    }

    pub fn with_servlet_path(mut self, servlet_path: impl Into<String>) -> Self {
        self.servlet_path = servlet_path.into();
        self
    }

    pub fn with_root_folder(mut self, root_folder: impl Into<String>) -> Self {
        self.root_folder = root_folder.into();
        self
    }

    /// Link of the site's root page (`servlet_path + "/"`)
    pub fn root_page(&self) -> String {
        format!("{}/", self.servlet_path)
    }
}
