//! Data Models
//!
//! This module contains the data structures used throughout SiteNav:
//!
//! - `ResourceNode` - Read-only view of a store file or folder
//! - `NavigationEntry` - A resource selected for a navigation listing
//! - `RequestContext` - The page being rendered and its link prefix

mod entry;
mod request;
mod resource;

pub use entry::NavigationEntry;
pub use request::RequestContext;
pub use resource::{ResourceKind, ResourceNode, ResourceState};
