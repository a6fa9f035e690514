//! SiteNav Core Navigation Engine
//!
//! This crate generates navigation listings (menus, breadcrumbs-style page
//! links, nested site trees) for a tree-structured resource store whose
//! resources carry navigation position and text properties.
//!
//! # Architecture
//!
//! - **Store-agnostic**: the resource tree is reached through the
//!   [`store::ResourceStore`] trait; [`store::MemoryStore`] is bundled
//! - **Template-driven**: markup lives in named template blocks rendered by a
//!   [`template::TemplateEngine`]; [`template::BlockTemplates`] is bundled
//! - **Per-request**: every build is a synchronous pass over fresh store reads
//!
//! # Modules
//!
//! - [`models`] - Data structures (ResourceNode, NavigationEntry, RequestContext)
//! - [`navigation`] - Folder resolution, extraction, rendering and the facade
//! - [`store`] - Resource store abstraction and in-memory implementation
//! - [`template`] - Template contract and placeholder engine
//! - [`config`] - Property, block and naming configuration

pub mod config;
pub mod models;
pub mod navigation;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use config::NavigationConfig;
pub use models::*;
pub use navigation::{NavigationError, NavigationFacade, Result};
