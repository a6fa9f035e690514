//! Navigation Engine
//!
//! Builds navigation listings for a hierarchical resource store:
//!
//! - [`path_resolver`] - Level-based folder resolution
//! - [`extractor`] - Selection and ordering of navigation entries
//! - [`renderer`] - Flat rendering through template blocks
//! - [`tree_renderer`] - Recursive rendering of nested folders
//! - [`facade`] - Named operations bound to one request
//!
//! # Control Flow
//!
//! 1. The facade picks a reference folder (current, root, or level-resolved)
//! 2. The store lists that folder's sub-folders and files
//! 3. The extractor filters and sorts them into `NavigationEntry` values
//! 4. The flat or tree renderer turns the entries into a string
//!
//! Every build is a fresh, synchronous pass; nothing is cached between calls.

mod error;
pub mod extractor;
pub mod facade;
pub mod path_resolver;
pub mod renderer;
pub mod tree_renderer;

pub use error::{NavigationError, Result};
pub use extractor::NavigationExtractor;
pub use facade::NavigationFacade;
pub use path_resolver::resolve_folder;
pub use renderer::NavigationRenderer;
pub use tree_renderer::TreeRenderer;
