//! Navigation entry extraction
//!
//! Turns the raw children of a folder into the ordered list of entries that
//! belong in a navigation listing.
//!
//! # Eligibility
//!
//! A resource becomes an entry only if all of these hold:
//!
//! - it is not deleted
//! - its position property is present and non-empty
//! - its text property is present and non-empty
//! - its name does not start with the temporary prefix, unless it is the
//!   requested resource itself
//!
//! # Ordering
//!
//! Entries are sorted ascending by position with a stable sort, so duplicate
//! positions keep the store's enumeration order.

use crate::config::NavigationConfig;
use crate::models::{NavigationEntry, ResourceNode};
use crate::navigation::{NavigationError, Result};
use crate::store::ResourceStore;
use std::cmp::Ordering;

/// Selects and orders navigation entries using properties read from a store
pub struct NavigationExtractor<'a> {
    store: &'a dyn ResourceStore,
    config: &'a NavigationConfig,
}

impl<'a> NavigationExtractor<'a> {
    pub fn new(store: &'a dyn ResourceStore, config: &'a NavigationConfig) -> Self {
        Self { store, config }
    }

    /// Extract the ordered navigation entries among `resources`
    ///
    /// # Errors
    ///
    /// - `NavigationError::InvalidPosition` if an otherwise eligible resource
    ///   carries a position that is not a number
    /// - `NavigationError::Store` if a property read fails
    pub fn extract(
        &self,
        resources: &[ResourceNode],
        active_request_path: &str,
    ) -> Result<Vec<NavigationEntry>> {
        let mut entries = Vec::with_capacity(resources.len());

        for resource in resources {
            if resource.is_deleted() {
                continue;
            }

            let position = self
                .store
                .read_property(&resource.path, &self.config.position_property)?;
            let text = self
                .store
                .read_property(&resource.path, &self.config.text_property)?;

            let (Some(position), Some(text)) = (position, text) else {
                continue;
            };
            if position.is_empty() || text.is_empty() {
                continue;
            }
            if self.config.is_temporary_name(&resource.name) && resource.path != active_request_path
            {
                tracing::trace!(path = %resource.path, "Skipping temporary resource");
                continue;
            }

            let position = parse_position(&resource.path, &position)?;
            entries.push(NavigationEntry::new(resource.path.clone(), text, position));
        }

        sort_entries(&mut entries);

        tracing::debug!(
            candidates = resources.len(),
            entries = entries.len(),
            "Extracted navigation entries"
        );
        Ok(entries)
    }
}

/// Parse a position property; surrounding whitespace is ignored
pub fn parse_position(path: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(position) if !position.is_nan() => Ok(position),
        _ => Err(NavigationError::invalid_position(path, raw)),
    }
}

/// Stable ascending sort by position
///
/// Positions are never NaN (rejected by `parse_position`), so the comparison
/// is total and equal positions compare `Equal`.
pub fn sort_entries(entries: &mut [NavigationEntry]) {
    entries.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod extractor_test;
