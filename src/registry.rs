//! Catalog registry mapping pattern names to demonstrations.
//!
//! The registry is built once during single-threaded startup and is
//! read-only afterwards, so lookups need no locking - including from
//! parallel runner workers. Listing preserves registration order, which is
//! fixed by the catalog source listing, not alphabetical.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Category, Demo};

/// Error when registering or resolving a demonstration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A demonstration with this name is already registered.
    /// Registration happens at startup from a fixed listing, so hitting
    /// this is a build-time defect, not a runtime condition.
    #[error("Demonstration '{0}' is already registered")]
    DuplicateName(String),
    /// No demonstration with this name exists in the catalog
    #[error("Demonstration '{0}' not found")]
    NotFound(String),
}

/// Registry for pattern demonstrations.
///
/// Backed by an order-preserving vector plus a name index, so `list` walks
/// registration order while `lookup` stays O(1).
#[derive(Debug, Clone, Default)]
pub struct DemoRegistry {
    demos: Vec<Demo>,
    index: HashMap<&'static str, usize>,
}

impl DemoRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { demos: Vec::new(), index: HashMap::new() }
    }

    /// Build the registry holding the full built-in catalog, in source
    /// listing order.
    ///
    /// Returns `DuplicateName` if the built-in listing is inconsistent;
    /// that indicates a defect in the catalog itself and is treated as
    /// fatal by callers.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for demo in crate::patterns::builtin_demos() {
            registry.register(demo)?;
        }
        Ok(registry)
    }

    /// Register a demonstration.
    ///
    /// Fails with `DuplicateName` if the name is already present; names are
    /// case-sensitive and unique across the catalog.
    pub fn register(&mut self, demo: Demo) -> Result<(), RegistryError> {
        if self.index.contains_key(demo.name) {
            return Err(RegistryError::DuplicateName(demo.name.to_string()));
        }
        self.index.insert(demo.name, self.demos.len());
        self.demos.push(demo);
        Ok(())
    }

    /// Look up a demonstration by name.
    pub fn lookup(&self, name: &str) -> Result<&Demo, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.demos[i])
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Check if a demonstration with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All registered names, optionally filtered to one category, in
    /// registration order.
    pub fn list(&self, category: Option<Category>) -> Vec<&'static str> {
        self.demos
            .iter()
            .filter(|d| category.map_or(true, |c| d.category == c))
            .map(|d| d.name)
            .collect()
    }

    /// Iterator over all registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.demos.iter().map(|d| d.name)
    }

    /// Iterator over all demonstrations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Demo> {
        self.demos.iter()
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }
}
