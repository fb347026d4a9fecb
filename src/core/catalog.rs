//! Prompt Catalogs
//!
//! A catalog is the static set of candidate strings a generator draws from,
//! either flat (one anonymous pool) or partitioned into named categories.
//! Catalogs are immutable once built and injected into the selection engine,
//! never read from module globals.
//!
//! # Architecture
//!
//! ```text
//! Catalog
//!   +-- name: String               (slug, used in logs and errors)
//!   +-- categories: IndexMap<String, Vec<String>>
//!   +-- flat: bool                 (flat catalogs use one reserved key)
//! ```

use std::path::Path;

use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// Reserved category key used by flat (uncategorized) catalogs.
pub const FLAT_KEY: &str = "all";

/// A static set of candidate prompt strings, optionally partitioned
/// into named categories. Category order is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog slug (also used as the default storage key prefix).
    pub name: String,

    /// Category key -> ordered candidate strings.
    pub categories: IndexMap<String, Vec<String>>,

    /// True when the catalog was built flat (single reserved category).
    #[serde(default)]
    pub flat: bool,
}

impl Catalog {
    /// Create an empty categorized catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: IndexMap::new(),
            flat: false,
        }
    }

    /// Create a flat catalog from a single list of items.
    pub fn flat(name: impl Into<String>, items: Vec<String>) -> Self {
        let mut categories = IndexMap::new();
        categories.insert(FLAT_KEY.to_string(), items);
        Self {
            name: name.into(),
            categories,
            flat: true,
        }
    }

    /// Add a category (builder style).
    pub fn with_category(
        mut self,
        key: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.categories
            .insert(key.into(), items.into_iter().map(Into::into).collect());
        self
    }

    /// Load a catalog from a YAML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "catalog".to_string());

        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::load_failed(name.clone(), path, e))?;

        let catalog: Catalog = serde_yaml_ng::from_str(&contents)
            .map_err(|e| CatalogError::parse_failed(name.clone(), e))?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate the catalog: non-empty, every category non-empty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.is_empty() {
            return Err(CatalogError::invalid_structure(
                "<unnamed>",
                "catalog name must not be empty",
            ));
        }
        if self.categories.is_empty() {
            return Err(CatalogError::Empty {
                name: self.name.clone(),
            });
        }
        for (key, items) in &self.categories {
            if items.is_empty() {
                return Err(CatalogError::empty_category(&self.name, key));
            }
        }
        Ok(())
    }

    /// Category keys in insertion order.
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// True if the catalog has a category with this key.
    pub fn contains(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    /// Items of a single category.
    pub fn items(&self, key: &str) -> Option<&[String]> {
        self.categories.get(key).map(Vec::as_slice)
    }

    /// Union of all category item lists, in catalog order.
    pub fn all_items(&self) -> impl Iterator<Item = &str> {
        self.categories
            .values()
            .flat_map(|items| items.iter().map(String::as_str))
    }

    /// Total number of items across every category.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// True if no category holds any item.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw a category uniformly at random.
    ///
    /// Every category has equal probability regardless of how many items
    /// it contains. Returns `None` on an empty catalog.
    pub fn random_category(&self, rng: &mut impl Rng) -> Option<(&str, &[String])> {
        if self.categories.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.categories.len());
        self.categories
            .get_index(idx)
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

// ============================================================================
// Tests
// ============================================================================
