//! Prompt Selection Engine
//!
//! Picks one or more items from a catalog per a selection request.
//!
//! Category resolution: a named category is used directly; `any` draws a
//! category uniformly at random. Each item in a batch independently
//! re-resolves the category, so an `any` batch may span categories. Items
//! are drawn with replacement; duplicates within a batch are expected.
//!
//! The engine is a pure function over the catalog and a caller-supplied
//! random source, which keeps every draw reproducible under a seeded rng.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::Catalog;
use super::errors::SelectionError;

/// Category requested by the caller: a specific key or any category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryChoice {
    /// Draw the category uniformly at random per item.
    #[default]
    Any,
    /// Use this category for every item.
    Named(String),
}

impl CategoryChoice {
    /// Parse a user-facing category string (`"any"` means any).
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("any") {
            Self::Any
        } else {
            Self::Named(s.to_string())
        }
    }
}

/// A request to draw prompts from a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub category: CategoryChoice,
    pub count: u32,
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self {
            category: CategoryChoice::Any,
            count: 1,
        }
    }
}

impl SelectionRequest {
    /// Single draw from any category.
    pub fn any() -> Self {
        Self::default()
    }

    /// Single draw from a named category.
    pub fn named(category: impl Into<String>) -> Self {
        Self {
            category: CategoryChoice::Named(category.into()),
            count: 1,
        }
    }

    /// Set the batch count (builder style).
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// One generated prompt (or joined batch of prompts).
///
/// The `id` is a fresh UUID, deliberately distinct from the display
/// timestamp so two results created in the same millisecond never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub id: Uuid,
    pub text: String,
    /// Source category of the draw. For an `any`-mode batch that may span
    /// categories this is the literal `"any"`.
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub is_batch: bool,
}

/// Core engine for catalog selection.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    separator: String,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionEngine {
    /// Separator between items of a joined batch.
    pub const DEFAULT_SEPARATOR: &'static str = "\n\n";

    /// Create an engine with the default batch separator.
    pub fn new() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Set a page-specific batch separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The configured batch separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Draw `request.count` items from the catalog.
    ///
    /// Fails fast on malformed requests (`count < 1`, unknown category,
    /// empty catalog); a valid request cannot fail.
    pub fn select(
        &self,
        catalog: &Catalog,
        request: &SelectionRequest,
        rng: &mut impl Rng,
    ) -> Result<SelectionResult, SelectionError> {
        if request.count < 1 {
            return Err(SelectionError::InvalidCount(request.count));
        }
        if catalog.is_empty() {
            return Err(SelectionError::EmptyCatalog(catalog.name.clone()));
        }
        if let CategoryChoice::Named(key) = &request.category {
            if !catalog.contains(key) {
                return Err(SelectionError::unknown_category(&catalog.name, key));
            }
        }

        let mut parts: Vec<String> = Vec::with_capacity(request.count as usize);
        let mut drawn_category = String::new();

        for _ in 0..request.count {
            // Re-resolve the category for every item; an `any` batch may
            // span categories.
            let (key, items) = match &request.category {
                CategoryChoice::Any => catalog
                    .random_category(rng)
                    .ok_or_else(|| SelectionError::EmptyCatalog(catalog.name.clone()))?,
                CategoryChoice::Named(key) => {
                    let items = catalog
                        .items(key)
                        .ok_or_else(|| SelectionError::unknown_category(&catalog.name, key))?;
                    (key.as_str(), items)
                }
            };

            // Categories are validated non-empty, but guard anyway.
            let item = items
                .choose(rng)
                .ok_or_else(|| SelectionError::EmptyCatalog(catalog.name.clone()))?;

            parts.push(item.clone());
            drawn_category = key.to_string();
        }

        let is_batch = request.count > 1;
        let category = match (&request.category, is_batch) {
            (CategoryChoice::Named(key), _) => key.clone(),
            (CategoryChoice::Any, false) => drawn_category,
            (CategoryChoice::Any, true) => "any".to_string(),
        };

        tracing::debug!(
            catalog = %catalog.name,
            %category,
            count = request.count,
            "Selected prompt"
        );

        Ok(SelectionResult {
            id: Uuid::new_v4(),
            text: parts.join(&self.separator),
            category,
            created_at: Utc::now(),
            is_batch,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
