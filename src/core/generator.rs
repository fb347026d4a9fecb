//! Prompt Generator Facade
//!
//! One generator is a thin configuration: a slug, a catalog, an optional
//! template set, and the three persisted lists keyed under the slug. The
//! dozens of near-identical pages of the original app collapse into
//! instances of this one type.
//!
//! ## Example
//!
//! ```rust,ignore
//! let backend = Arc::new(FileBackend::new(data_dir));
//! let mut gen = PromptGenerator::new("writing-prompts", builtin::writing_prompts(), backend);
//!
//! let result = gen.generate(&SelectionRequest::any(), &mut rand::thread_rng())?;
//! gen.save(PromptEntry::from(result));
//! let export = gen.export_saved()?;
//! ```

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use super::catalog::Catalog;
use super::errors::{PromptError, Result};
use super::export::ExportFile;
use super::selection::{SelectionEngine, SelectionRequest, SelectionResult};
use super::store::backend::StorageBackend;
use super::store::{ListKind, PromptEntry, PromptStore};
use super::template::TemplateSet;

/// Category recorded on template-rendered results.
const TEMPLATE_CATEGORY: &str = "template";

/// A configured generator: catalog + engines + persisted lists.
pub struct PromptGenerator {
    slug: String,
    catalog: Catalog,
    templates: Option<TemplateSet>,
    engine: SelectionEngine,
    history: PromptStore,
    saved: PromptStore,
    favorites: PromptStore,
}

impl PromptGenerator {
    /// Create a generator for `slug`, opening its persisted lists.
    pub fn new(
        slug: impl Into<String>,
        catalog: Catalog,
        backend: Arc<dyn StorageBackend>,
    ) -> Self {
        let slug = slug.into();
        let history = PromptStore::open(slug.clone(), ListKind::History, backend.clone());
        let saved = PromptStore::open(slug.clone(), ListKind::Saved, backend.clone());
        let favorites = PromptStore::open(slug.clone(), ListKind::Favorites, backend);

        info!(%slug, catalog = %catalog.name, "Opened generator");
        Self {
            slug,
            catalog,
            templates: None,
            engine: SelectionEngine::new(),
            history,
            saved,
            favorites,
        }
    }

    /// Attach a template set (builder style).
    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Use a page-specific batch separator (builder style).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.engine = self.engine.with_separator(separator);
        self
    }

    /// The generator slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The injected catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True when a template set is attached.
    pub fn has_templates(&self) -> bool {
        self.templates.is_some()
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Draw from the catalog and push the result onto History.
    pub fn generate(
        &mut self,
        request: &SelectionRequest,
        rng: &mut impl Rng,
    ) -> Result<SelectionResult> {
        let result = self.engine.select(&self.catalog, request, rng)?;
        self.history.append(PromptEntry::from(result.clone()));
        Ok(result)
    }

    /// Render one template-substituted prompt and push it onto History.
    pub fn render_template(&mut self, rng: &mut impl Rng) -> Result<SelectionResult> {
        let templates = self.templates.as_ref().ok_or_else(|| PromptError::NoTemplateSet {
            slug: self.slug.clone(),
        })?;

        let text = templates.render(rng)?;
        let result = SelectionResult {
            id: uuid::Uuid::new_v4(),
            text,
            category: TEMPLATE_CATEGORY.to_string(),
            created_at: chrono::Utc::now(),
            is_batch: false,
        };
        self.history.append(PromptEntry::from(result.clone()));
        Ok(result)
    }

    // ========================================================================
    // Persisted Lists
    // ========================================================================

    /// History entries, newest-first.
    pub fn history(&self) -> &[PromptEntry] {
        self.history.entries()
    }

    /// Saved entries, append order. Saved is an append-only scrapbook:
    /// there is no removal operation, only export.
    pub fn saved(&self) -> &[PromptEntry] {
        self.saved.entries()
    }

    /// Favorite entries.
    pub fn favorites(&self) -> &[PromptEntry] {
        self.favorites.entries()
    }

    /// Keep an entry in the Saved list.
    pub fn save(&mut self, entry: PromptEntry) {
        self.saved.append(entry);
    }

    /// Toggle an entry in Favorites; returns true when now favorited.
    pub fn toggle_favorite(&mut self, entry: &PromptEntry) -> bool {
        self.favorites.toggle(entry)
    }

    /// True when the entry id is currently favorited.
    pub fn is_favorite(&self, id: &uuid::Uuid) -> bool {
        self.favorites.contains(id)
    }

    /// Drop all History entries.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Export the Saved list as an indented-JSON blob named
    /// `saved-<slug>.json`.
    pub fn export_saved(&self) -> Result<ExportFile> {
        Ok(self.saved.export()?)
    }
}

// ============================================================================
// Tests
// ============================================================================
