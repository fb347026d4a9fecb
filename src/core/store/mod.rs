//! Persisted List Store
//!
//! A storage-backed list abstraction for the three list kinds every
//! generator carries:
//!
//! - **History** - capped at the 20 most recent results, newest-first
//! - **Saved** - uncapped, append-only scrapbook of kept prompts
//! - **Favorites** - uncapped, toggled by entry id
//!
//! Every mutation is written through to the backend immediately. A failed
//! persistence write is logged and swallowed: the in-memory list stays
//! authoritative for the session, so the worst case is losing the list
//! across a restart, never a crash.

pub mod backend;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use self::backend::StorageBackend;
use super::errors::StoreError;
use super::export::ExportFile;
use super::selection::SelectionResult;

/// Maximum number of entries a History list retains.
pub const HISTORY_CAP: usize = 20;

// ============================================================================
// List Kinds
// ============================================================================

/// The three persisted list kinds, each with its own storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    History,
    Saved,
    Favorites,
}

impl ListKind {
    /// Get all list kinds.
    pub fn all() -> &'static [ListKind] {
        &[ListKind::History, ListKind::Saved, ListKind::Favorites]
    }

    /// Storage key for a generator slug, one key per `(slug, kind)` pair.
    pub fn storage_key(&self, slug: &str) -> String {
        match self {
            Self::History => format!("{slug}-prompt-history"),
            Self::Saved => format!("{slug}-saved-prompts"),
            Self::Favorites => format!("{slug}-favorites"),
        }
    }

    /// Deterministic filename for a JSON export of this list.
    pub fn export_filename(&self, slug: &str) -> String {
        match self {
            Self::History => format!("history-{slug}.json"),
            Self::Saved => format!("saved-{slug}.json"),
            Self::Favorites => format!("favorites-{slug}.json"),
        }
    }
}

// ============================================================================
// Entries
// ============================================================================

/// One persisted prompt. Membership tests compare by `id` only, never by
/// deep value equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptEntry {
    pub id: Uuid,
    pub text: String,
    pub category: String,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub is_batch: bool,

    /// Richer fields used by multi-field generators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl PromptEntry {
    /// Create a bare entry with a fresh id.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            category: category.into(),
            created_at: Utc::now(),
            is_batch: false,
            title: None,
            description: None,
            emoji: None,
        }
    }

    /// Set the title (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the emoji (builder style).
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }
}

impl From<SelectionResult> for PromptEntry {
    fn from(result: SelectionResult) -> Self {
        Self {
            id: result.id,
            text: result.text,
            category: result.category,
            created_at: result.created_at,
            is_batch: result.is_batch,
            title: None,
            description: None,
            emoji: None,
        }
    }
}

// ============================================================================
// Prompt Store
// ============================================================================

/// One persisted list, keyed by `(slug, kind)`, with write-through
/// persistence on every mutation.
pub struct PromptStore {
    slug: String,
    kind: ListKind,
    backend: Arc<dyn StorageBackend>,
    entries: Vec<PromptEntry>,
}

impl PromptStore {
    /// Open a store, loading any previously persisted list.
    ///
    /// A missing value yields an empty list; a corrupt stored value is
    /// logged and treated as absent rather than failing the open.
    pub fn open(
        slug: impl Into<String>,
        kind: ListKind,
        backend: Arc<dyn StorageBackend>,
    ) -> Self {
        let slug = slug.into();
        let key = kind.storage_key(&slug);

        let entries = match backend.read(&key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<PromptEntry>>(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(%key, error = %e, "Corrupt stored list, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(%key, error = %e, "Failed to read stored list, starting empty");
                Vec::new()
            }
        };

        debug!(%key, len = entries.len(), "Opened prompt store");
        Self {
            slug,
            kind,
            backend,
            entries,
        }
    }

    /// The storage key this store persists under.
    pub fn storage_key(&self) -> String {
        self.kind.storage_key(&self.slug)
    }

    /// The list kind.
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Current entries. History is newest-first.
    pub fn entries(&self) -> &[PromptEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when an entry with this id is present.
    pub fn contains(&self, id: &Uuid) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    /// Append an entry.
    ///
    /// History prepends and truncates to [`HISTORY_CAP`] (newest-first,
    /// oldest dropped); Saved and Favorites append to the end, uncapped.
    pub fn append(&mut self, entry: PromptEntry) {
        match self.kind {
            ListKind::History => {
                self.entries.insert(0, entry);
                self.entries.truncate(HISTORY_CAP);
            }
            ListKind::Saved | ListKind::Favorites => {
                self.entries.push(entry);
            }
        }
        self.persist();
    }

    /// Toggle an entry by id: remove it when present, append it otherwise.
    /// Returns true when the entry is present after the toggle.
    pub fn toggle(&mut self, entry: &PromptEntry) -> bool {
        let present = if let Some(pos) = self.entries.iter().position(|e| e.id == entry.id) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(entry.clone());
            true
        };
        self.persist();
        present
    }

    /// Remove every entry matching the predicate.
    pub fn remove_where(&mut self, predicate: impl Fn(&PromptEntry) -> bool) {
        self.entries.retain(|e| !predicate(e));
        self.persist();
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Serialize the full list to an indented-JSON export blob with a
    /// deterministic filename.
    pub fn export(&self) -> Result<ExportFile, StoreError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        Ok(ExportFile {
            filename: self.kind.export_filename(&self.slug),
            json,
        })
    }

    /// Write-through persistence. Backend failures are logged and the
    /// in-memory list stays authoritative for the session.
    fn persist(&self) {
        let key = self.storage_key();
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(%key, error = %e, "Failed to serialize list, skipping persist");
                return;
            }
        };
        if let Err(e) = self.backend.write(&key, &json) {
            warn!(%key, error = %e, "Persist failed, in-memory state retained");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
