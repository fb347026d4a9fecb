//! Error Types for Prompt Generation
//!
//! Defines error types for catalogs, selection, template rendering,
//! persisted list storage, and share/clipboard collaborators.
//! Uses thiserror for ergonomic error handling with rich context fields.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Catalog Errors
// ============================================================================

/// Errors that can occur when loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to load a catalog from file.
    #[error("Failed to load catalog '{name}' from {path}: {source}")]
    LoadFailed {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse catalog YAML.
    #[error("Failed to parse catalog '{name}': {source}")]
    ParseFailed {
        name: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Catalog has no categories (or no items in flat mode).
    #[error("Catalog '{name}' is empty")]
    Empty { name: String },

    /// A category exists but holds no items.
    #[error("Category '{category}' in catalog '{name}' is empty")]
    EmptyCategory { name: String, category: String },

    /// Invalid catalog structure.
    #[error("Invalid catalog structure in '{name}': {reason}")]
    InvalidStructure { name: String, reason: String },
}

impl CatalogError {
    /// Create a LoadFailed error.
    pub fn load_failed(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::LoadFailed {
            name: name.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a ParseFailed error.
    pub fn parse_failed(name: impl Into<String>, source: serde_yaml_ng::Error) -> Self {
        Self::ParseFailed {
            name: name.into(),
            source,
        }
    }

    /// Create an EmptyCategory error.
    pub fn empty_category(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self::EmptyCategory {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Create an InvalidStructure error.
    pub fn invalid_structure(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Selection Errors
// ============================================================================

/// Errors that can occur during prompt selection.
///
/// These are caller mistakes (malformed requests), not runtime conditions:
/// a valid request against a valid catalog cannot fail.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// Requested category does not exist in the catalog.
    #[error("Category '{category}' not found in catalog '{catalog}'")]
    UnknownCategory { catalog: String, category: String },

    /// Selection count must be a positive integer.
    #[error("Selection count must be at least 1 (got {0})")]
    InvalidCount(u32),

    /// The catalog has nothing to draw from.
    #[error("Catalog '{0}' has no items to draw from")]
    EmptyCatalog(String),
}

impl SelectionError {
    /// Create an UnknownCategory error.
    pub fn unknown_category(catalog: impl Into<String>, category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            catalog: catalog.into(),
            category: category.into(),
        }
    }
}

// ============================================================================
// Template Errors
// ============================================================================

/// Errors that can occur during template substitution.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template set holds no templates to choose from.
    #[error("Template set has no templates")]
    EmptyTemplateSet,

    /// A token is present in the token map but has no candidate values.
    #[error("Token '{token}' has an empty candidate list")]
    EmptyTokenList { token: String },
}

impl TemplateError {
    /// Create an EmptyTokenList error.
    pub fn empty_token_list(token: impl Into<String>) -> Self {
        Self::EmptyTokenList {
            token: token.into(),
        }
    }
}

// ============================================================================
// Store Errors
// ============================================================================

/// Errors that can occur in the persisted list store.
///
/// All store errors are recoverable: the in-memory list remains
/// authoritative for the session and the failure is logged, never fatal.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a stored list.
    #[error("Failed to read stored list at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a list to storage.
    #[error("Failed to write stored list at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a ReadFailed error.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a WriteFailed error.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Check if this error is recoverable (state survives in memory).
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

// ============================================================================
// Share Errors
// ============================================================================

/// Errors that can occur when copying or sharing a prompt.
#[derive(Error, Debug)]
pub enum ShareError {
    /// No share target is available on this platform.
    #[error("No share target available")]
    Unavailable,

    /// The platform denied the copy/share request.
    #[error("Share request denied: {0}")]
    Denied(String),
}

impl ShareError {
    /// Check if this error is recoverable (callers fall back or log).
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

// ============================================================================
// Unified Prompt Error
// ============================================================================

/// Unified error type for all prompt generator operations.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Share(#[from] ShareError),

    /// Generator was asked to render templates but has no template set.
    #[error("Generator '{slug}' has no template set")]
    NoTemplateSet { slug: String },
}

/// Type alias for Result with PromptError.
pub type Result<T> = std::result::Result<T, PromptError>;

// ============================================================================
// Tests
// ============================================================================
