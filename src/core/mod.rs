//! Core prompt generation systems.
//!
//! # Modules
//!
//! - `catalog` - Prompt catalogs (flat or partitioned into named categories)
//! - `selection` - Random selection engine over a catalog
//! - `template` - `{token}` template substitution engine
//! - `store` - Persisted History/Saved/Favorites lists
//! - `export` - JSON export of persisted lists
//! - `share` - Clipboard and share-sheet collaborators
//! - `generator` - Facade tying a catalog, templates, and stores together
//! - `builtin` - Built-in catalogs and template sets
//! - `errors` - Error types for all core operations
//! - `logging` - Tracing/log initialization

pub mod builtin;
pub mod catalog;
pub mod errors;
pub mod export;
pub mod generator;
pub mod logging;
pub mod selection;
pub mod share;
pub mod store;
pub mod template;

pub use catalog::Catalog;
pub use errors::{
    CatalogError, PromptError, SelectionError, ShareError, StoreError, TemplateError,
};
pub use export::ExportFile;
pub use generator::PromptGenerator;
pub use selection::{CategoryChoice, SelectionEngine, SelectionRequest, SelectionResult};
pub use share::{share_or_copy, Clipboard, LogClipboard, SharePayload, ShareOutcome, ShareTarget};
pub use store::{ListKind, PromptEntry, PromptStore, HISTORY_CAP};
pub use store::backend::{FileBackend, MemoryBackend, StorageBackend};
pub use template::TemplateSet;
