/// Promptsmith - Creative Writing Prompt Generator (TUI Edition)
///
/// Core library providing prompt catalogs, random selection, template
/// substitution, and persisted History/Saved/Favorites lists for writers.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
