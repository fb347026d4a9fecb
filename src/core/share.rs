//! Clipboard and share collaborators.
//!
//! Copy and share are platform concerns behind trait seams. Failures here
//! are never fatal: a denied copy is logged, an unavailable share target
//! falls back to copying the same content with the generator URL appended.

use tracing::{debug, warn};

use super::errors::ShareError;

/// Plain-text clipboard writer.
pub trait Clipboard {
    /// Write text to the clipboard.
    fn copy(&self, text: &str) -> Result<(), ShareError>;
}

/// Native share sheet (optional, feature-detected by the caller).
pub trait ShareTarget {
    /// Invoke the share sheet with a title, body, and URL.
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Content handed to share/copy actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Create a payload.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
        }
    }

    /// Clipboard form of the payload: body text with the URL appended.
    pub fn clipboard_text(&self) -> String {
        format!("{}\n{}", self.text, self.url)
    }
}

/// What a share attempt ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share target handled it.
    Shared,
    /// Fell back to the clipboard.
    Copied,
    /// Both share and clipboard failed; already logged.
    Failed,
}

/// Share via the target when one exists, otherwise (or on failure) copy
/// the payload text plus URL to the clipboard. Never panics, never
/// propagates: the worst case is a logged `Failed`.
pub fn share_or_copy(
    target: Option<&dyn ShareTarget>,
    clipboard: &dyn Clipboard,
    payload: &SharePayload,
) -> ShareOutcome {
    if let Some(target) = target {
        match target.share(payload) {
            Ok(()) => {
                debug!(title = %payload.title, "Shared via native target");
                return ShareOutcome::Shared;
            }
            Err(e) => {
                warn!(error = %e, "Share target failed, falling back to clipboard");
            }
        }
    }

    match clipboard.copy(&payload.clipboard_text()) {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "Clipboard copy failed");
            ShareOutcome::Failed
        }
    }
}

/// Default clipboard collaborator: logs the copied text.
///
/// The TUI has no portable OS clipboard; the trait seam is the contract
/// and a logging implementation keeps copy actions observable.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogClipboard;

impl Clipboard for LogClipboard {
    fn copy(&self, text: &str) -> Result<(), ShareError> {
        tracing::info!(chars = text.chars().count(), "Copied text");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
