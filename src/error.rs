//! Error type shared by the controllers and browser bindings.
//!
//! ERROR HANDLING
//! ==============
//! None of these reach the visitor. Controllers recover locally: a missing
//! element skips the behavior, an unknown stored theme falls back to auto,
//! and a failed CV probe turns into the single alert notice.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    /// An element the behavior depends on is not in the document.
    #[error("element not found: {0}")]
    MissingElement(String),

    /// `localStorage` is unavailable or rejected the write.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// The existence probe could not complete.
    #[error("probe failed: {0}")]
    Probe(String),

    /// A persisted theme name outside auto/light/dark.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),

    /// Page configuration overrides were not valid JSON.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
