//! Error types for wyrmseek
//!
//! The search paths themselves are total: a query that matches nothing
//! yields an empty result list, never an error. The fallible surface is
//! limited to parsing user-supplied shortcut bindings.

use thiserror::Error;

/// Errors that can occur in wyrmseek
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WyrmseekError {
    /// Shortcut binding with no key (e.g. "ctrl+")
    #[error("Shortcut error: no key in binding '{0}'")]
    ShortcutMissingKey(String),

    /// Shortcut binding with a token that is neither a modifier nor a key
    #[error("Shortcut error: unknown token '{0}'")]
    ShortcutUnknownToken(String),
}

/// Result type alias for wyrmseek operations
pub type WyrmseekResult<T> = Result<T, WyrmseekError>;
