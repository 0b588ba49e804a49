//! Error types for the layout store
//!
//! Validation errors (`InvalidUserId`, `InvalidApi`, `InvalidTemplateName`,
//! `NotFound`) are detected and returned before any I/O. Storage errors
//! (`Format`, `Io`) carry the user id and the failed operation so a failure
//! can be diagnosed without exposing filesystem paths to the caller.

use glassboard_codec::FormatError;
use glassboard_core::UserIdError;
use std::io;
use thiserror::Error;

/// Result type alias for layout-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for layout-store operations
#[derive(Debug, Error)]
pub enum Error {
    /// The storage root could not be created at startup
    ///
    /// A startup precondition, not a runtime error: callers abort on it.
    #[error("failed to initialize layout storage root")]
    Init {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// User identifier is empty or contains path-traversal sequences
    #[error("invalid user id: {0}")]
    InvalidUserId(#[from] UserIdError),

    /// Widget identifier is empty on a mutating call
    #[error("widget api cannot be empty")]
    InvalidApi,

    /// Template name is empty on a rename
    #[error("template name cannot be empty")]
    InvalidTemplateName,

    /// Patch targeted a widget absent from the layout
    #[error("widget {api:?} not found in layout")]
    NotFound {
        /// The widget identifier that was targeted
        api: String,
    },

    /// The stored document failed to parse
    #[error("stored layout for user {user} is malformed: {source}")]
    Format {
        /// User whose document failed to parse
        user: String,
        /// Underlying codec error
        source: FormatError,
    },

    /// A storage-layer read, write or rename failed
    #[error("failed to {op} for user {user}")]
    Io {
        /// User the operation was for
        user: String,
        /// The operation that failed (e.g. "read layout", "save layout")
        op: &'static str,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Tests
// ============================================================================
