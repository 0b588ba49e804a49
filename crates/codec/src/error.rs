//! Codec error type

use thiserror::Error;

/// Error returned when an on-disk layout document cannot be parsed.
///
/// A document that fails to decode is surfaced to the caller as-is; it is
/// never silently replaced with a default, since that would destroy the
/// user's stored layout.
#[derive(Debug, Error)]
#[error("malformed layout document: {0}")]
pub struct FormatError(#[from] serde_json::Error);
