//! User identifier type
//!
//! The store keys everything — documents, directories, locks — by a
//! caller-supplied user identifier. The identifier doubles as a directory
//! name on disk, so it is validated before any I/O:
//!
//! - must not be empty or whitespace-only
//! - must not contain `..`, `/`, or `\` (path traversal)
//!
//! Callers hand the store a plain `&str`; `UserId` is how a validated
//! identifier is carried internally.

use std::fmt;
use thiserror::Error;

/// Validated user identifier.
///
/// Guaranteed non-empty and free of path-traversal sequences. The original
/// string is preserved verbatim (surrounding whitespace included).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

/// Error when validating a user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIdError {
    /// Identifier is empty or whitespace-only
    #[error("user id cannot be empty")]
    Empty,
    /// Identifier contains a path-traversal sequence
    #[error("user id contains forbidden sequence {fragment:?}")]
    Traversal {
        /// The offending sequence
        fragment: &'static str,
    },
}

impl UserId {
    /// Create a new `UserId`, validating the input.
    ///
    /// # Errors
    ///
    /// Returns `UserIdError` if the identifier is empty or contains a
    /// path-traversal sequence.
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(UserId(id))
    }

    /// Validate a user identifier without constructing one.
    pub fn validate(id: &str) -> Result<(), UserIdError> {
        if id.trim().is_empty() {
            return Err(UserIdError::Empty);
        }
        for fragment in ["..", "/", "\\"] {
            if id.contains(fragment) {
                return Err(UserIdError::Traversal { fragment });
            }
        }
        Ok(())
    }

    /// Get the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserId::new(value)
    }
}

impl TryFrom<&str> for UserId {
    type Error = UserIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        UserId::new(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
