//! Layout storage configuration
//!
//! The store has a single setting: the root directory documents live under.
//! The hosting environment overrides it via `GLASSBOARD_LAYOUT_ROOT`; unset,
//! it falls back to a fixed relative path.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the storage root.
pub const STORAGE_ROOT_ENV: &str = "GLASSBOARD_LAYOUT_ROOT";

/// Storage root used when no override is configured.
pub const DEFAULT_STORAGE_ROOT: &str = "data/users";

/// Configuration for a [`crate::LayoutStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one subdirectory per user.
    pub root: PathBuf,
}

impl StoreConfig {
    /// Configuration with an explicit storage root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StoreConfig { root: root.into() }
    }

    /// Configuration from the hosting environment.
    ///
    /// Reads [`STORAGE_ROOT_ENV`]; falls back to [`DEFAULT_STORAGE_ROOT`]
    /// when unset.
    pub fn from_env() -> Self {
        match env::var_os(STORAGE_ROOT_ENV) {
            Some(root) => StoreConfig::new(PathBuf::from(root)),
            None => StoreConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_STORAGE_ROOT)
    }
}

// ============================================================================
// Tests
// ============================================================================
