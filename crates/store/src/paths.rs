//! Storage directory structure
//!
//! Each user owns one directory under the storage root, holding a single
//! document file plus a transient temporary sibling during writes:
//!
//! ```text
//! <root>/
//! ├── alice/
//! │   ├── layout.json          # current document
//! │   └── .layout.json.tmp     # transient, removed on every code path
//! └── bob/
//!     └── layout.json
//! ```

use glassboard_core::UserId;
use std::path::{Path, PathBuf};

/// Document file name within a user directory.
pub const LAYOUT_FILE_NAME: &str = "layout.json";

/// Temporary sibling written before the atomic rename.
pub const LAYOUT_TEMP_NAME: &str = ".layout.json.tmp";

/// Paths within the layout storage directory.
#[derive(Debug, Clone)]
pub struct StorePaths {
    root: PathBuf,
}

impl StorePaths {
    /// Create paths from the storage root directory.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        StorePaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory owned by one user.
    pub fn user_dir(&self, user: &UserId) -> PathBuf {
        self.root.join(user.as_str())
    }

    /// The user's document file.
    pub fn layout_file(&self, user: &UserId) -> PathBuf {
        self.user_dir(user).join(LAYOUT_FILE_NAME)
    }

    /// The transient temporary file used during a write.
    pub fn temp_file(&self, user: &UserId) -> PathBuf {
        self.user_dir(user).join(LAYOUT_TEMP_NAME)
    }
}

// ============================================================================
// Tests
// ============================================================================
