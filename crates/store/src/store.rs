//! Per-user layout store
//!
//! Owns one layout document per user identifier, persisted as a text file
//! under the storage root. Operations load the document, mutate it in
//! memory, and atomically replace the file, so a reader never observes a
//! partially written document.
//!
//! # Concurrency
//!
//! One reader/writer lock per user identifier, created lazily on first use
//! and cached for the process lifetime. Operations on different users never
//! contend; operations on the same user serialize, with concurrent reads
//! allowed between writes. A `get` that must create the default document
//! releases its read lock, takes the write lock, and re-checks existence,
//! so racing first accesses create the default exactly once.
//!
//! # Write protocol
//!
//! Encode → write temp file → fsync → rename over the target → fsync the
//! parent directory. On failure the temp file is removed and an `Io` error
//! is surfaced; the previous document is left intact.

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::paths::StorePaths;
use dashmap::DashMap;
use glassboard_codec as codec;
use glassboard_core::defaults::{default_layout, default_placement};
use glassboard_core::{LayoutDocument, PlacementPatch, UserId, WidgetPlacement};
use parking_lot::RwLock;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Per-user layout document store.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct LayoutStore {
    paths: StorePaths,
    locks: DashMap<String, Arc<RwLock<()>>>,
}

impl LayoutStore {
    /// Open a store rooted at `config.root`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] when the root cannot be created. This is a
    /// startup precondition; callers are expected to abort on it.
    pub fn open(config: StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.root).map_err(|source| Error::Init { source })?;
        info!(
            target: "glassboard::store",
            root = ?config.root,
            "layout storage directory initialized"
        );
        Ok(LayoutStore {
            paths: StorePaths::from_root(&config.root),
            locks: DashMap::new(),
        })
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Load the user's layout, creating and persisting the default layout
    /// on first access.
    pub fn get(&self, user_id: &str) -> Result<LayoutDocument> {
        let user = UserId::new(user_id)?;
        let lock = self.user_lock(&user);

        let guard = lock.read();
        if self.paths.layout_file(&user).exists() {
            return self.load(&user);
        }
        drop(guard);

        // First access: re-check under the write lock so racing readers
        // cannot both create the default.
        let _guard = lock.write();
        if self.paths.layout_file(&user).exists() {
            return self.load(&user);
        }
        self.create_default(&user)
    }

    /// Install a widget using its registry defaults.
    ///
    /// Equivalent to [`install_with`](Self::install_with) with no defaults
    /// and no overrides.
    pub fn install(&self, user_id: &str, api: &str) -> Result<LayoutDocument> {
        self.install_with(user_id, api, None, None)
    }

    /// Install a widget into the user's layout.
    ///
    /// If a placement with the same `api` already exists, `overrides` is
    /// merged into it and nothing else changes (no duplicate is appended).
    /// Otherwise a new placement is appended: seeded from `defaults` when
    /// given, else from the registry default when the widget is known, else
    /// empty; `overrides` is then merged on top.
    pub fn install_with(
        &self,
        user_id: &str,
        api: &str,
        defaults: Option<&PlacementPatch>,
        overrides: Option<&PlacementPatch>,
    ) -> Result<LayoutDocument> {
        let user = UserId::new(user_id)?;
        let api = valid_api(api)?;
        let lock = self.user_lock(&user);
        let _guard = lock.write();

        let mut doc = self.load_or_create(&user)?;
        match doc.components.iter().position(|c| c.api == api) {
            Some(index) => {
                if let Some(patch) = overrides {
                    doc.components[index].merge(patch);
                }
                info!(target: "glassboard::store", user = %user, api, "updated installed widget");
            }
            None => {
                let mut placement = match defaults {
                    Some(seed) => WidgetPlacement::seeded(api, seed),
                    None => default_placement(api).unwrap_or_else(|| WidgetPlacement::new(api)),
                };
                if let Some(patch) = overrides {
                    placement.merge(patch);
                }
                doc.components.push(placement);
                info!(target: "glassboard::store", user = %user, api, "installed widget");
            }
        }

        self.persist(&user, &doc)?;
        Ok(doc)
    }

    /// Remove a widget from the user's layout.
    ///
    /// Removing a widget that is not installed is a no-op, not an error;
    /// the unchanged document is returned and nothing is rewritten.
    pub fn uninstall(&self, user_id: &str, api: &str) -> Result<LayoutDocument> {
        let user = UserId::new(user_id)?;
        let api = valid_api(api)?;
        let lock = self.user_lock(&user);
        let _guard = lock.write();

        let mut doc = self.load_or_create(&user)?;
        if doc.remove_component(api) {
            self.persist(&user, &doc)?;
            info!(target: "glassboard::store", user = %user, api, "uninstalled widget");
        } else {
            warn!(target: "glassboard::store", user = %user, api, "widget not installed; nothing to remove");
        }
        Ok(doc)
    }

    /// Merge a patch into an existing placement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no placement has the given `api`.
    pub fn patch(&self, user_id: &str, api: &str, patch: &PlacementPatch) -> Result<LayoutDocument> {
        let user = UserId::new(user_id)?;
        let api = valid_api(api)?;
        let lock = self.user_lock(&user);
        let _guard = lock.write();

        let mut doc = self.load_or_create(&user)?;
        let component = doc.component_mut(api).ok_or_else(|| Error::NotFound {
            api: api.to_string(),
        })?;
        component.merge(patch);

        self.persist(&user, &doc)?;
        info!(target: "glassboard::store", user = %user, api, "updated component");
        Ok(doc)
    }

    /// Replace the layout's template name.
    pub fn set_template_name(&self, user_id: &str, name: &str) -> Result<LayoutDocument> {
        let user = UserId::new(user_id)?;
        if name.trim().is_empty() {
            return Err(Error::InvalidTemplateName);
        }
        let lock = self.user_lock(&user);
        let _guard = lock.write();

        let mut doc = self.load_or_create(&user)?;
        doc.template_name = name.to_string();

        self.persist(&user, &doc)?;
        info!(target: "glassboard::store", user = %user, name, "set template name");
        Ok(doc)
    }

    /// Create the user's default layout if no document exists yet.
    ///
    /// Returns `true` when a document was created, `false` when one was
    /// already present. Used by startup initialization.
    pub fn ensure_layout(&self, user_id: &str) -> Result<bool> {
        let user = UserId::new(user_id)?;
        let lock = self.user_lock(&user);
        let _guard = lock.write();

        if self.paths.layout_file(&user).exists() {
            return Ok(false);
        }
        self.create_default(&user)?;
        Ok(true)
    }

    /// The per-user lock, created on first use (first caller wins).
    fn user_lock(&self, user: &UserId) -> Arc<RwLock<()>> {
        self.locks
            .entry(user.as_str().to_string())
            .or_insert_with(|| Arc::new(RwLock::new(())))
            .clone()
    }

    /// Load an existing document, or create the default. Caller must hold
    /// the user's write lock.
    fn load_or_create(&self, user: &UserId) -> Result<LayoutDocument> {
        if self.paths.layout_file(user).exists() {
            self.load(user)
        } else {
            self.create_default(user)
        }
    }

    fn create_default(&self, user: &UserId) -> Result<LayoutDocument> {
        let doc = default_layout();
        self.persist(user, &doc)?;
        info!(target: "glassboard::store", user = %user, "created default layout");
        Ok(doc)
    }

    fn load(&self, user: &UserId) -> Result<LayoutDocument> {
        let text = fs::read_to_string(self.paths.layout_file(user)).map_err(|source| Error::Io {
            user: user.to_string(),
            op: "read layout",
            source,
        })?;
        codec::decode(&text).map_err(|source| Error::Format {
            user: user.to_string(),
            source,
        })
    }

    fn persist(&self, user: &UserId, doc: &LayoutDocument) -> Result<()> {
        let dir = self.paths.user_dir(user);
        fs::create_dir_all(&dir).map_err(|source| Error::Io {
            user: user.to_string(),
            op: "create user directory",
            source,
        })?;

        let temp = self.paths.temp_file(user);
        let target = self.paths.layout_file(user);
        let text = codec::encode(doc);

        if let Err(source) = write_atomic(&temp, &target, &dir, text.as_bytes()) {
            let _ = fs::remove_file(&temp);
            error!(target: "glassboard::store", user = %user, error = %source, "failed to save layout");
            return Err(Error::Io {
                user: user.to_string(),
                op: "save layout",
                source,
            });
        }

        debug!(target: "glassboard::store", user = %user, "saved layout");
        Ok(())
    }
}

/// Write-fsync-rename-fsync so concurrent readers only ever observe a
/// complete document.
fn write_atomic(temp: &Path, target: &Path, dir: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(temp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp, target)?;

    File::open(dir)?.sync_all()?;
    Ok(())
}

fn valid_api(api: &str) -> Result<&str> {
    if api.trim().is_empty() {
        Err(Error::InvalidApi)
    } else {
        Ok(api)
    }
}

// ============================================================================
// Tests
// ============================================================================
