//! Glassboard - dashboard personalization service
//!
//! Each user owns a layout: an ordered set of widget placements plus a
//! template name. This crate's core is the per-user layout store, which
//! persists each layout as a document on durable storage, serializes
//! concurrent access per user, and applies structural merge-patch updates
//! atomically.
//!
//! # Quick Start
//!
//! ```ignore
//! use glassboard::{initialize_layouts, LayoutStore, PlacementPatch, StoreConfig};
//!
//! // Open the store (creates the storage root; fatal on failure)
//! let store = LayoutStore::open(StoreConfig::from_env())?;
//!
//! // Give every known user a document before taking traffic
//! initialize_layouts(&store, ["alice", "bob"]);
//!
//! // First read creates the default layout
//! let layout = store.get("alice")?;
//!
//! // Install a widget and recolor it
//! store.install("alice", "news")?;
//! store.patch("alice", "news", &PlacementPatch::new().with_color("green"))?;
//! ```
//!
//! # Architecture
//!
//! The HTTP layer, credential issuance and catalog browsing are external
//! collaborators; they call into the store through the re-exported API
//! below. Internals are split across three member crates: the data model
//! (`glassboard-core`), the on-disk text format (`glassboard-codec`), and
//! the store itself (`glassboard-store`).

// Re-export the public API
pub use glassboard_codec::{decode, encode, FormatError};
pub use glassboard_core::{
    defaults, CoordMap, LayoutDocument, PlacementPatch, UserId, UserIdError, WidgetPlacement,
    DEFAULT_COLOR, DEFAULT_TEMPLATE_NAME,
};
pub use glassboard_store::{
    initialize_layouts, Error, LayoutStore, Result, StoreConfig, DEFAULT_STORAGE_ROOT,
    STORAGE_ROOT_ENV,
};
