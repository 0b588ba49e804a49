//! Core types for glassboard
//!
//! This crate defines the foundational types of the dashboard
//! personalization service:
//! - LayoutDocument / WidgetPlacement: the per-user layout model
//! - PlacementPatch: merge-patch shape for install/update operations
//! - UserId: validated user identifier (path-traversal safe)
//! - defaults: the static widget default registry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod defaults;
pub mod layout;
pub mod user_id;

// Re-export commonly used types
pub use layout::{
    CoordMap, LayoutDocument, PlacementPatch, WidgetPlacement, DEFAULT_COLOR,
    DEFAULT_TEMPLATE_NAME,
};
pub use user_id::{UserId, UserIdError};
