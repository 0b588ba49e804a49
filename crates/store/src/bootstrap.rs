//! Startup initialization
//!
//! Ensures every known user has a layout document before the service starts
//! taking requests. One bad user never blocks startup for the rest: per-user
//! failures are logged and skipped.

use crate::store::LayoutStore;
use tracing::{error, info};

/// Create default layouts for every user that does not have one yet.
///
/// User identifiers come from an external user directory; this function only
/// walks whatever it is handed. Returns the number of layouts created.
pub fn initialize_layouts<I, S>(store: &LayoutStore, user_ids: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut checked = 0usize;
    let mut created = 0usize;

    for user_id in user_ids {
        let user_id = user_id.as_ref();
        checked += 1;
        match store.ensure_layout(user_id) {
            Ok(true) => created += 1,
            Ok(false) => {}
            Err(err) => {
                error!(
                    target: "glassboard::bootstrap",
                    user = user_id,
                    error = %err,
                    "failed to initialize layout; skipping user"
                );
            }
        }
    }

    if created > 0 {
        info!(
            target: "glassboard::bootstrap",
            checked, created,
            "initialized missing layout documents"
        );
    } else {
        info!(
            target: "glassboard::bootstrap",
            checked,
            "all users already have layout documents"
        );
    }

    created
}

// ============================================================================
// Tests
// ============================================================================
