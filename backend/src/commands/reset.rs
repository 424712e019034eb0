// backend/src/commands/reset.rs

use tracing::info;

use crate::db::{COLLECTION_FILES, SESSION_FILE};
use crate::error::AppResult;
use crate::models::ResetSummary;
use crate::AppState;

/// Empties every collection file and drops any shift draft.
pub fn reset_all(state: &AppState) -> AppResult<ResetSummary> {
    let empty: [serde_json::Value; 0] = [];
    let mut cleared = Vec::with_capacity(COLLECTION_FILES.len());
    for file in COLLECTION_FILES {
        state.store.save(file, &empty)?;
        cleared.push(file.to_string());
    }
    if state.store.remove_doc(SESSION_FILE)? {
        cleared.push(SESSION_FILE.to_string());
    }

    info!(files = cleared.len(), "data reset");
    Ok(ResetSummary { cleared })
}
