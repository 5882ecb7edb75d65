//! Paginated, idempotent bulk delete for cascade cleanup.
//!
//! Deletes run in fixed-size pages to stay within write-batch limits and
//! loop until a query pass returns no rows. Invoking against an empty
//! result set is a no-op.

use anyhow::Result;
use tracing::{debug, info};

use crate::domains::matching::models::MatchOwner;
use crate::kernel::BaseStaffingStore;

/// Page size per delete pass.
const DELETE_BATCH_SIZE: u32 = 100;

/// Delete every still-pending match owned by `owner`, page by page.
/// Returns the total number of records removed.
pub async fn delete_pending_matches(
    store: &dyn BaseStaffingStore,
    owner: &MatchOwner,
) -> Result<u64> {
    let mut total: u64 = 0;
    loop {
        let ids = store.find_pending_match_ids(owner, DELETE_BATCH_SIZE).await?;
        if ids.is_empty() {
            break;
        }
        let deleted = store.delete_potential_matches(&ids).await?;
        total += deleted;
        debug!(owner = %owner, deleted, "Deleted page of pending matches");
        // A pass that found rows but deleted none would repeat forever.
        if deleted == 0 {
            break;
        }
    }
    info!(owner = %owner, total, "Cascade delete complete");
    Ok(total)
}
