pub mod browse;
pub mod categories;
pub mod list;

use crate::context::ExecutionContext;
use anyhow::Result;
use catalog_runtime::StoreSnapshot;

/// Run one load to completion and return the settled snapshot.
///
/// One-shot commands have nothing to wait on, so the store is marked ready
/// immediately. Fetch failures come back as an empty, settled snapshot.
pub(crate) fn load_snapshot(ctx: &ExecutionContext) -> Result<StoreSnapshot> {
    let (ready, store) = ctx.product_store()?;
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        ready.mark_ready();
        store.load().await;
    });

    Ok(store.snapshot())
}
