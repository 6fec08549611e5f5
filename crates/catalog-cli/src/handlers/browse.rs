use crate::context::ExecutionContext;
use crate::presentation::renderers::TuiCatalogView;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let (ready, store) = ctx.product_store()?;
    let updates = store.subscribe();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.spawn({
        let store = store.clone();
        async move { store.load().await }
    });

    tracing::info!(config = %ctx.config_path().display(), "browse session started");
    ready.mark_ready();

    let result = TuiCatalogView::run(updates, ctx.flags());

    // Drops an in-flight fetch instead of waiting for it
    runtime.shutdown_background();
    result
}
