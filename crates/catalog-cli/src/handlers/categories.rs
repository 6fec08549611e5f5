use super::load_snapshot;
use crate::context::ExecutionContext;
use crate::presentation::renderers::{CategoryEntry, render_categories_plain};
use crate::types::OutputFormat;
use anyhow::Result;
use catalog_engine::categories;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let snapshot = load_snapshot(ctx)?;
    let entries: Vec<CategoryEntry> = categories(&snapshot.products)
        .iter()
        .map(CategoryEntry::from)
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => print!("{}", render_categories_plain(&entries)),
    }

    Ok(())
}
