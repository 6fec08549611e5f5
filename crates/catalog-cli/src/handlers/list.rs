use super::load_snapshot;
use crate::context::ExecutionContext;
use crate::presentation::SurfaceState;
use crate::presentation::renderers::{ListReport, render_list_plain};
use crate::types::OutputFormat;
use anyhow::Result;
use catalog_engine::{GridMetrics, column_count, derive_view};
use catalog_types::FilterState;
use is_terminal::IsTerminal;

const FALLBACK_WIDTH: u16 = 80;

pub fn handle(
    ctx: &ExecutionContext,
    filter: &FilterState,
    width: Option<u16>,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = load_snapshot(ctx)?;
    let view = derive_view(&snapshot.products, filter);

    let width = width.unwrap_or_else(terminal_width);
    let columns = column_count(u32::from(width), &GridMetrics::terminal());
    let state = SurfaceState::derive(snapshot.is_loading, view.shown());
    let report = ListReport::new(state, &view, columns);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print!("{}", render_list_plain(&report, ctx.flags(), color));
        }
    }

    Ok(())
}

fn terminal_width() -> u16 {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w)
        .unwrap_or(FALLBACK_WIDTH)
}
