use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use catalog_types::{CategoryFilter, FilterState};

pub fn run(cli: Cli) -> Result<()> {
    let target = match cli.command {
        None | Some(Commands::Browse) => LogTarget::browse_log_file(),
        Some(_) => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let ctx = ExecutionContext::from_cli(&cli)?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => handlers::browse::handle(&ctx),

        Commands::List {
            query,
            category,
            sort,
            width,
            format,
        } => {
            let mut filter = FilterState::new();
            filter.set_query(query);
            filter.set_category(CategoryFilter::from(category.as_str()));
            filter.set_sort(sort.into());

            handlers::list::handle(&ctx, &filter, width, format)
        }

        Commands::Categories { format } => handlers::categories::handle(&ctx, format),
    }
}
