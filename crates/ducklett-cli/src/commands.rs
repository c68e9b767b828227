use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.data_dir.as_deref())?;
    let config = ctx.config()?;
    let filter = logging::filter(cli.log_level.map(|level| level.as_str()), &config.log_level);

    let command = cli.command.unwrap_or(Commands::Run);

    // the alternate screen owns stdout, so the page logs to the workspace
    let log_path = ctx.log_path();
    let target = if matches!(command, Commands::Run) {
        ducklett_core::path::ensure_workspace(ctx.data_dir())?;
        LogTarget::File(&log_path)
    } else {
        LogTarget::Stderr
    };
    logging::init(filter, target)?;

    match command {
        Commands::Run => handlers::run::handle(&ctx),
        Commands::Status { format } => handlers::status::handle(&ctx, format),
        Commands::Book { date, time } => handlers::book::handle(&ctx, &date, &time),
        Commands::Reset => handlers::reset::handle(&ctx),
        Commands::Theme { choice } => handlers::theme::handle(&ctx, choice),
    }
}
