use std::io;
use std::time::Instant;

use anyhow::{Result, bail};
use ducklett_core::SystemClock;
use is_terminal::IsTerminal;
use tracing::info;

use crate::context::ExecutionContext;
use crate::tui::{self, App};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("ducklett needs an interactive terminal; try `ducklett status`");
    }

    let workspace = ctx.open_workspace()?;
    info!(root = %workspace.root().display(), "starting interactive page");

    let controller = workspace.into_controller(Instant::now());
    let app = App::new(controller, Box::new(SystemClock));
    tui::run(app)?;

    info!("page closed");
    Ok(())
}
