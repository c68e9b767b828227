use anyhow::Result;
use ducklett_types::copy;

use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let mut workspace = ctx.open_workspace()?;

    if workspace.store().load()?.is_none() {
        println!("{}", copy::NO_APPOINTMENT);
        return Ok(());
    }

    workspace.store().clear()?;
    println!("{}", copy::APPOINTMENT_CLEARED);
    Ok(())
}
