use anyhow::Result;
use chrono::Local;
use ducklett_engine::format;
use ducklett_types::Appointment;
use tracing::info;

use crate::context::ExecutionContext;

/// Same validation as the form: anything but a future instant is refused
pub fn handle(ctx: &ExecutionContext, date: &str, time: &str) -> Result<()> {
    let instant = match ducklett_core::validate(date, time, &Local::now()) {
        Ok(instant) => instant,
        Err(err) => return Err(anyhow::Error::new(err).context(err.user_message())),
    };

    let mut workspace = ctx.open_workspace()?;
    let appointment = Appointment::from_zoned(&instant);
    workspace.store().save(&appointment)?;
    info!(iso = %appointment.instant(), "appointment booked");

    let formatted = format(&appointment.instant(), &workspace.locale());
    println!("{}", formatted.confirmation_text());
    Ok(())
}
