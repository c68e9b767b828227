use anyhow::Result;
use ducklett_types::ThemePreference;

use crate::args::ThemeChoice;
use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext, choice: Option<ThemeChoice>) -> Result<()> {
    let mut workspace = ctx.open_workspace()?;
    let current = workspace.store().load_theme()?.unwrap_or_default();

    let theme = match choice {
        None => current,
        Some(choice) => {
            let next = resolve(current, choice);
            workspace.store().save_theme(next)?;
            next
        }
    };

    println!("{}", theme);
    Ok(())
}

fn resolve(current: ThemePreference, choice: ThemeChoice) -> ThemePreference {
    match choice {
        ThemeChoice::Light => ThemePreference::Light,
        ThemeChoice::Dark => ThemePreference::Dark,
        ThemeChoice::Toggle => current.toggled(),
    }
}
