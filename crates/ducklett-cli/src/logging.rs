use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter; wins over every other source
pub const LOG_ENV: &str = "DUCKLETT_LOG";

pub enum LogTarget<'a> {
    Stderr,
    /// Append to a file, keeping the alternate screen clean
    File(&'a Path),
}

/// Pick the filter: `DUCKLETT_LOG`, then `--log-level`, then the config value
pub fn filter(flag: Option<&str>, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }

    let directive = flag.unwrap_or(configured);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(filter: EnvFilter, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    // a subscriber may already be installed (tests); keep it
    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing subscriber already set");
    }
    Ok(())
}
