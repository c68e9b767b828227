use std::path::{Path, PathBuf};
use std::time::Instant;

use ducklett_core::path;
use ducklett_engine::{Chime, DisplayLocale, Renderer, Silent, TerminalBell};
use ducklett_store::{AppointmentStore, FileStore};
use tracing::debug;

use crate::config::Config;
use crate::controller::{Controller, Settings};
use crate::Result;

/// An opened data directory: its config plus the storage file
pub struct Workspace {
    root: PathBuf,
    config: Config,
    store: AppointmentStore<FileStore>,
}

impl Workspace {
    /// Open the workspace at `root`, creating the directory if needed
    pub fn open(root: PathBuf) -> Result<Self> {
        path::ensure_workspace(&root)?;

        let config = Config::load_from(&path::config_path(&root))?;
        let store = AppointmentStore::new(FileStore::open(path::storage_path(&root))?);
        debug!(root = %root.display(), locale = %config.locale, "opened workspace");

        Ok(Self {
            root,
            config,
            store,
        })
    }

    /// Resolve the data directory (see [`path::resolve_workspace_path`]) and open it
    pub fn resolve(explicit_path: Option<&str>) -> Result<Self> {
        let root = path::resolve_workspace_path(explicit_path)?;
        Self::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&mut self) -> &mut AppointmentStore<FileStore> {
        &mut self.store
    }

    pub fn locale(&self) -> DisplayLocale {
        DisplayLocale::resolve(&self.config.locale)
    }

    pub fn renderer(&self) -> Renderer {
        let chime: Box<dyn Chime> = if self.config.sound {
            Box::new(TerminalBell)
        } else {
            Box::new(Silent)
        };
        Renderer::new(self.locale(), chime)
    }

    pub fn into_controller(self, now: Instant) -> Controller<FileStore> {
        let renderer = self.renderer();
        let settings = Settings::from(&self.config);
        Controller::restore(self.store, renderer, settings, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Mode;
    use chrono::{FixedOffset, TimeZone};
    use ducklett_types::Appointment;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory_with_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("data");

        let workspace = Workspace::open(root.clone())?;
        assert!(root.is_dir());
        assert_eq!(workspace.config(), &Config::default());
        assert_eq!(workspace.locale().name(), "es_ES");
        Ok(())
    }

    #[test]
    fn test_reads_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "locale = \"en_US\"\ndecline_timeout_ms = 200\n",
        )?;

        let workspace = Workspace::open(temp_dir.path().to_path_buf())?;
        assert_eq!(workspace.locale().name(), "en_US");
        assert_eq!(
            Settings::from(workspace.config()).decline_timeout,
            std::time::Duration::from_millis(200)
        );
        Ok(())
    }

    #[test]
    fn test_controller_sees_saved_appointment() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let offset = FixedOffset::east_opt(0).unwrap();
        let appointment = Appointment::new(offset.with_ymd_and_hms(2030, 5, 20, 8, 15, 0).unwrap());

        {
            let mut workspace = Workspace::open(temp_dir.path().to_path_buf())?;
            workspace.store().save(&appointment)?;
        }

        let workspace = Workspace::open(temp_dir.path().to_path_buf())?;
        let controller = workspace.into_controller(Instant::now());
        assert_eq!(controller.mode(), Mode::Confirmed);
        assert_eq!(controller.appointment(), Some(&appointment));
        Ok(())
    }
}
