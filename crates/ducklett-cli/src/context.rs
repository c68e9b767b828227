use anyhow::Result;
use ducklett_core::path;
use ducklett_runtime::{Config, Workspace};
use std::path::{Path, PathBuf};

/// What every command needs: the resolved data directory
pub struct ExecutionContext {
    data_dir: PathBuf,
}

impl ExecutionContext {
    pub fn new(data_dir: Option<&str>) -> Result<Self> {
        let data_dir = path::resolve_workspace_path(data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Config as written on disk, without creating the workspace
    pub fn config(&self) -> Result<Config> {
        Ok(Config::load_from(&path::config_path(&self.data_dir))?)
    }

    pub fn log_path(&self) -> PathBuf {
        path::log_path(&self.data_dir)
    }

    pub fn open_workspace(&self) -> Result<Workspace> {
        Ok(Workspace::open(self.data_dir.clone())?)
    }
}
