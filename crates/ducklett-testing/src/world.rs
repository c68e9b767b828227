//! TestWorld pattern for integration tests.
//!
//! Every world owns a temp directory used as the ducklett data directory, so
//! tests never touch the real `~/.ducklett` and never see each other's state.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use ducklett_types::APPOINTMENT_KEY;

/// Isolated ducklett environment.
///
/// # Example
/// ```no_run
/// use ducklett_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["book", "2030-10-18", "14:30"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".ducklett");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// The ducklett data directory. Not created until a command needs it.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a CLI command at this world.
    ///
    /// Logging is silenced unless the test sets `DUCKLETT_LOG` itself, and an
    /// inherited `DUCKLETT_PATH` is dropped so it cannot leak in.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("DUCKLETT_PATH");
        cmd.env("DUCKLETT_LOG", "off");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the ducklett binary with `args` in this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("ducklett")
            .map_err(|e| anyhow::anyhow!("Failed to find ducklett binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Write raw storage content, as if left behind by an earlier session.
    pub fn seed_storage(&self, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.storage_path(), content)?;
        Ok(())
    }

    /// Store a single appointment entry whose value is `raw_record`.
    pub fn seed_appointment(&self, raw_record: &str) -> Result<()> {
        let mut storage = serde_json::Map::new();
        storage.insert(
            APPOINTMENT_KEY.to_string(),
            serde_json::Value::String(raw_record.to_string()),
        );
        self.seed_storage(&serde_json::to_string_pretty(&storage)?)
    }

    /// The storage file as JSON; an empty object when it does not exist.
    pub fn read_storage(&self) -> Result<serde_json::Value> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(serde_json::json!({}));
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("storage at {} is not JSON", path.display()))
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, `None` when killed by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
