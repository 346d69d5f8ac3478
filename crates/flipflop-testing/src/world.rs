//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Seeding the group positioner settings file
//! - Executing CLI commands against that directory

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use flipflop_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["render", "%yyyy%"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    pass_data_dir: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".flipflop");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            pass_data_dir: true,
        }
    }

    /// Get the data directory path (.flipflop). It is created lazily by the CLI.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the group positioner settings file.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(flipflop_nodes::CONFIG_FILE_NAME)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Run without `--data-dir`, leaving resolution to the environment.
    pub fn without_data_dir_flag(mut self) -> Self {
        self.pass_data_dir = false;
        self
    }

    /// Write the settings file verbatim.
    pub fn write_raw_config(&self, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }

    /// Read the settings file as JSON.
    pub fn read_config(&self) -> Result<serde_json::Value> {
        let content = std::fs::read_to_string(self.config_path())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        if self.pass_data_dir {
            cmd.arg("--data-dir").arg(self.data_dir());
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove(flipflop_nodes::DATA_DIR_ENV);

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built (cargo test does this for the CLI package's own tests).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("flipflop")
            .map_err(|e| anyhow::anyhow!("Failed to find flipflop binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
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
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stdout with the trailing newline removed.
    pub fn line(&self) -> &str {
        self.stdout.trim_end_matches('\n')
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
