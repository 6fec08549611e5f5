//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing config files and product collections
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use catalog_types::Product;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::write_products_file;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use catalog_testing::TestWorld;
/// use catalog_testing::fixtures::mock_products;
///
/// let world = TestWorld::new().with_products(&mock_products());
///
/// let result = world.run(&["list", "--category", "electronics"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    products_file: Option<PathBuf>,
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
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            products_file: None,
        }
    }

    /// Serve `products` from a JSON file via `--products-file`.
    pub fn with_products(mut self, products: &[Product]) -> Self {
        let path = write_products_file(self.temp_dir.path(), "products.json", products)
            .expect("Failed to write products file");
        self.products_file = Some(path);
        self
    }

    /// Write raw TOML to the config file.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        if let Some(products_file) = &self.products_file {
            cmd.arg("--products-file").arg(products_file);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Execute the `catalog` binary with the given arguments.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("catalog")
            .map_err(|e| anyhow::anyhow!("Failed to find catalog binary: {}", e))?;

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

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
