//! Common test utilities for CLI integration tests.
//!
//! Every test runs the real binary against its own temporary data
//! directory with the `INNKEEP_*` environment cleared.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const INHERITED_VARS: &[&str] = &[
    "INNKEEP_DATA_DIR",
    "INNKEEP_BUSY_TIMEOUT",
    "INNKEEP_LOG_MODE",
    "INNKEEP_MAXIMUM_LOCK_WAIT_SECONDS",
    "INNKEEP_DISABLE_AUTOINIT",
    "INNKEEP_OUTPUT_FORMAT",
    "INNKEEP_CASCADE_DELETE",
    "INNKEEP_CANCELLED_RESERVATIONS_BLOCK",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the innkeep data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the binary creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("innkeep-data");
        Self { temp_dir, data_dir }
    }

    /// A command with no flags and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("innkeep").expect("Failed to find innkeep binary");
        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the database file.
    pub fn database(&self) -> PathBuf {
        self.data_dir.join("innkeep.db")
    }

    /// Write `<data_dir>/config.yaml`.
    pub fn write_config(&self, yaml: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Add a property at `Rua das Flores, <number>` and return its id.
    pub fn add_property(&self, number: &str, capacity: u32, price: &str) -> i64 {
        let output = self
            .command()
            .args([
                "property",
                "add",
                "--title",
                &format!("Casa {number}"),
                "--street",
                "Rua das Flores",
                "--number",
                number,
                "--neighborhood",
                "Centro",
                "--city",
                "Curitiba",
                "--state",
                "PR",
                "--rooms",
                "2",
                "--capacity",
                &capacity.to_string(),
                "--price",
                price,
            ])
            .output()
            .expect("Failed to run property add");
        assert!(
            output.status.success(),
            "property add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&output.stdout)
    }

    /// Book a stay and return the reservation id.
    pub fn book(&self, property: i64, start: &str, end: &str, guests: u32) -> i64 {
        let output = self
            .command()
            .args(book_args(property, start, end, guests))
            .args(["--format", "json"])
            .output()
            .expect("Failed to run reservation book");
        assert!(
            output.status.success(),
            "reservation book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("book output is JSON");
        value["reservation"]["id"].as_i64().expect("reservation id")
    }
}

/// Arguments for `reservation book` by a fixed client.
pub fn book_args(property: i64, start: &str, end: &str, guests: u32) -> Vec<String> {
    [
        "reservation",
        "book",
        "--property",
        &property.to_string(),
        "--name",
        "Ana Souza",
        "--email",
        "ana@example.com",
        "--start",
        start,
        "--end",
        end,
        "--guests",
        &guests.to_string(),
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// Parse an id printed alone on stdout.
pub fn parse_id(stdout: &[u8]) -> i64 {
    String::from_utf8_lossy(stdout)
        .trim()
        .parse()
        .expect("stdout should be an id")
}
