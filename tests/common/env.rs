//! Test environment for isolated web-icons runs.
//!
//! Provides `TestEnv` - a temp project root the binary runs in, with
//! helpers to place the source icon and inspect the generated assets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{png_bytes, SOURCE_ICON};

/// Result of running the web-icons binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory the binary runs in.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project without a source icon
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_web-icons")),
        }
    }

    /// Project with a `width`x`height` source icon in place
    pub fn with_source(width: u32, height: u32) -> Self {
        let env = Self::new();
        env.write_project_file(SOURCE_ICON, &png_bytes(width, height));
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run web-icons from the project root with plain ASCII output
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .output()
            .expect("Failed to execute web-icons");

        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &[u8]) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> Vec<u8> {
        let full_path = self.project_path(relative_path);
        std::fs::read(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Contents of every file directly inside `relative_dir`, keyed by name
    pub fn snapshot_dir(&self, relative_dir: &str) -> BTreeMap<String, Vec<u8>> {
        snapshot(&self.project_path(relative_dir))
    }
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            let name = entry.file_name().to_string_lossy().to_string();
            files.insert(name, std::fs::read(&path).expect("Failed to read file"));
        }
    }
    files
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
