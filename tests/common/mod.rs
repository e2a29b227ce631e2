//! Shared testing utilities for stagehand CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;

/// Testing harness providing an isolated working directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `stagehand` binary within
    /// the working directory, with the credential variable cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stagehand").expect("Failed to locate stagehand binary");
        cmd.current_dir(&self.work_dir).env_remove("ANTHROPIC_API_KEY");
        cmd
    }

    /// Write a file (creating parents) relative to the working directory.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.work_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent directory");
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Read a file relative to the working directory.
    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel)).expect("Failed to read test file")
    }

    /// Path to the staging destination.
    pub fn framework_path(&self) -> PathBuf {
        self.work_dir.join("framework")
    }

    /// Sorted file names currently in the staging destination.
    pub fn framework_inventory(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.framework_path())
            .expect("framework/ missing")
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Write an executable shell script relative to the working directory
    /// and return its absolute path.
    #[cfg(unix)]
    pub fn write_script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.work_dir.join(rel);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
        path
    }
}
