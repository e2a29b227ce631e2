use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, FRAMEWORK_DIR, is_config_file};

/// Outcome of a diagnostic pass, for callers that want more than the
/// printed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorOutcome {
    /// Configuration files found anywhere under the root.
    pub config_files_found: usize,
    /// Files currently staged in the destination directory.
    pub staged_files: usize,
    /// Staged files that failed the parse check.
    pub parse_failures: usize,
}

/// Operator-facing diagnostic pass over the working tree.
///
/// Prints the directory structure, every discovered configuration file, the
/// staged inventory, and a parse check of each staged file. Purely
/// observational: filesystem problems become printed lines, not errors; the
/// only errors surfaced are failures to write the output itself.
#[derive(Debug, Clone)]
pub struct DiagnosticsPass {
    root: PathBuf,
    destination: String,
}

impl DiagnosticsPass {
    pub fn new(root: PathBuf) -> Self {
        Self { root, destination: FRAMEWORK_DIR.to_string() }
    }

    pub fn with_destination<S: Into<String>>(mut self, destination: S) -> Self {
        self.destination = destination.into();
        self
    }

    /// Run the pass, writing the report to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<DoctorOutcome, AppError> {
        writeln!(out, "==== DIAGNOSTICS ====")?;
        writeln!(out, "Working directory: {}", self.root.display())?;

        writeln!(out)?;
        writeln!(out, "Directory structure:")?;
        self.print_tree(&self.root, out)?;

        writeln!(out)?;
        writeln!(out, "Configuration files:")?;
        let mut found = Vec::new();
        self.collect_config_files(&self.root, &mut found);
        for path in &found {
            writeln!(out, "  {}", self.display_relative(path))?;
        }
        writeln!(out, "Total configuration files found: {}", found.len())?;

        writeln!(out)?;
        let destination = self.root.join(&self.destination);
        writeln!(out, "Contents of {}/:", self.destination)?;
        let staged = self.list_staged(&destination, out)?;

        writeln!(out)?;
        writeln!(out, "Parse check:")?;
        let parse_failures = self.parse_check(&destination, &staged, out)?;

        writeln!(out)?;
        writeln!(out, "==== DIAGNOSTICS COMPLETE ====")?;

        Ok(DoctorOutcome {
            config_files_found: found.len(),
            staged_files: staged.len(),
            parse_failures,
        })
    }

    fn print_tree(&self, dir: &Path, out: &mut dyn Write) -> Result<(), AppError> {
        writeln!(out, "Directory: {}", self.display_relative(dir))?;

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                writeln!(out, "  (unreadable: {})", err)?;
                return Ok(());
            }
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            match entry.file_type() {
                Ok(t) if t.is_dir() => dirs.push((name, entry.path())),
                Ok(t) if t.is_file() => files.push(name),
                _ => {}
            }
        }
        dirs.sort();
        files.sort();

        for (name, _) in &dirs {
            writeln!(out, "  - {}/", name)?;
        }
        for name in &files {
            if is_config_file(name) {
                writeln!(out, "  - {} [config]", name)?;
            } else {
                writeln!(out, "  - {}", name)?;
            }
        }

        for (_, path) in dirs {
            self.print_tree(&path, out)?;
        }
        Ok(())
    }

    fn collect_config_files(&self, dir: &Path, found: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else { return };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            match entry.file_type() {
                Ok(t) if t.is_dir() => self.collect_config_files(&entry.path(), found),
                Ok(t) if t.is_file() && is_config_file(&name) => found.push(entry.path()),
                _ => {}
            }
        }
    }

    fn list_staged(
        &self,
        destination: &Path,
        out: &mut dyn Write,
    ) -> Result<Vec<String>, AppError> {
        let mut staged = Vec::new();
        match fs::read_dir(destination) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    staged.push(entry.file_name().to_string_lossy().to_string());
                }
                staged.sort();
                for name in &staged {
                    writeln!(out, "  - {}", name)?;
                }
                if staged.is_empty() {
                    writeln!(out, "  (empty)")?;
                }
            }
            Err(err) => {
                writeln!(out, "  (unreadable: {})", err)?;
            }
        }
        Ok(staged)
    }

    fn parse_check(
        &self,
        destination: &Path,
        staged: &[String],
        out: &mut dyn Write,
    ) -> Result<usize, AppError> {
        let mut failures = 0;
        for name in staged {
            if !is_config_file(name) {
                continue;
            }
            let path = destination.join(name);
            let parsed = fs::read_to_string(&path)
                .map_err(|err| err.to_string())
                .and_then(|content| {
                    serde_json::from_str::<serde_json::Value>(&content)
                        .map_err(|err| err.to_string())
                });
            match parsed {
                Ok(value) => {
                    writeln!(out, "  {}: ok ({} bytes serialized)", name, value.to_string().len())?;
                }
                Err(err) => {
                    failures += 1;
                    writeln!(out, "  {}: FAILED ({})", name, err)?;
                }
            }
        }
        Ok(failures)
    }

    fn display_relative(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => format!("./{}", rel.display()),
            Err(_) => path.display().to_string(),
        }
    }
}
