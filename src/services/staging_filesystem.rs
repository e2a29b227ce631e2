use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, CandidateAttempt, CandidateOutcome, FRAMEWORK_DIR, PREFERRED_SOURCE_DIR,
    STATIC_DIR, StagingBranch, StagingReport, is_config_file,
};

/// Filesystem implementation of the config staging routine.
///
/// Rooted at a working directory; every path in the resulting report is
/// relative to that root.
#[derive(Debug, Clone)]
pub struct FilesystemStager {
    root: PathBuf,
    destination: String,
    preferred_source: String,
}

impl FilesystemStager {
    /// Create a stager rooted at the given directory with the standard
    /// layout (`framework/` destination, `NEW-SYSTEM` preferred source).
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            destination: FRAMEWORK_DIR.to_string(),
            preferred_source: PREFERRED_SOURCE_DIR.to_string(),
        }
    }

    /// Create a stager for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Override the destination directory name.
    pub fn with_destination<S: Into<String>>(mut self, destination: S) -> Self {
        self.destination = destination.into();
        self
    }

    /// Override the preferred source directory name.
    pub fn with_preferred_source<S: Into<String>>(mut self, source: S) -> Self {
        self.preferred_source = source.into();
        self
    }

    pub fn destination_path(&self) -> PathBuf {
        self.root.join(&self.destination)
    }

    fn preferred_path(&self) -> PathBuf {
        self.root.join(&self.preferred_source)
    }

    /// Run the staging routine.
    ///
    /// Best-effort throughout: per-candidate failures are recorded in the
    /// report and never abort the run. The only error surfaced is failure to
    /// create the destination directory itself, which would break the
    /// destination-exists invariant.
    pub fn stage(&self) -> Result<StagingReport, AppError> {
        let destination = self.destination_path();
        fs::create_dir_all(&destination).map_err(|source| AppError::DestinationUnavailable {
            path: self.destination.clone(),
            source,
        })?;
        // The asset directory is reserved and empty; nothing depends on it,
        // so a creation failure is not worth aborting over.
        let _ = fs::create_dir_all(self.root.join(STATIC_DIR));

        let mut attempts = Vec::new();
        let branch = if self.preferred_path().is_dir() {
            let outcome = self.copy_candidate(&self.preferred_path(), &destination);
            attempts.push(CandidateAttempt {
                candidate: self.preferred_source.clone(),
                outcome,
            });
            StagingBranch::Preferred
        } else {
            self.scan_tree(&self.root, &destination, &mut attempts);
            StagingBranch::FallbackScan
        };

        Ok(StagingReport {
            branch,
            attempts,
            destination_inventory: self.destination_inventory(&destination),
        })
    }

    /// Sorted file names currently present in the destination directory.
    pub fn destination_inventory(&self, destination: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = fs::read_dir(destination) {
            for entry in entries.flatten() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        names
    }

    /// Depth-first walk of every directory reachable from `dir`, recording a
    /// `(candidate, outcome)` attempt for each. The destination directory is
    /// excluded to avoid self-copy. Visit order follows `read_dir` and is
    /// deliberately unspecified; later candidates overwrite earlier copies
    /// on filename collision.
    fn scan_tree(&self, dir: &Path, destination: &Path, attempts: &mut Vec<CandidateAttempt>) {
        let candidate = self.relative_name(dir);

        if dir == destination {
            attempts.push(CandidateAttempt {
                candidate,
                outcome: CandidateOutcome::SkippedDestination,
            });
            return;
        }

        attempts.push(CandidateAttempt {
            candidate,
            outcome: self.copy_candidate(dir, destination),
        });

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            // Unreadable directories were already recorded as CopyFailed.
            Err(_) => return,
        };
        for entry in entries.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                self.scan_tree(&entry.path(), destination, attempts);
            }
        }
    }

    /// Copy every configuration file directly beneath `dir` (non-recursive)
    /// into the destination, preserving names and overwriting.
    fn copy_candidate(&self, dir: &Path, destination: &Path) -> CandidateOutcome {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                return CandidateOutcome::CopyFailed { staged: Vec::new(), error: err.to_string() };
            }
        };

        let mut config_files: Vec<(String, PathBuf)> = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_file && is_config_file(&name) {
                config_files.push((name, entry.path()));
            }
        }
        config_files.sort();

        if config_files.is_empty() {
            return CandidateOutcome::NoConfigFiles;
        }

        let mut staged = Vec::new();
        for (name, path) in config_files {
            match fs::copy(&path, destination.join(&name)) {
                Ok(_) => staged.push(name),
                // Files already copied stay staged; the outcome keeps them
                // alongside the failure.
                Err(err) => {
                    return CandidateOutcome::CopyFailed {
                        staged,
                        error: format!("{}: {}", name, err),
                    };
                }
            }
        }
        CandidateOutcome::Staged { files: staged }
    }

    fn relative_name(&self, dir: &Path) -> String {
        match dir.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => dir.to_string_lossy().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn preferred_directory_wins_and_fallback_never_runs() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "NEW-SYSTEM/a.json", "{\"a\":1}");
        write(tmp.path(), "NEW-SYSTEM/b.json", "{\"b\":2}");
        write(tmp.path(), "other/c.json", "{\"c\":3}");

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        assert_eq!(report.branch, StagingBranch::Preferred);
        assert_eq!(report.attempts.len(), 1);
        assert_eq!(report.destination_inventory, vec!["a.json", "b.json"]);
        assert_eq!(
            fs::read_to_string(tmp.path().join("framework/a.json")).unwrap(),
            "{\"a\":1}"
        );
    }

    #[test]
    fn fallback_scan_stages_from_any_directory() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "somewhere/nested/c.json", "{\"c\":3}");
        write(tmp.path(), "somewhere/readme.md", "not config");

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        assert_eq!(report.branch, StagingBranch::FallbackScan);
        assert_eq!(report.destination_inventory, vec!["c.json"]);
        assert_eq!(
            fs::read_to_string(tmp.path().join("framework/c.json")).unwrap(),
            "{\"c\":3}"
        );
        assert_eq!(report.contributing_candidates().len(), 1);
    }

    #[test]
    fn destination_is_never_a_source_candidate() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "framework/already.json", "{}");

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        let skipped: Vec<_> = report
            .attempts
            .iter()
            .filter(|a| a.outcome == CandidateOutcome::SkippedDestination)
            .collect();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].candidate, "framework");
        // Pre-existing files survive untouched.
        assert_eq!(report.destination_inventory, vec!["already.json"]);
    }

    #[test]
    fn collision_resolves_to_last_visited_candidate() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "one/d.json", "{\"from\":\"one\"}");
        write(tmp.path(), "two/d.json", "{\"from\":\"two\"}");

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        // Enumeration order is unspecified; assert last-write-wins against
        // the order the report itself recorded.
        let contributors = report.contributing_candidates();
        assert_eq!(contributors.len(), 2);
        let winner = contributors.last().unwrap().to_string();
        let staged = fs::read_to_string(tmp.path().join("framework/d.json")).unwrap();
        assert_eq!(staged, format!("{{\"from\":\"{}\"}}", winner));
    }

    #[test]
    fn destination_exists_even_when_nothing_staged() {
        let tmp = TempDir::new().unwrap();

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        assert!(tmp.path().join("framework").is_dir());
        assert!(tmp.path().join("static").is_dir());
        assert_eq!(report.staged_file_count(), 0);
        assert!(report.destination_inventory.is_empty());
    }

    #[test]
    fn partial_copy_failure_keeps_earlier_files_in_the_report() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "NEW-SYSTEM/a.json", "{\"a\": 1}");
        write(tmp.path(), "NEW-SYSTEM/b.json", "{\"b\": 2}");
        // A directory squatting on the target name makes b.json's copy fail
        // after a.json already landed.
        fs::create_dir_all(tmp.path().join("framework/b.json")).unwrap();

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        match &report.attempts[0].outcome {
            CandidateOutcome::CopyFailed { staged, error } => {
                assert_eq!(staged, &vec!["a.json".to_string()]);
                assert!(error.starts_with("b.json"));
            }
            other => panic!("expected CopyFailed, got {:?}", other),
        }
        assert_eq!(report.staged_file_count(), 1);
        assert_eq!(report.contributing_candidates(), vec!["NEW-SYSTEM"]);
        assert_eq!(
            fs::read_to_string(tmp.path().join("framework/a.json")).unwrap(),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn uppercase_extension_is_not_staged() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "NEW-SYSTEM/CONFIG.JSON", "{}");

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        assert_eq!(report.attempts[0].outcome, CandidateOutcome::NoConfigFiles);
        assert!(report.destination_inventory.is_empty());
    }

    #[test]
    fn preferred_match_is_non_recursive() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "NEW-SYSTEM/deep/hidden.json", "{}");

        let report = FilesystemStager::new(tmp.path().to_path_buf()).stage().unwrap();

        assert_eq!(report.branch, StagingBranch::Preferred);
        assert_eq!(
            report.attempts[0].outcome,
            CandidateOutcome::NoConfigFiles
        );
        assert!(report.destination_inventory.is_empty());
    }
}
