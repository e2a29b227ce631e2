use serde::Serialize;

/// Which branch of the staging routine ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StagingBranch {
    /// The preferred source directory existed and was used directly.
    Preferred,
    /// The preferred directory was absent; the directory tree was scanned.
    FallbackScan,
}

/// Outcome of considering one candidate directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// Configuration files were copied out of this candidate.
    Staged { files: Vec<String> },
    /// The candidate contained no matching configuration files.
    NoConfigFiles,
    /// The candidate could not be read or copied from. Best-effort: the
    /// failure is recorded and the scan moves on. Files copied before the
    /// failure stay in the destination and are listed in `staged`.
    CopyFailed { staged: Vec<String>, error: String },
    /// The candidate was the destination itself and was skipped to avoid
    /// self-copy.
    SkippedDestination,
}

/// One `(candidate, outcome)` attempt from a staging run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateAttempt {
    /// Candidate directory path, relative to the staging root.
    pub candidate: String,
    pub outcome: CandidateOutcome,
}

/// Explicit record of a staging run.
///
/// The staging routine never aborts on a per-candidate failure; instead every
/// attempt lands here so the operator (and tests) can see exactly which
/// directories were tried and what each yielded.
#[derive(Debug, Clone, Serialize)]
pub struct StagingReport {
    pub branch: StagingBranch,
    /// Attempts in visit order. Enumeration order is not specified; on a
    /// filename collision the later attempt's copy wins.
    pub attempts: Vec<CandidateAttempt>,
    /// Sorted contents of the destination directory after the run.
    pub destination_inventory: Vec<String>,
}

impl StagingReport {
    /// Total number of files copied across all attempts, including files a
    /// candidate managed to stage before a later copy failed.
    pub fn staged_file_count(&self) -> usize {
        self.attempts
            .iter()
            .filter_map(|attempt| match &attempt.outcome {
                CandidateOutcome::Staged { files } => Some(files.len()),
                CandidateOutcome::CopyFailed { staged, .. } => Some(staged.len()),
                _ => None,
            })
            .sum()
    }

    /// Candidates that actually contributed files, in visit order.
    pub fn contributing_candidates(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter(|attempt| match &attempt.outcome {
                CandidateOutcome::Staged { .. } => true,
                CandidateOutcome::CopyFailed { staged, .. } => !staged.is_empty(),
                _ => false,
            })
            .map(|attempt| attempt.candidate.as_str())
            .collect()
    }
}
