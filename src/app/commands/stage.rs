use std::io::Write;

use crate::domain::{AppError, CandidateOutcome, StagingBranch, StagingReport};
use crate::services::FilesystemStager;

/// Output format for the staging report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Execute the stage command.
pub fn execute(
    stager: &FilesystemStager,
    format: ReportFormat,
    out: &mut dyn Write,
) -> Result<StagingReport, AppError> {
    let report = stager.stage()?;
    match format {
        ReportFormat::Text => render_text(&report, out)?,
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|err| AppError::configuration(err.to_string()))?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(report)
}

fn render_text(report: &StagingReport, out: &mut dyn Write) -> Result<(), AppError> {
    match report.branch {
        StagingBranch::Preferred => {
            writeln!(out, "Staging from preferred source directory")?;
        }
        StagingBranch::FallbackScan => {
            writeln!(out, "Preferred source directory absent; scanning directory tree")?;
        }
    }

    for attempt in &report.attempts {
        match &attempt.outcome {
            CandidateOutcome::Staged { files } => {
                writeln!(out, "  {}: staged {}", attempt.candidate, files.join(", "))?;
            }
            CandidateOutcome::NoConfigFiles => {
                writeln!(out, "  {}: no configuration files", attempt.candidate)?;
            }
            CandidateOutcome::CopyFailed { staged, error } => {
                if staged.is_empty() {
                    writeln!(out, "  {}: copy failed ({})", attempt.candidate, error)?;
                } else {
                    writeln!(
                        out,
                        "  {}: staged {} then copy failed ({})",
                        attempt.candidate,
                        staged.join(", "),
                        error
                    )?;
                }
            }
            CandidateOutcome::SkippedDestination => {
                writeln!(out, "  {}: skipped (destination)", attempt.candidate)?;
            }
        }
    }

    writeln!(
        out,
        "Staged {} file(s); destination now contains {} file(s):",
        report.staged_file_count(),
        report.destination_inventory.len()
    )?;
    for name in &report.destination_inventory {
        writeln!(out, "  - {}", name)?;
    }
    Ok(())
}
