use std::io::Write;

use crate::domain::{API_KEY_VAR, AppError, EntrypointConfig};
use crate::ports::ServerLauncher;
use crate::services::{DiagnosticsPass, FilesystemStager};

/// Execute the entrypoint sequence: pre-flight, credential check, then
/// transfer control to the server.
///
/// Pre-flight failure is the single fatal condition; the launcher is never
/// invoked after one. A missing credential only produces a warning.
pub fn execute<L: ServerLauncher>(
    config: &EntrypointConfig,
    stager: &FilesystemStager,
    diagnostics: &DiagnosticsPass,
    launcher: &L,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    if !config.skip_preflight {
        preflight(stager, diagnostics, out)
            .map_err(|err| AppError::PreflightFailed(err.to_string()))?;
    }

    if !config.has_credential() {
        writeln!(
            out,
            "Warning: {} is not set; API-dependent features will be unavailable",
            API_KEY_VAR
        )?;
    }

    let command = config.server_command();
    writeln!(out, "Starting server: {}", command.display())?;
    out.flush()?;
    launcher.launch(&command)
}

fn preflight(
    stager: &FilesystemStager,
    diagnostics: &DiagnosticsPass,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let report = stager.stage()?;
    writeln!(
        out,
        "Pre-flight: staged {} configuration file(s)",
        report.staged_file_count()
    )?;
    diagnostics.run(out)?;
    Ok(())
}
