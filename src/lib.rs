//! stagehand: container pre-flight CLI that stages JSON framework
//! configuration into `framework/` and hands the process to the application
//! server.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::io::Write;

use app::commands::{doctor, serve, stage};
use services::{DiagnosticsPass, ExecServerLauncher, FilesystemStager};

pub use app::commands::stage::ReportFormat;
pub use domain::{
    API_KEY_VAR, AppError, CandidateAttempt, CandidateOutcome, DEFAULT_HOST, DEFAULT_PORT,
    EntrypointConfig, ServerCommand, StagingBranch, StagingReport,
};
pub use services::DoctorOutcome;

/// Stage configuration files into the destination directory.
///
/// Best-effort: per-candidate failures end up in the returned report, and
/// the only fatal condition is an uncreatable destination directory.
pub fn stage(
    dest: Option<&str>,
    source: Option<&str>,
    format: ReportFormat,
) -> Result<StagingReport, AppError> {
    let mut stager = FilesystemStager::current()?;
    if let Some(dest) = dest {
        stager = stager.with_destination(dest);
    }
    if let Some(source) = source {
        stager = stager.with_preferred_source(source);
    }

    let mut out = std::io::stdout().lock();
    let report = stage::execute(&stager, format, &mut out)?;
    out.flush()?;
    Ok(report)
}

/// Print the diagnostic pass over the current directory tree.
pub fn doctor(dest: Option<&str>) -> Result<DoctorOutcome, AppError> {
    let cwd = std::env::current_dir()?;
    let mut pass = DiagnosticsPass::new(cwd);
    if let Some(dest) = dest {
        pass = pass.with_destination(dest);
    }

    let mut out = std::io::stdout().lock();
    let outcome = doctor::execute(&pass, &mut out)?;
    out.flush()?;
    Ok(outcome)
}

/// Run the container entrypoint: pre-flight, credential check, then
/// exec-transfer to the server. Only returns on failure.
///
/// The credential is read from the environment here, at the boundary, and
/// injected into the routine as configuration.
pub fn serve(
    host: Option<&str>,
    port: Option<u16>,
    server_program: Option<&str>,
    skip_preflight: bool,
) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let stager = FilesystemStager::new(cwd.clone());
    let diagnostics = DiagnosticsPass::new(cwd);

    let mut config = EntrypointConfig::default()
        .with_api_key(std::env::var(API_KEY_VAR).ok());
    if let Some(host) = host {
        config.host = host.to_string();
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(program) = server_program {
        config.server_program = program.to_string();
    }
    config.skip_preflight = skip_preflight;

    let mut out = std::io::stdout().lock();
    serve::execute(&config, &stager, &diagnostics, &ExecServerLauncher::new(), &mut out)
}
