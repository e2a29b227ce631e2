use std::process::Command;

use crate::domain::{AppError, ServerCommand};
use crate::ports::ServerLauncher;

/// Production launcher: hands the process over to the server command.
///
/// On Unix this is a true `exec(2)` replacement, so `launch` only returns on
/// failure. Elsewhere the server is spawned and waited on, and this process
/// exits with the child's status.
#[derive(Debug, Clone, Default)]
pub struct ExecServerLauncher;

impl ExecServerLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ServerLauncher for ExecServerLauncher {
    #[cfg(unix)]
    fn launch(&self, command: &ServerCommand) -> Result<(), AppError> {
        use std::os::unix::process::CommandExt;

        // exec only returns when the replacement failed.
        let err = Command::new(&command.program).args(&command.args).exec();
        Err(AppError::ServerLaunch { program: command.program.clone(), source: err })
    }

    #[cfg(not(unix))]
    fn launch(&self, command: &ServerCommand) -> Result<(), AppError> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|source| AppError::ServerLaunch {
                program: command.program.clone(),
                source,
            })?;
        std::process::exit(status.code().unwrap_or(1));
    }
}
