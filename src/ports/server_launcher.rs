use crate::domain::{AppError, ServerCommand};

/// Port for handing the process over to the application server.
///
/// The production implementation replaces the current process and therefore
/// only ever returns on failure. Test doubles return `Ok(())` to mark the
/// point where control would have been transferred.
pub trait ServerLauncher {
    /// Transfer control to `command`. Returning `Ok(())` means the transfer
    /// happened (or was simulated); returning an error means the server was
    /// never started and the entrypoint still owns the process.
    fn launch(&self, command: &ServerCommand) -> Result<(), AppError>;
}
