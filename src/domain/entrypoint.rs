use crate::domain::layout::{DEFAULT_HOST, DEFAULT_PORT, SERVER_APP_TARGET, SERVER_PROGRAM};

/// Entrypoint configuration, assembled once at the CLI boundary.
///
/// The serve routine never reads the process environment itself; the
/// credential is captured here so tests can inject any state they need.
#[derive(Debug, Clone)]
pub struct EntrypointConfig {
    /// API credential, if present and non-empty in the environment.
    pub api_key: Option<String>,
    /// Bind address for the server.
    pub host: String,
    /// Port for the server.
    pub port: u16,
    /// Server program handed the process. Overridable for images that ship
    /// a wrapper script instead of uvicorn itself.
    pub server_program: String,
    /// Skip the pre-flight staging and diagnostic pass.
    pub skip_preflight: bool,
}

impl EntrypointConfig {
    /// Capture a credential value as read from the environment. Empty values
    /// count as absent.
    pub fn with_api_key(mut self, value: Option<String>) -> Self {
        self.api_key = value.filter(|v| !v.trim().is_empty());
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// The command the entrypoint hands control to.
    pub fn server_command(&self) -> ServerCommand {
        ServerCommand {
            program: self.server_program.clone(),
            args: vec![
                SERVER_APP_TARGET.to_string(),
                "--host".to_string(),
                self.host.clone(),
                "--port".to_string(),
                self.port.to_string(),
            ],
        }
    }
}

impl Default for EntrypointConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            server_program: SERVER_PROGRAM.to_string(),
            skip_preflight: false,
        }
    }
}

/// A fully-resolved server invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ServerCommand {
    /// Rendered form for diagnostics.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}
