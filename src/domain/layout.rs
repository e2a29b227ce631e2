//! Fixed filesystem layout and server defaults.

/// Destination directory for staged framework configuration files.
pub const FRAMEWORK_DIR: &str = "framework";

/// Sibling directory reserved for static assets. Created empty.
pub const STATIC_DIR: &str = "static";

/// Preferred source directory checked before the fallback scan.
pub const PREFERRED_SOURCE_DIR: &str = "NEW-SYSTEM";

/// Extension matched when staging configuration files.
pub const CONFIG_EXTENSION: &str = "json";

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Default bind address for the launched server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the launched server.
pub const DEFAULT_PORT: u16 = 7860;

/// Server program invoked by the entrypoint.
pub const SERVER_PROGRAM: &str = "uvicorn";

/// Conventional application target served by the entrypoint.
pub const SERVER_APP_TARGET: &str = "app:app";

/// Returns true when `name` matches the configuration file pattern.
/// Case-sensitive: only a lowercase `.json` extension counts.
pub fn is_config_file(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext == CONFIG_EXTENSION)
}
