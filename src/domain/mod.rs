pub mod entrypoint;
pub mod error;
pub mod layout;
pub mod report;

pub use entrypoint::{EntrypointConfig, ServerCommand};
pub use error::AppError;
pub use layout::{
    API_KEY_VAR, CONFIG_EXTENSION, DEFAULT_HOST, DEFAULT_PORT, FRAMEWORK_DIR,
    PREFERRED_SOURCE_DIR, STATIC_DIR, is_config_file,
};
pub use report::{CandidateAttempt, CandidateOutcome, StagingBranch, StagingReport};
