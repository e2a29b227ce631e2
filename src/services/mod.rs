mod diagnostics;
mod exec_launcher;
mod staging_filesystem;

pub use diagnostics::{DiagnosticsPass, DoctorOutcome};
pub use exec_launcher::ExecServerLauncher;
pub use staging_filesystem::FilesystemStager;
