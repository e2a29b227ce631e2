use std::io::Write;

use crate::domain::AppError;
use crate::services::{DiagnosticsPass, DoctorOutcome};

/// Execute the doctor command. Purely observational; never fails on
/// filesystem state, only on output errors.
pub fn execute(pass: &DiagnosticsPass, out: &mut dyn Write) -> Result<DoctorOutcome, AppError> {
    pass.run(out)
}
