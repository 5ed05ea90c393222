//! Exit status codes for the demo binary
//!
//! argrt follows standard Unix exit code conventions:
//! - 0: Success, including an early exit after printing usage
//! - 1: Any argument or configuration error

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution or usage printed on request
    Success = 0,
    /// Unknown argument, missing or malformed value, bad config
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Raw process exit code
    pub fn code(self) -> i32 {
        self as i32
    }
}
