// Consistent exit codes for the taskdesk CLI.
//
//   0  = success
//   1  = general error
//   2  = usage/argument error
//   10 = validation gate failed (missing field, duplicate variable key)

use std::process;

use taskdesk_engine::compose::ComposeError;
use taskdesk_engine::variables::VariableError;

/// Named exit codes for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    Error = 1,
    Usage = 2,
    Validation = 10,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Map an anyhow error to an exit code by inspecting the error chain.
    pub fn from_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if cause.downcast_ref::<ComposeError>().is_some()
                || cause.downcast_ref::<VariableError>().is_some()
            {
                return Self::Validation;
            }
        }
        Self::Error
    }

    /// Exit the process with this code.
    pub fn exit(self) -> ! {
        process::exit(self.code())
    }
}
