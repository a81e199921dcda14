use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// Report a successful value on stdout, or the full error chain on
    /// stderr.
    pub fn from_outcome<T: std::fmt::Display>(outcome: anyhow::Result<T>) -> Self {
        match outcome {
            Ok(value) => Self::stdout(format_args!(
                "{} {value}",
                output_utils::GREEN_CHECK,
            )),

            Err(e) => Self::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
