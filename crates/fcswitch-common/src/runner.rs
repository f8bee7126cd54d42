//! The command execution seam between switch clients and their transport.
//!
//! A [`CommandRunner`] sends one literal CLI command to an already-connected
//! switch session and hands back the raw output lines. Clients never see how
//! the session was established.

use serde::Serialize;

use crate::error::FcSwitchResult;

/// Raw output of one switch command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    /// Standard output, one entry per line.
    pub lines: Vec<String>,
    /// Standard error, one entry per line.
    pub errors: Vec<String>,
}

impl CommandOutput {
    /// Builds an output from stdout lines only.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            errors: Vec::new(),
        }
    }

    /// Splits raw stdout/stderr text into lines.
    pub fn from_text(stdout: &str, stderr: &str) -> Self {
        Self {
            lines: stdout.lines().map(str::to_string).collect(),
            errors: stderr.lines().map(str::to_string).collect(),
        }
    }
}

/// Executes commands against a switch CLI session.
///
/// Calls are blocking and strictly one at a time; an implementation owns any
/// session state it needs behind `&self`. Errors are returned to the client's
/// caller as-is.
pub trait CommandRunner {
    /// Runs `command` and returns its output lines.
    fn execute(&self, command: &str) -> FcSwitchResult<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, command: &str) -> FcSwitchResult<CommandOutput> {
        (**self).execute(command)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn execute(&self, command: &str) -> FcSwitchResult<CommandOutput> {
        (**self).execute(command)
    }
}
