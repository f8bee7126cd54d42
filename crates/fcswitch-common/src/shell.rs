//! Command runner backed by a local transport program.
//!
//! The switch CLI is reached through an external program (typically `ssh`
//! with keys already in place). The FOS command is passed as the final
//! argument, so `ShellRunner::new("ssh", ["admin@sw1"])` executes
//! `ssh admin@sw1 '<command>'`.
//!
//! # Example
//!
//! ```ignore
//! use fcswitch_common::{CommandRunner, ShellRunner};
//!
//! let runner = ShellRunner::new("ssh", ["admin@10.0.0.5"]);
//! let output = runner.execute("switchShow")?;
//! for line in &output.lines {
//!     println!("{line}");
//! }
//! ```

use std::process::{Command, Stdio};

use crate::error::{FcSwitchError, FcSwitchResult};
use crate::runner::{CommandOutput, CommandRunner};

/// Result of one transport program invocation.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// The exit code of the program (0 = success).
    pub exit_code: i32,
    /// The captured stdout output.
    pub stdout: String,
    /// The captured stderr output.
    pub stderr: String,
}

impl ExecResult {
    /// Returns true if the program succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the combined output (stdout + stderr) for error messages.
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Runs switch commands through a local program.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    program: String,
    args: Vec<String>,
}

impl ShellRunner {
    /// Creates a runner that invokes `program args... <command>`.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The transport program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Spawns the transport program and waits for it to exit.
    pub fn exec(&self, command: &str) -> FcSwitchResult<ExecResult> {
        tracing::debug!(program = %self.program, command = %command, "Executing switch command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| FcSwitchError::ShellExec {
                command: command.to_string(),
                source: e,
            })?;

        let result = ExecResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if result.success() {
            tracing::trace!(command = %command, "Command succeeded");
        } else {
            tracing::warn!(
                command = %command,
                exit_code = result.exit_code,
                stderr = %result.stderr.trim(),
                "Command failed"
            );
        }

        Ok(result)
    }
}

impl CommandRunner for ShellRunner {
    /// A non-zero exit with nothing on stdout is a transport failure. FOS
    /// prints its "does not exist" style answers with non-zero status too, so
    /// any stdout is handed to the parsers.
    fn execute(&self, command: &str) -> FcSwitchResult<CommandOutput> {
        let result = self.exec(command)?;
        if !result.success() && result.stdout.trim().is_empty() {
            return Err(FcSwitchError::CommandFailed {
                command: command.to_string(),
                exit_code: result.exit_code,
                output: result.combined_output().trim().to_string(),
            });
        }
        Ok(CommandOutput::from_text(&result.stdout, &result.stderr))
    }
}
