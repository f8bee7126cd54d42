//! Scripted command runner
//!
//! Replays canned switch output for known command strings and records every
//! command it receives, so tests can assert both the parse result and the
//! exact CLI text sent to the switch.

use std::cell::RefCell;
use std::collections::HashMap;

use fcswitch_common::{CommandOutput, CommandRunner, FcSwitchError, FcSwitchResult};

/// A [`CommandRunner`] answering from a fixed script.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, CommandOutput>,
    failures: HashMap<String, String>,
    executed: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with the lines of `output`
    pub fn with_response(mut self, command: impl Into<String>, output: &str) -> Self {
        self.responses
            .insert(command.into(), CommandOutput::from_text(output, ""));
        self
    }

    /// Answer `command` with stdout and stderr text
    pub fn with_output(
        mut self,
        command: impl Into<String>,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        self.responses
            .insert(command.into(), CommandOutput::from_text(stdout, stderr));
        self
    }

    /// Fail `command` with a transport error
    pub fn with_failure(mut self, command: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(command.into(), message.into());
        self
    }

    /// Commands received so far, in order
    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn execute(&self, command: &str) -> FcSwitchResult<CommandOutput> {
        self.executed.borrow_mut().push(command.to_string());

        if let Some(message) = self.failures.get(command) {
            return Err(FcSwitchError::transport(command, message.clone()));
        }

        match self.responses.get(command) {
            Some(output) => Ok(output.clone()),
            None => {
                tracing::debug!(command = %command, "No scripted response");
                Err(FcSwitchError::transport(command, "no scripted response"))
            }
        }
    }
}
