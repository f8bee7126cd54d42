//! Common infrastructure for Fibre Channel switch clients.
//!
//! - [`runner`]: the [`CommandRunner`] seam and raw [`CommandOutput`]
//! - [`shell`]: a runner that reaches the switch through a local program
//! - [`context`]: fabric context ids and the `fosexec` command wrapper
//! - [`error`]: error types for command execution and configuration
//!
//! # Example
//!
//! ```ignore
//! use fcswitch_common::{fidify_command, CommandRunner, Fid, ShellRunner};
//!
//! let runner = ShellRunner::new("ssh", ["admin@sw1"]);
//! let cmd = fidify_command("switchShow", Fid::new(128));
//! let output = runner.execute(&cmd)?;
//! ```

pub mod context;
pub mod error;
pub mod runner;
pub mod shell;

pub use context::{fidify_command, Fid};
pub use error::{FcSwitchError, FcSwitchResult};
pub use runner::{CommandOutput, CommandRunner};
pub use shell::{ExecResult, ShellRunner};
