//! Fabric context (virtual switch) handling.
//!
//! A physical switch partitioned into logical switches selects the target
//! with a fabric identifier (FID). Commands without a FID run in the
//! session's current context; commands with one are wrapped in `fosexec`.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A positive fabric context identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fid(NonZeroU32);

impl Fid {
    /// Returns `None` for zero.
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// The numeric identifier.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Fid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u32 = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid FID '{}': {}", s, e))?;
        Fid::new(id).ok_or_else(|| format!("invalid FID '{}': must be positive", s))
    }
}

/// Wraps `cmd` so it runs in the logical switch `fid`.
///
/// The command is substituted between double quotes as-is. A command that
/// itself contains `"` is not escaped and may be split by the switch shell.
pub fn fidify_command(cmd: &str, fid: Option<Fid>) -> String {
    match fid {
        Some(fid) => format!("fosexec --fid {} -cmd \"{}\" ", fid, cmd),
        None => cmd.to_string(),
    }
}
