//! # fcswitch-brocade - Brocade FOS read client
//!
//! Issues FOS CLI commands through a [`CommandRunner`] and rebuilds the
//! switch's zoning and fabric state from their text output.
//!
//! ## Responsibilities
//! - Alias and zone listings (`aliShow`, `zoneShow`)
//! - Fabric membership (`fabricShow` and its `-membership`/`-chassis` tables)
//! - Switch descriptor, name and firmware version
//! - Name server presence (`nodefind`) and the effective configuration
//! - WWN ↔ alias ↔ zone cross-references
//!
//! ## Key Features
//! - Parsers are pure functions over output lines ([`parsers`])
//! - Every query re-reads the switch; nothing is cached
//! - Logical switch selection through `fosexec --fid`
//!
//! Mutating commands (zone creation, configuration enable) are not offered.
//!
//! [`CommandRunner`]: fcswitch_common::CommandRunner

pub mod commands;
pub mod config;
pub mod parsers;
pub mod queries;
mod switch;
mod types;

pub use commands::{is_director_class, FabricVariant};
pub use config::ClientConfig;
pub use switch::BrocadeSwitch;
pub use types::*;
