//! Test infrastructure for Fibre Channel switch clients
//!
//! Provides:
//! - A scripted [`CommandRunner`](fcswitch_common::CommandRunner) replaying
//!   canned output and recording sent commands
//! - Captured-style FOS output fixtures for a small fabric

pub mod fixtures;
mod runner;

pub use runner::ScriptedRunner;
