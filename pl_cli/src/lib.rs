//! Internal modules for the league CLI.
//!
//! This library provides argument parsing, command execution and logging
//! setup used by the pl_cli binary.

pub mod commands;
pub mod logging;
