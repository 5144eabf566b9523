//! Command-line interface for tunegrab.
//!
//! This module provides CLI commands for resolving track links and
//! inspecting the lookup history without launching the GUI.

mod commands;

pub use commands::{Cli, Commands, run_command};
