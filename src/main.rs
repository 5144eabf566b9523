//! TuneGrab - turn streaming track links into downloadable audio links.
//!
//! The user pastes a track link, the app validates and canonicalizes it,
//! asks an external resolver service for a download link, and keeps a short
//! history of successful lookups. It can be run as a GUI application or
//! used via CLI commands.

// Hide console window on Windows when running as GUI
// CLI commands will attach to the parent console or allocate one
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod history;
pub mod link;
pub mod lookup;
pub mod ui;

use clap::Parser;
use iced::application;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::TuneGrab;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tunegrab=info".parse()?))
        .init();

    // Try to run a CLI command
    if cli::run_command(&args)? {
        // A command was executed, exit normally
        return Ok(());
    }

    // No command specified, launch the GUI
    application("TuneGrab", TuneGrab::update, TuneGrab::view)
        .subscription(TuneGrab::subscription)
        .run_with(TuneGrab::new)
        .map_err(|e| anyhow::anyhow!("GUI Error: {}", e))
}
