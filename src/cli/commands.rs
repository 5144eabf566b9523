//! CLI command definitions and dispatch.
//!
//! Each subcommand drives the same core modules as the GUI:
//! - `resolve`: validate a link, resolve it, record it in history
//! - `history`: print the persisted history
//! - `clear-history`: erase the persisted history
//! - `set-endpoint`: persist a resolver endpoint override

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config;
use crate::error::ResultExt;
use crate::history::{FileStorage, HistoryEntry, HistoryStore};
use crate::link::TrackReference;
use crate::lookup::LookupClient;

/// TuneGrab CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a track link into a download link
    Resolve {
        /// The track link to resolve
        url: String,
        /// Resolver endpoint override (or set TUNEGRAB_ENDPOINT env var)
        #[arg(short, long, env = "TUNEGRAB_ENDPOINT")]
        endpoint: Option<String>,
        /// Don't record the result in history
        #[arg(long)]
        no_history: bool,
    },
    /// Show past successful lookups (most recent first)
    History,
    /// Erase all lookup history
    ClearHistory,
    /// Persist a different resolver endpoint in the config file
    SetEndpoint {
        /// The resolver base URL
        endpoint: String,
    },
}

/// Run a CLI command if one was specified.
///
/// Returns `Ok(true)` if a command was executed (the caller should exit),
/// `Ok(false)` if no command was given (the caller should launch the GUI).
pub fn run_command(args: &Cli) -> anyhow::Result<bool> {
    match &args.command {
        Some(Commands::Resolve {
            url,
            endpoint,
            no_history,
        }) => {
            cmd_resolve(url, endpoint.as_deref(), *no_history)?;
            Ok(true)
        }
        Some(Commands::History) => {
            cmd_history()?;
            Ok(true)
        }
        Some(Commands::ClearHistory) => {
            cmd_clear_history()?;
            Ok(true)
        }
        Some(Commands::SetEndpoint { endpoint }) => {
            cmd_set_endpoint(endpoint)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Resolve a track link and print the download link.
fn cmd_resolve(url: &str, endpoint: Option<&str>, no_history: bool) -> anyhow::Result<()> {
    let reference = match TrackReference::parse(url) {
        Ok(reference) => reference,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let endpoint = endpoint
        .map(str::to_string)
        .unwrap_or_else(|| config::load().lookup.endpoint);
    let client = LookupClient::new(endpoint);

    let rt = Runtime::new()?;
    let result = rt.block_on(client.resolve(&reference.canonical_url));

    match result {
        Ok(result) => {
            println!("Title:    {}", result.title);
            if let Some(ref artist) = result.artist {
                println!("Artist:   {}", artist);
            }
            println!("Download: {}", result.download_link);

            if !no_history {
                let mut history = open_history()?;
                history.record(HistoryEntry::from_lookup(&result, &reference.canonical_url));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

/// Print the persisted history.
fn cmd_history() -> anyhow::Result<()> {
    let history = open_history().with_context("while loading history")?;

    if history.entries().is_empty() {
        println!("No lookups recorded yet.");
        return Ok(());
    }

    for entry in history.entries() {
        let artist = entry.artist.as_deref().unwrap_or("Unknown artist");
        println!("{} - {}", artist, entry.title);
        println!("    {} ({})", entry.source_url, entry.timestamp);
    }
    Ok(())
}

/// Erase the persisted history.
fn cmd_clear_history() -> anyhow::Result<()> {
    let mut history = open_history()?;
    history.clear();
    println!("History cleared.");
    Ok(())
}

/// Persist a different resolver endpoint.
fn cmd_set_endpoint(endpoint: &str) -> anyhow::Result<()> {
    let mut config = config::load();
    config.lookup.endpoint = endpoint.to_string();
    config::save(&config)?;
    println!("Resolver endpoint set to {}", endpoint);
    Ok(())
}

fn open_history() -> crate::error::Result<HistoryStore> {
    let storage = FileStorage::default_slot()?;
    Ok(HistoryStore::load(Box::new(storage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::parse_from(["tunegrab", "resolve", "https://open.spotify.com/track/x"]);
        assert!(matches!(cli.command, Some(Commands::Resolve { .. })));
    }

    #[test]
    fn test_cli_parses_resolve_flags() {
        let cli = Cli::parse_from([
            "tunegrab",
            "resolve",
            "--no-history",
            "--endpoint",
            "http://localhost:9000",
            "https://open.spotify.com/track/x",
        ]);
        let Some(Commands::Resolve {
            endpoint,
            no_history,
            ..
        }) = cli.command
        else {
            panic!("expected resolve command");
        };
        assert!(no_history);
        assert_eq!(endpoint.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_cli_parses_no_command() {
        let cli = Cli::parse_from(["tunegrab"]);
        assert!(cli.command.is_none());
    }
}
