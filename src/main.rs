//! cliplog command-line entry point
//!
//! `record` runs the sampler and store in the foreground; `list`, `count`
//! and `clear` are one-shot queries against the same database.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cliplog::clipboard_history::{sampler, HistoryStore};
use cliplog::config::load_config;
use cliplog::logging;

#[derive(Parser)]
#[command(name = "cliplog", version, about = "Background clipboard-history recorder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record clipboard changes in the foreground until interrupted
    Record,
    /// Print recorded entries, most recent first
    List,
    /// Print the number of recorded entries
    Count,
    /// Delete all recorded entries
    Clear,
}

fn main() -> Result<()> {
    let _guard = logging::init();
    let cli = Cli::parse();

    let config = load_config();
    let history = &config.history;

    let store = HistoryStore::open(history.resolve_database_path(), history.capacity)
        .context("failed to open history store")?;

    match cli.command {
        Command::Record => {
            let sampler = sampler::start(store.handle(), history.poll_interval());
            info!("Recording clipboard history; kill the process to stop");
            // Returns only if the sampler fail-stops on a clipboard error
            sampler.join();
        }
        Command::List => {
            for entry in store.entries().context("failed to list history")? {
                println!(
                    "{}  {}",
                    entry.captured_at.format("%Y-%m-%d %H:%M:%S"),
                    preview(&entry.content)
                );
            }
        }
        Command::Count => {
            println!("{}", store.count().context("failed to count history")?);
        }
        Command::Clear => {
            println!("{}", store.clear().context("failed to clear history")?);
        }
    }

    store
        .shutdown()
        .context("failed to shut down history store")?;
    Ok(())
}

/// Single-line preview of an entry, truncated for terminal display.
fn preview(content: &str) -> String {
    const MAX_PREVIEW_CHARS: usize = 80;
    let flat: String = content
        .trim()
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() > MAX_PREVIEW_CHARS {
        let truncated: String = flat.chars().take(MAX_PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_flattens_and_truncates() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview("two\nlines"), "two lines");

        let long = "x".repeat(100);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 83);
    }
}
