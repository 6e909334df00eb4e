//! Command-line configuration.
//!
//! # Invariants
//! - Paths resolved here are absolute before they reach core.
//! - No process-wide state is set while parsing.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DEFAULT_DB_FILE_NAME: &str = "sidenote.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "sidenote-logs";

/// Single-user notes in the terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sidenote", version, about)]
pub struct Cli {
    /// SQLite file holding the notes.
    #[arg(long, env = "SIDENOTE_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Keep notes in memory only; nothing is written to disk.
    #[arg(long)]
    pub in_memory: bool,

    /// trace|debug|info|warn|error
    #[arg(long, env = "SIDENOTE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files.
    #[arg(long, env = "SIDENOTE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable colored output (also honored via `NO_COLOR`).
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub action: Option<Action>,
}

/// One-shot actions; without one the interactive session starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print notes, most recently updated first.
    List {
        /// Only notes whose title or content contains this text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one note.
    Show { id: Uuid },
    /// Create a note.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Delete a note after confirmation.
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Where notes are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    Memory,
    File(PathBuf),
}

impl Cli {
    pub fn storage_target(&self) -> anyhow::Result<StorageTarget> {
        if self.in_memory {
            return Ok(StorageTarget::Memory);
        }
        let path = match &self.db {
            Some(path) => absolute(path)?,
            None => std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
        };
        Ok(StorageTarget::File(path))
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(sidenote_core::default_log_level())
    }

    pub fn log_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => absolute(dir),
            None => Ok(std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
        }
    }

    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").map_or(true, |value| value.is_empty())
    }
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::{Action, Cli, StorageTarget};
    use clap::Parser;

    #[test]
    fn in_memory_wins_over_db_path() {
        let cli = Cli::try_parse_from(["sidenote", "--db", "/tmp/x.sqlite3", "--in-memory"])
            .unwrap();
        assert_eq!(cli.storage_target().unwrap(), StorageTarget::Memory);
    }

    #[test]
    fn relative_db_path_is_made_absolute() {
        let cli = Cli::try_parse_from(["sidenote", "--db", "notes.sqlite3"]).unwrap();
        let StorageTarget::File(path) = cli.storage_target().unwrap() else {
            panic!("expected file target");
        };
        assert!(path.is_absolute());
        assert!(path.ends_with("notes.sqlite3"));
    }

    #[test]
    fn parses_one_shot_actions() {
        let cli = Cli::try_parse_from(["sidenote", "add", "--title", "A", "--content", "x"])
            .unwrap();
        assert_eq!(
            cli.action,
            Some(Action::Add {
                title: "A".to_string(),
                content: "x".to_string(),
            })
        );

        let bad_id = Cli::try_parse_from(["sidenote", "show", "not-a-uuid"]);
        assert!(bad_id.is_err());
    }

    #[test]
    fn log_level_prefers_flag_and_falls_back_to_core_default() {
        let cli = Cli::try_parse_from(["sidenote", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let unset = Cli {
            log_level: None,
            ..cli
        };
        assert_eq!(unset.log_level(), sidenote_core::default_log_level());
    }

    #[test]
    fn no_action_means_interactive() {
        let cli = Cli::try_parse_from(["sidenote"]).unwrap();
        assert_eq!(cli.action, None);
    }
}
