//! `sidenote` terminal entry point.
//!
//! # Responsibility
//! - Parse configuration, start logging and open note storage.
//! - Run a one-shot action, or the interactive session when none is given.

mod app;
mod command;
mod config;
mod oneshot;
mod prompt;
mod render;
mod theme;

use anyhow::Context;
use app::App;
use clap::Parser;
use config::{Action, Cli, StorageTarget};
use log::info;
use sidenote_core::db::open_db;
use sidenote_core::kv::{KvStore, MemoryKvStore, SqliteKvStore};
use sidenote_core::{core_version, init_logging, LocalNoteStore, NotesController};
use theme::Theme;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir()?;
    if let Err(err) = init_logging(cli.log_level(), &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!("event=cli_start module=cli status=ok core_version={}", core_version());

    let theme = Theme {
        color: cli.color_enabled(),
        ..Theme::default()
    };

    match cli.storage_target()? {
        StorageTarget::Memory => run(cli.action, MemoryKvStore::new(), theme).await,
        StorageTarget::File(path) => {
            let conn = open_db(&path)
                .with_context(|| format!("failed to open note database `{}`", path.display()))?;
            let kv = SqliteKvStore::try_new(conn).context("failed to prepare note storage")?;
            run(cli.action, kv, theme).await
        }
    }
}

async fn run<K: KvStore>(action: Option<Action>, kv: K, theme: Theme) -> anyhow::Result<()> {
    let controller = NotesController::new(LocalNoteStore::new(kv));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match action {
        Some(action) => {
            oneshot::run_action(
                action,
                controller,
                &theme,
                &mut stdin.lock(),
                &mut stdout.lock(),
            )
            .await
        }
        None => {
            let mut app = App::new(controller, theme, stdin.lock(), stdout.lock());
            app.run().await.context("terminal I/O failed")
        }
    }
}
