//! # slotboard — occupancy dashboard
//!
//! Composition root that wires the HTTP snapshot source and the terminal
//! grid view into an [`OccupancyBoard`] and runs it.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the tracing subscriber
//! - Construct the adapters and inject them into the board
//! - Run the board lifecycle: `start`, interactive commands, `destroy`
//!
//! ## Commands (stdin, one per line)
//! - `r` — manual refresh
//! - `<slot id>` — show details for a slot
//! - `c` — close the open detail view
//! - `d` — dismiss the error banner
//! - `q` (or EOF / Ctrl-C) — quit

use std::sync::Arc;

use tokio::io::AsyncBufReadExt;

use slotboard_adapter_http::HttpSnapshotSource;
use slotboard_adapter_terminal::{LocalTimeFormatter, TextGridView};
use slotboard_app::board::OccupancyBoard;
use slotboard_app::selection::SelectionSender;
use slotboard_domain::id::LocationId;

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let source = HttpSnapshotSource::new(config.endpoint());
    let view = Arc::new(TextGridView::new(std::io::stdout(), LocalTimeFormatter));
    let board = OccupancyBoard::new(source, view, config.board_config());

    tracing::info!(endpoint = config.endpoint(), "starting occupancy board");
    board.start().await;
    let selection = board.selection();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line? {
                None => break,
                Some(line) => {
                    if !handle_command(&board, &selection, line.trim()).await {
                        break;
                    }
                }
            },
        }
    }

    tracing::info!("shutting down");
    board.destroy();
    Ok(())
}

/// Dispatch one stdin command. Returns `false` when the user quits.
async fn handle_command<S, V>(
    board: &OccupancyBoard<S, V>,
    selection: &SelectionSender,
    command: &str,
) -> bool
where
    S: slotboard_app::ports::SnapshotSource + 'static,
    V: slotboard_app::ports::GridView + 'static,
{
    match command {
        "" => {}
        "q" | "quit" => return false,
        "r" | "refresh" => {
            board.refresh_now().await;
        }
        "c" | "close" => selection.close_detail(),
        "d" | "dismiss" => board.dismiss_error(),
        other => match other.parse::<LocationId>() {
            Ok(id) => selection.select(id),
            Err(_) => {
                eprintln!("commands: r(efresh), <slot id>, c(lose), d(ismiss), q(uit)");
            }
        },
    }
    true
}
