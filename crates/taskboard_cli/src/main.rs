//! CLI probe for `taskboard_core`.
//!
//! # Responsibility
//! - Verify core linkage and logging setup outside any UI host.
//! - Replay the create / drag-to-finished scenario and print every snapshot
//!   as one JSON line, so output stays deterministic apart from item ids.

use clap::{Parser, Subcommand};
use log::info;
use serde_json::json;
use std::process::ExitCode;
use taskboard_core::{
    default_log_level, init_logging, Board, BoardSnapshot, BoardStore, DragGesture, DropOutcome,
    ItemForm, ItemStatus,
};

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Task board core probe")]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "TASKBOARD_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rotating log files; logging is off when unset.
    #[arg(long, env = "TASKBOARD_LOG_DIR")]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the create / move scenario and print each snapshot.
    Demo,
    /// Print the core crate version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("taskboard: {err}");
            return ExitCode::FAILURE;
        }
        info!("event=cli_start module=cli status=ok command={:?}", cli.command);
    }

    match cli.command {
        Command::Version => {
            println!("taskboard_core version={}", taskboard_core::core_version());
            ExitCode::SUCCESS
        }
        Command::Demo => match run_demo() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("taskboard: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_demo() -> Result<(), String> {
    let mut store = BoardStore::new();
    store
        .subscribe(|snapshot: &BoardSnapshot| print_snapshot("notify", snapshot))
        .detach();
    let mut board = Board::attach(&store);

    let mut form = ItemForm::new();
    form.fill("Build API", "REST endpoints", "3");
    let id = form.submit(&mut store).map_err(|err| err.to_string())?;

    let card = board
        .active
        .cards()
        .into_iter()
        .find(|card| card.id == id)
        .ok_or_else(|| format!("created item {id} missing from active list"))?;
    println!(
        "{}",
        json!({ "event": "card", "title": card.title, "assigned": card.assigned_label() })
    );

    for target_status in [ItemStatus::Finished, ItemStatus::Finished] {
        let source = card.drag_source();
        let mut gesture = DragGesture::begin(&source);
        let target = board.list_mut(target_status);
        gesture.drag_over(&mut *target);
        let applied = match gesture.drop_on(&mut *target, &mut store) {
            Some(DropOutcome::Delivered { change, .. }) => change.is_applied(),
            _ => false,
        };
        let state = gesture.end(&source);
        println!(
            "{}",
            json!({ "event": "drop", "target": target_status, "applied": applied, "state": state.name() })
        );
    }

    let snapshot = store.snapshot();
    let active = snapshot.count_with_status(ItemStatus::Active);
    let finished = snapshot.count_with_status(ItemStatus::Finished);
    if board.active.items().len() != active || board.finished.items().len() != finished {
        return Err("board lists out of sync with store".to_string());
    }
    info!("event=demo_run module=cli status=ok active={active} finished={finished}");
    println!(
        "{}",
        json!({ "event": "summary", "active": active, "finished": finished })
    );
    Ok(())
}

fn print_snapshot(event: &str, snapshot: &BoardSnapshot) {
    match serde_json::to_string(&json!({ "event": event, "items": snapshot })) {
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!("taskboard: failed to encode snapshot: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{run_demo, Cli, Command};
    use clap::Parser;

    #[test]
    fn demo_runs_to_completion() {
        run_demo().expect("demo scenario should succeed");
    }

    #[test]
    fn parses_log_flags_and_subcommand() {
        let cli = Cli::try_parse_from([
            "taskboard",
            "--log-level",
            "debug",
            "--log-dir",
            "/tmp/taskboard-logs",
            "demo",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_dir.as_deref(), Some("/tmp/taskboard-logs"));
        assert!(matches!(cli.command, Command::Demo));
    }
}
