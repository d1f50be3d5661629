//! Periodic re-classification of the board.
//!
//! Each tick re-reads the input files and the system clock, recomputes the
//! buckets and prints one JSON line with their sizes. Stops on Ctrl-C or
//! after `--ticks` passes.

use std::time::Duration;

use chrono::Utc;
use clap::Args;
use eventboard_core::{filter_user_tasks, TemporalClassifier};
use serde_json::json;

use crate::input::SourceArgs;

#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Seconds between passes
    #[arg(long, default_value = "60")]
    pub interval: u64,
    /// Stop after this many passes
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Only tasks assigned to this person
    #[arg(long)]
    pub user: Option<String>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.interval == 0 {
        return Err("--interval must be at least 1 second".into());
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch(args))
}

async fn watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(Duration::from_secs(args.interval));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut passes = 0u64;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                tick(&args)?;
                passes += 1;
                if args.ticks.is_some_and(|limit| passes >= limit) {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!(passes, "interrupted");
                break;
            }
        }
    }
    Ok(())
}

fn tick(args: &WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let board = match args.source.load() {
        Ok(board) => board,
        Err(e) => {
            tracing::warn!(error = %e, "failed to reload board, skipping pass");
            return Ok(());
        }
    };
    let now = Utc::now();
    let classifier = TemporalClassifier::new(&board.config);

    let (considered, buckets) = match args.user.as_deref() {
        Some(user) => {
            let mine = filter_user_tasks(&board.tasks, user, &board.people);
            (mine.len(), classifier.recompute(mine, now))
        }
        None => (board.tasks.len(), classifier.recompute(&board.tasks, now)),
    };

    let line = json!({
        "at": now,
        "counts": buckets.counts(),
        "bucketed": buckets.total(),
        "dropped": considered - buckets.total(),
    });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}
