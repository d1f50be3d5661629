//! Temporal buckets for the whole board or one person.

use clap::Args;
use eventboard_core::{filter_user_tasks, TemporalClassifier};

use crate::input::{parse_now, SourceArgs};

#[derive(Args)]
pub struct BucketsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Classify against this RFC 3339 instant instead of the system clock
    #[arg(long)]
    pub now: Option<String>,
    /// Only tasks assigned to this person (by name, team, or "everyone")
    #[arg(long)]
    pub user: Option<String>,
}

pub fn run(args: BucketsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let board = args.source.load()?;
    let now = parse_now(args.now.as_deref())?;
    let classifier = TemporalClassifier::new(&board.config);

    let buckets = match args.user.as_deref() {
        Some(user) => {
            let mine = filter_user_tasks(&board.tasks, user, &board.people);
            tracing::debug!(user, assigned = mine.len(), "filtered board to user");
            classifier.recompute(mine, now)
        }
        None => classifier.recompute(&board.tasks, now),
    };

    println!("{}", serde_json::to_string_pretty(&buckets)?);
    Ok(())
}
