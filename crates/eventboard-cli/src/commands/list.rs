//! Filtered, chronologically sorted task list.

use clap::Args;
use eventboard_core::calendar::{
    format_date_short, format_day_date, format_time_12h, format_week_range,
};
use eventboard_core::{
    classify_level, Task, TaskFilter, TaskTimeResolver, TemporalClassifier, TimeLevel,
};
use serde::Serialize;

use crate::input::SourceArgs;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Exact week label (e.g. "CW45")
    #[arg(long)]
    pub week: Option<String>,
    /// Exact day name
    #[arg(long)]
    pub day: Option<String>,
    /// Exact location
    #[arg(long)]
    pub location: Option<String>,
    /// Exact team
    #[arg(long)]
    pub team: Option<String>,
    /// Person name, matched by substring, team, or "everyone"
    #[arg(long)]
    pub person: Option<String>,
    /// Case-insensitive free-text search
    #[arg(long)]
    pub search: Option<String>,
}

impl ListArgs {
    fn filter(&self) -> TaskFilter {
        TaskFilter {
            week: self.week.clone().unwrap_or_default(),
            day: self.day.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            team: self.team.clone().unwrap_or_default(),
            person: self.person.clone().unwrap_or_default(),
            search: self.search.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct ListRow<'a> {
    #[serde(flatten)]
    task: &'a Task,
    level: &'static str,
    /// Human-readable date ("Wed, Nov 5" or "Nov 3 – Nov 9")
    when: String,
    /// "2:00 PM – 3:30 PM" for timed tasks
    #[serde(skip_serializing_if = "String::is_empty")]
    time: String,
}

fn describe_date(resolver: &TaskTimeResolver, task: &Task) -> String {
    let weeks = resolver.weeks();
    match (classify_level(task), task.week(), task.day()) {
        (TimeLevel::Week, Some(week), _) => format_week_range(weeks, week),
        (_, Some(week), Some(day)) => format_day_date(weeks, week, day),
        // legacy dates: fall back to the resolved start
        _ => resolver
            .resolve(task)
            .start
            .map(|start| format_date_short(&resolver.clock(), start))
            .unwrap_or_default(),
    }
}

fn describe_time(task: &Task) -> String {
    match (task.start(), task.end()) {
        (Some(start), Some(end)) => {
            format!("{} – {}", format_time_12h(start), format_time_12h(end))
        }
        (Some(start), None) => format_time_12h(start),
        _ => String::new(),
    }
}

pub fn run(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let board = args.source.load()?;
    let filter = args.filter();
    let classifier = TemporalClassifier::new(&board.config);

    let matched = filter.apply(&board.tasks, &board.people);
    tracing::debug!(
        active_filters = filter.active_count(),
        matched = matched.len(),
        total = board.tasks.len(),
        "applied list filter"
    );

    let resolver = classifier.resolver();
    let rows: Vec<ListRow> = classifier
        .sort_chronologically(matched)
        .into_iter()
        .map(|task| ListRow {
            task,
            level: classify_level(task).as_str(),
            when: describe_date(resolver, task),
            time: describe_time(task),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
