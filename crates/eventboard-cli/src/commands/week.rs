use clap::Args;
use eventboard_core::calendar::{format_week_range, parse_week_label};
use eventboard_core::WeekResolver;
use serde_json::json;
use std::path::PathBuf;

use crate::input::load_config;

#[derive(Args)]
pub struct WeekArgs {
    /// Week label, e.g. "CW45" or "45"
    pub label: String,
    /// TOML event config (default: event year 2026, UTC-5)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: WeekArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let weeks = WeekResolver::new(&config);
    let range = weeks.try_week_date_range(&args.label)?;

    let out = json!({
        "label": &args.label,
        "week": parse_week_label(&args.label),
        "year": weeks.year(),
        "start": range.start,
        "end": range.end,
        "display": format_week_range(&weeks, &args.label),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
