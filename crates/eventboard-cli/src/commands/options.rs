use clap::Args;
use eventboard_core::FilterOptions;
use std::path::PathBuf;

use crate::input::load_tasks;

#[derive(Args)]
pub struct OptionsArgs {
    /// JSON array of task records
    #[arg(long)]
    pub tasks: PathBuf,
}

pub fn run(args: OptionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = load_tasks(&args.tasks)?;
    let options = FilterOptions::from_tasks(&tasks);
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
