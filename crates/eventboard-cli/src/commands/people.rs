use clap::Args;
use eventboard_core::{group_by_contact_for, search_people};
use std::path::PathBuf;

use crate::input::load_people;

#[derive(Args)]
pub struct PeopleArgs {
    /// JSON array of people
    #[arg(long)]
    pub people: PathBuf,
    /// Match name, role, contact-for or team (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
    /// Split the result into key contacts and the rest of the team
    #[arg(long)]
    pub grouped: bool,
}

pub fn run(args: PeopleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let people = load_people(&args.people)?;
    let matched: Vec<_> = search_people(&people, args.search.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();

    let json = if args.grouped {
        serde_json::to_string_pretty(&group_by_contact_for(&matched))?
    } else {
        serde_json::to_string_pretty(&matched)?
    };
    println!("{json}");
    Ok(())
}
