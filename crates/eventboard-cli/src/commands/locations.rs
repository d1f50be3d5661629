use clap::Args;
use eventboard_core::search_locations;
use std::path::PathBuf;

use crate::input::load_locations;

#[derive(Args)]
pub struct LocationsArgs {
    /// JSON array of locations
    #[arg(long)]
    pub locations: PathBuf,
    /// Match place or notes (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
}

pub fn run(args: LocationsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let locations = load_locations(&args.locations)?;
    let matched = search_locations(&locations, args.search.as_deref().unwrap_or_default());
    println!("{}", serde_json::to_string_pretty(&matched)?);
    Ok(())
}
