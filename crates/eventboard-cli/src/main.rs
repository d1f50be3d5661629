use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;

#[derive(Parser)]
#[command(name = "eventboard", version, about = "Eventboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bucket tasks into now / next / upcoming / future / past
    Buckets(commands::buckets::BucketsArgs),
    /// Filtered task list in chronological order
    List(commands::list::ListArgs),
    /// Resolve a week label to its Monday-Sunday range
    Week(commands::week::WeekArgs),
    /// Distinct values available to the list filters
    Options(commands::options::OptionsArgs),
    /// Search the people directory
    People(commands::people::PeopleArgs),
    /// Search the locations sheet
    Locations(commands::locations::LocationsArgs),
    /// Re-bucket tasks on an interval
    Watch(commands::watch::WatchArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Buckets(args) => commands::buckets::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Week(args) => commands::week::run(args),
        Commands::Options(args) => commands::options::run(args),
        Commands::People(args) => commands::people::run(args),
        Commands::Locations(args) => commands::locations::run(args),
        Commands::Watch(args) => commands::watch::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
