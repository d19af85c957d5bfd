use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "venue-finder")]
#[command(about = "Search event venues by location, name, type or date")]
pub struct CliArgs {
    /// Search mode: location, name, type or date
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Free-text search term, or an event date (YYYY-MM-DD) in date mode
    #[arg(short, long)]
    pub term: Option<String>,

    /// Capacity bracket such as 100-300 or 500+
    #[arg(short, long)]
    pub capacity: Option<String>,

    /// Show the details of a single catalog venue
    #[arg(long, conflicts_with_all = ["mode", "term", "capacity"])]
    pub details: Option<u32>,

    /// Emit JSON instead of venue cards
    #[arg(long)]
    pub json: bool,

    /// Path to TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Override the geocoder endpoint from config
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
