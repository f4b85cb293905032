use clap::{Parser, Subcommand};

/// CLI arguments for travelrec
#[derive(Debug, Parser)]
#[command(
    name = "travelrec",
    version,
    about = "CLI for querying the travel recommendation catalog"
)]
pub struct CliArgs {
    /// Base URL the catalog is fetched from (the document lives at
    /// <base>/travel_recommendation_api.json)
    #[arg(
        short = 'u',
        long = "url",
        global = true,
        default_value = "http://127.0.0.1:8000"
    )]
    pub url: String,

    /// Verbose logging (debug level, written to stderr)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Run one search and render the matching cards
    Search {
        /// Free-text query (e.g. "beach", "temple", "country", "waterfall")
        query: String,
    },

    /// List every city grouped under its country
    Countries,

    /// List all temples
    Temples,

    /// List all beaches
    Beaches,

    /// Read queries line by line from stdin (/clear, /visit <title>, /quit)
    Interactive,
}
