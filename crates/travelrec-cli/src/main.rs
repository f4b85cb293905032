//! travelrec — Command-line interface for travelrec-core
//!
//! This binary fetches the travel recommendation catalog over HTTP and lets
//! you search it from your terminal. It supports printing catalog
//! statistics, listing each category, one-shot searches, and an interactive
//! prompt.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats
//!   $ travelrec stats
//!
//! - Search once and render the matching cards
//!   $ travelrec search "beach resort"
//!   $ travelrec search countryside
//!
//! - List a category
//!   $ travelrec countries
//!   $ travelrec temples
//!   $ travelrec beaches
//!
//! - Interactive prompt (Enter submits, /clear clears, /quit exits)
//!   $ travelrec interactive
//!
//! Data source
//! -----------
//!
//! The catalog document is fetched from
//! `<base>/travel_recommendation_api.json` with cache-bypass headers and
//! cached in memory for the lifetime of the process. Use `--url <base>` to
//! point at a different host.

mod args;
mod panel;

use std::io::{self, BufRead, Write};

use crate::args::{CliArgs, Commands};
use crate::panel::TerminalPanel;
use clap::Parser;
use travelrec_core::search::{cities_from_countries, items_from_category};
use travelrec_core::timezone::zone_for_item;
use travelrec_core::{CatalogLoader, Controller, HttpFetch, Item};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let loader = CatalogLoader::new(HttpFetch::new(&args.url));

    match args.command {
        Commands::Stats => {
            let stats = loader.load()?.stats();
            println!("Catalog statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
            println!("  Temples: {}", stats.temples);
            println!("  Beaches: {}", stats.beaches);
        }

        Commands::Countries => {
            let catalog = loader.load()?;
            print_listing(&cities_from_countries(catalog), "cities");
        }

        Commands::Temples => {
            let catalog = loader.load()?;
            print_listing(&items_from_category(catalog, "temples"), "temples");
        }

        Commands::Beaches => {
            let catalog = loader.load()?;
            print_listing(&items_from_category(catalog, "beaches"), "beaches");
        }

        Commands::Search { query } => {
            let mut ctrl = Controller::new(loader, TerminalPanel::new());
            ctrl.search(&query);
        }

        Commands::Interactive => {
            let ctrl = Controller::new(loader, TerminalPanel::new());
            run_interactive(ctrl)?;
        }
    }

    Ok(())
}

fn print_listing(items: &[Item], what: &str) {
    if items.is_empty() {
        println!("No {what} in the catalog.");
        return;
    }
    for item in items {
        if item.country.is_empty() {
            println!("{} — {}", item.name, item.description);
        } else {
            println!("{} ({}) — {}", item.name, item.country, item.description);
        }
        if let Some(zone) = zone_for_item(item) {
            println!("    local zone: {zone}");
        }
    }
}

/// Line loop on stdin: every plain line is one Search transition.
fn run_interactive<F>(mut ctrl: Controller<F, TerminalPanel>) -> anyhow::Result<()>
where
    F: travelrec_core::FetchCatalog,
{
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("query> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };

        match line.trim() {
            "/quit" => break,
            "/clear" => ctrl.clear(),
            cmd if cmd.starts_with("/visit ") => {
                let title = cmd.trim_start_matches("/visit ").trim();
                if !ctrl.target().visit(title) {
                    println!("No card titled \"{title}\" on the panel.");
                }
            }
            _ => ctrl.search(&line),
        }
    }

    Ok(())
}
