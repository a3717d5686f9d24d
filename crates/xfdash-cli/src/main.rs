//! xfdash — command-line frontend for the settings dashboard.
//!
//! Runs one discovery pass over the XDG application directories and renders
//! the grouped catalog as text or JSON, or launches one entry by id. A GUI
//! frontend consumes the same library; this binary is the headless way to
//! inspect what it would show.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use xfdash_core::{launch, Catalog, Scanner, XfdashError};

#[derive(Parser, Debug)]
#[command(name = "xfdash")]
#[command(about = "Settings dashboard discovery and launching")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Discover settings tools and print the grouped catalog
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Filter the catalog by a search query
    Search {
        /// Case-insensitive substring matched against names and comments
        query: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Launch a settings tool by id, detached
    Launch {
        /// Entry id (descriptor file name without extension)
        id: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let catalog = Scanner::new().discover();

    match args.command {
        CliCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                print_catalog(&catalog);
            }
        }
        CliCommand::Search { query, json } => {
            let filtered = catalog.search(&query);
            if json {
                let payload = serde_json::json!({
                    "first_match": catalog.first_match(&query).map(|c| c.key()),
                    "results": filtered,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print_catalog(&filtered);
                if let Some(category) = catalog.first_match(&query) {
                    info!("First match in {}", category.title());
                }
            }
        }
        CliCommand::Launch { id } => {
            let entry = catalog
                .find(&id)
                .ok_or(XfdashError::EntryNotFound { id })?;
            let pid = launch::spawn(entry)?;
            info!("Started '{}' with pid {}", entry.name, pid);
        }
    }

    Ok(())
}

/// Print the catalog grouped by category heading, skipping empty buckets.
fn print_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No settings tools found.");
        return;
    }
    for (category, entries) in catalog.iter() {
        if entries.is_empty() {
            continue;
        }
        println!("{}", category.title());
        for entry in entries {
            if entry.comment.is_empty() {
                println!("  {:<28} [{}]", entry.name, entry.id);
            } else {
                println!("  {:<28} [{}] {}", entry.name, entry.id, entry.comment);
            }
        }
        println!();
    }
}
