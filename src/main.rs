mod catalog;
mod parser;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use catalog::{Catalog, Entry};

const DEFAULT_INPUT: &str = "README.md";
const DEFAULT_OUTPUT: &str = "categorized_apis_from_readme.json";

#[derive(Parser)]
#[command(name = "api_catalog", about = "Extract a categorized API catalog from a public-apis style README")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the markdown catalog and save it as JSON
    Parse {
        /// Markdown file to read
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// JSON file to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Print the JSON instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// List the APIs of one category
    List {
        /// Category name, exactly as in the heading
        #[arg(short, long)]
        category: String,
        /// Catalog JSON produced by `parse`
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        catalog: PathBuf,
    },
    /// Find APIs whose name or description contains a query (case-insensitive)
    Search {
        query: String,
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        catalog: PathBuf,
    },
    /// Show catalog statistics
    Stats {
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        catalog: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input, output, stdout } => {
            // With --stdout the JSON owns stdout; status lines move to stderr.
            let status = |msg: String| {
                if stdout {
                    eprintln!("{msg}");
                } else {
                    println!("{msg}");
                }
            };

            let markdown = read_markdown(&input)?;
            status(format!("Successfully read '{}'.", input.display()));
            status(format!("Parsing '{}'...", input.display()));
            let catalog = parser::parse(&markdown);
            let stats = catalog.stats();
            info!(
                categories = stats.categories,
                entries = stats.entries,
                "parsed {}",
                input.display()
            );

            if catalog.is_empty() {
                status("Parsing resulted in empty or no data. No JSON file saved.".to_string());
                return Ok(());
            }
            status("Parsing complete.".to_string());

            if stdout {
                println!("{}", catalog.to_json()?);
            } else {
                catalog.save(&output)?;
                status(format!("Successfully saved categorized APIs to '{}'", output.display()));
            }
            Ok(())
        }
        Commands::List { category, catalog } => {
            let catalog = Catalog::load(&catalog)?;
            println!("--- APIs in {} category ---", category);
            let entries = catalog.entries(&category);
            if entries.is_empty() {
                println!("No APIs found in the {} category or category does not exist.", category);
            }
            print_entries(entries.iter());
            Ok(())
        }
        Commands::Search { query, catalog } => {
            let catalog = Catalog::load(&catalog)?;
            println!("--- APIs matching \"{}\" query ---", query);
            let hits = catalog.search(&query);
            debug!(query = %query, hits = hits.len(), "search");
            if hits.is_empty() {
                println!("No APIs found matching the query \"{}\".", query);
            }
            print_entries(hits.into_iter());
            Ok(())
        }
        Commands::Stats { catalog } => {
            let catalog = Catalog::load(&catalog)?;
            if catalog.is_empty() {
                println!("No APIs found.");
                return Ok(());
            }

            println!("{:<32} | {:>7}", "Category", "APIs");
            println!("{}", "-".repeat(42));
            for (name, entries) in catalog.categories() {
                println!("{:<32} | {:>7}", truncate(name, 32), entries.len());
            }

            let s = catalog.stats();
            println!();
            println!("Categories:    {}", s.categories);
            println!("Total APIs:    {}", s.entries);
            println!("HTTPS:         {}", s.https);
            println!("Auth required: {}", s.auth_required);
            Ok(())
        }
    }
}

/// Reads the source document, telling apart a missing file, an unreadable one and an empty one.
fn read_markdown(path: &Path) -> Result<String> {
    let markdown = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            bail!("The markdown file '{}' was not found.", path.display())
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("An error occurred while reading '{}'", path.display()))
        }
    };
    if markdown.trim().is_empty() {
        bail!("The markdown file '{}' is empty.", path.display());
    }
    Ok(markdown)
}

fn print_entries<'a>(entries: impl Iterator<Item = &'a Entry>) {
    for e in entries {
        println!("- {}: {}", e.name, e.description);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}
