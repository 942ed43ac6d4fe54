//! Ripple-Search main entry point
//!
//! This is the command-line interface for the Ripple-Search crawler and index.

use anyhow::Context;
use clap::Parser;
use ripple_search::config::{load_config_with_hash, load_stopwords, BackendKind, Config};
use ripple_search::crawler::Coordinator;
use ripple_search::index::{open_index, SearchIndex};
use ripple_search::output::{hits_to_json, print_statistics, print_summary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ripple-Search: a host-scoped crawler with a TF-IDF index
///
/// Ripple-Search crawls one site breadth-first from a start URL, indexes the
/// visible text of every page it reaches, and ranks pages for single-term
/// queries by TF-IDF.
#[derive(Parser, Debug)]
#[command(name = "ripple-search")]
#[command(version)]
#[command(about = "A host-scoped crawler with a TF-IDF index", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration and print it without crawling
    #[arg(long, conflicts_with_all = ["stats", "search_only"])]
    dry_run: bool,

    /// Show statistics from the index and exit
    #[arg(long, conflicts_with_all = ["dry_run", "search_only"])]
    stats: bool,

    /// Query an existing index without crawling (persisted backend)
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    search_only: bool,

    /// Term to search after indexing; may be repeated
    #[arg(short, long = "search", value_name = "TERM")]
    search: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config)
    } else if cli.stats {
        handle_stats(&config)
    } else if cli.search_only {
        handle_search_only(&config, &cli.search)
    } else {
        handle_crawl(config, &cli.search).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ripple_search=info,warn"),
            1 => EnvFilter::new("ripple_search=debug,info"),
            2 => EnvFilter::new("ripple_search=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: validates config and prints the effective settings
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let stopwords = load_stopwords(config)?;

    println!("=== Ripple-Search Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Start URL: {}", config.crawler.start_url);
    println!("  Max pages: {}", config.crawler.max_pages);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);

    println!("\nIndex:");
    match config.index.backend {
        BackendKind::InMemory => println!("  Backend: in-memory"),
        BackendKind::Persisted => {
            println!("  Backend: persisted");
            println!(
                "  Database: {}",
                config.index.database_path.as_deref().unwrap_or("")
            );
        }
    }
    println!("  Stopwords: {}", stopwords.len());

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Handles the --stats mode: shows statistics from the index
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    let index = open_index(&config.index, load_stopwords(config)?)?;
    print_statistics(&index.stats()?);
    index.close()?;
    Ok(())
}

/// Handles the --search-only mode: answers queries from an existing index
fn handle_search_only(config: &Config, terms: &[String]) -> anyhow::Result<()> {
    if config.index.backend == BackendKind::InMemory {
        tracing::warn!("--search-only with the in-memory backend always searches an empty index");
    }

    let index = open_index(&config.index, load_stopwords(config)?)?;
    run_searches(index.as_ref(), terms)?;
    index.close()?;
    Ok(())
}

/// Handles the main operation: crawl, index, then answer queries
async fn handle_crawl(config: Config, terms: &[String]) -> anyhow::Result<()> {
    tracing::info!(
        "Crawling {} (max {} pages)",
        config.crawler.start_url,
        config.crawler.max_pages
    );

    let mut coordinator = Coordinator::from_config(config)?;
    let summary = coordinator.run().await.context("Crawl failed")?;
    print_summary(&summary);

    let index = coordinator.into_index();
    run_searches(index.as_ref(), terms)?;
    index.close()?;
    Ok(())
}

/// Prints one JSON result array per term
fn run_searches(index: &dyn SearchIndex, terms: &[String]) -> anyhow::Result<()> {
    for term in terms {
        let hits = index.search(term)?;
        tracing::info!("{} hits for {:?}", hits.len(), term);
        println!("{}", hits_to_json(&hits)?);
    }
    Ok(())
}
