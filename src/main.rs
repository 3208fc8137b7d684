//! Kilo Search - Main entrypoint.
//!
//! Command-line host for the Kilo Trie. It loads configuration, initializes
//! logging, builds an index from an item catalog, and answers prefix queries.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kilo_search_lib::catalog;
use kilo_search_lib::config::{self, ConfigLoader, KiloConfig, LogConfig, ENV_PREFIX};
use kilo_search_lib::data_structures::KiloTrie;
use kilo_search_lib::error::{
    report_error, set_error_reporter, ErrorContext, KiloError, KiloResult, TracingErrorReporter,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Kilo Search.
#[derive(Parser, Debug)]
#[command(name = "kilo_search", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build an index from a catalog and run prefix queries against it
    Search {
        /// Catalog of search keys (.json, .toml, or one key per line)
        #[arg(short, long)]
        items: PathBuf,

        /// Word delimiter, overriding the configuration
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Match case exactly instead of lowercasing keys and queries
        #[arg(long)]
        case_sensitive: bool,

        /// Maximum number of results printed per query
        #[arg(short, long)]
        limit: Option<usize>,

        /// Prefixes to search for
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so query results on stdout stay machine readable.
fn init_logging(log: &LogConfig) -> KiloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| KiloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the index described by `config` and the command-line overrides,
/// then prints the matches for every query.
fn run_search(
    config: &KiloConfig,
    items: PathBuf,
    delimiter: Option<char>,
    case_sensitive: bool,
    limit: Option<usize>,
    queries: &[String],
) -> anyhow::Result<()> {
    let keys = catalog::load_catalog(&items).map_err(KiloError::from)?;

    let mut trie_config = config.index.trie_config().map_err(KiloError::from)?;
    if let Some(delimiter) = delimiter {
        trie_config = trie_config.with_delimiter(delimiter);
    }
    if case_sensitive {
        trie_config = trie_config.with_case_sensitive(true);
    }

    let trie = KiloTrie::with_config(keys, trie_config);
    info!(
        items = trie.len(),
        nodes = trie.node_count(),
        delimiter = ?trie.delimiter(),
        "Index built"
    );

    let limit = limit.or(config.index.result_limit).unwrap_or(usize::MAX);
    for query in queries {
        let results = trie.search(query);
        println!("{query:?}: {} match(es)", results.len());
        for key in results.into_iter().take(limit) {
            println!("  {key}");
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    // Logging comes up with defaults when the configuration itself is broken
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(&ErrorContext::new(e, "config").with_details(format!(
                "config file: {:?}",
                args.config
            )));
            process::exit(1);
        }
    };

    match args.command {
        Command::Search {
            items,
            delimiter,
            case_sensitive,
            limit,
            queries,
        } => {
            config::init_global_config(config);
            let config = config::global_config();
            run_search(&config, items, delimiter, case_sensitive, limit, &queries)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KiloConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&default_config).map_err(KiloError::from)?;
            std::fs::write(&output, toml)
                .with_context(|| format!("writing {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
