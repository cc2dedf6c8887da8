//! Cortical CLI - Semantic Folding REST client
//!
//! Command-line interface for fetching fingerprints, similar terms and
//! comparisons through the on-disk cache.

use clap::{Parser, Subcommand};
use cortical::{ClientConfig, CorticalClient, Result, Retina};
use log::error;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cortical")]
#[command(version)]
#[command(about = "Cached client for a Semantic Folding REST service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API key (defaults to $REST_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// REST base URL
    #[arg(long, global = true, default_value = cortical::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Retina name
    #[arg(short, long, global = true, default_value = cortical::config::DEFAULT_RETINA)]
    retina: String,

    /// Cache directory
    #[arg(long, global = true, default_value = cortical::config::DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the fingerprint info for a term
    Bitmap {
        /// Term to look up
        term: String,
    },

    /// Print a term's fingerprint as a dense 0/1 string
    Sdr {
        /// Term to look up
        term: String,
    },

    /// List terms similar to a bitmap
    Similar {
        /// Active positions, comma separated
        #[arg(value_delimiter = ',', required = true)]
        positions: Vec<u32>,
    },

    /// Compare two bitmaps
    Compare {
        /// Active positions of the first bitmap, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        left: Vec<u32>,

        /// Active positions of the second bitmap, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        right: Vec<u32>,
    },

    /// Tokenize text into sentences of terms
    Tokenize {
        /// Text to tokenize
        text: String,
    },

    /// Show retina geometry (no network access)
    Geometry {
        /// Retina name (defaults to all known retinas)
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = ClientConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        retina: cli.retina,
        cache_dir: cli.cache_dir,
        ..Default::default()
    };

    if let Err(e) = run(config, cli.command) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: ClientConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Bitmap { term } => print_json(&CorticalClient::new(config)?.get_bitmap(&term)?),
        Commands::Sdr { term } => {
            println!("{}", CorticalClient::new(config)?.get_sdr(&term)?);
            Ok(())
        }
        Commands::Similar { positions } => {
            for similar in CorticalClient::new(config)?.bitmap_to_terms(&positions)? {
                println!("  {:>8.4}  {}", similar.score, similar.term);
            }
            Ok(())
        }
        Commands::Compare { left, right } => {
            print_json(&CorticalClient::new(config)?.compare(&left, &right)?)
        }
        Commands::Tokenize { text } => print_json(&CorticalClient::new(config)?.tokenize(&text)?),
        // no client, so no API key is needed
        Commands::Geometry { name } => show_geometry(name),
    }
}

fn show_geometry(name: Option<String>) -> Result<()> {
    let retinas = match name {
        Some(name) => vec![name.parse::<Retina>()?],
        None => Retina::ALL.to_vec(),
    };

    for r in retinas {
        let dims = r.dimensions();
        println!("Retina: {}", r);
        println!("  Grid: {} x {}", dims.width, dims.height);
        println!("  Total bits: {}", dims.total_bits());
        println!("  Target active bits: {}", dims.target_bits());
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
