mod batch;
mod config;

use anyhow::{bail, Context, Result};
use batch::{run_batch, write_slug, BatchOptions};
use clap::{Parser, Subcommand};
use config::Config;
use log::{debug, info};
use std::io::{self, BufWriter, Write};
use urlize_core::{is_slug, slugify_str};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(
    name = "urlize",
    about = "search engine friendly slugs",
    version = VERSION,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slug of each argument
    Slug {
        /// Text to slugify
        #[arg(required = true)]
        text: Vec<String>,

        /// Print {"input":...,"slug":...} records
        #[arg(long)]
        json: bool,
    },

    /// Slugify stdin line by line
    Batch {
        /// Input line that stands for an absent value (default: \N)
        #[arg(long)]
        null_marker: Option<String>,

        /// Print {"input":...,"slug":...} records
        #[arg(long)]
        json: bool,
    },

    /// Exit non-zero unless every argument is already a slug
    Check {
        /// Candidate slugs
        #[arg(required = true)]
        slugs: Vec<String>,
    },

    /// Print version
    Version,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Version) => {
            println!("urlize {}", VERSION);
            Ok(())
        }
        Some(Commands::Slug { text, json }) => cmd_slug(&text, json),
        Some(Commands::Batch { null_marker, json }) => cmd_batch(null_marker.as_deref(), json),
        Some(Commands::Check { slugs }) => cmd_check(&slugs),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config() -> Result<Config> {
    let config = Config::load()?;
    debug!("loaded config: {config:?}");
    Ok(config)
}

fn cmd_slug(texts: &[String], json: bool) -> Result<()> {
    let json = json || load_config()?.json;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for text in texts {
        let slug = slugify_str(text).with_context(|| format!("failed to slugify {text:?}"))?;
        write_slug(&mut out, Some(text.as_bytes()), &slug, json)?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_batch(null_marker: Option<&str>, json: bool) -> Result<()> {
    let config = load_config()?;
    let opts = BatchOptions {
        null_marker: null_marker.unwrap_or(&config.null_marker),
        json: json || config.json,
    };
    let summary = run_batch(io::stdin().lock(), BufWriter::new(io::stdout().lock()), &opts)?;
    info!(
        "slugified {} lines ({} null, {} empty)",
        summary.lines, summary.nulls, summary.empty
    );
    Ok(())
}

fn cmd_check(candidates: &[String]) -> Result<()> {
    let mut bad = 0;
    for candidate in candidates {
        if is_slug(candidate) {
            continue;
        }
        bad += 1;
        let suggestion = slugify_str(candidate)?;
        eprintln!("not a slug: {candidate:?} (try \"{suggestion}\")");
    }
    if bad > 0 {
        bail!("{} of {} arguments are not slugs", bad, candidates.len());
    }
    Ok(())
}
