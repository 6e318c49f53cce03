//! E20 simulator CLI.
//!
//! This binary runs one machine-code image to completion. It performs:
//! 1. **No-cache run:** Executes the image and prints the final machine state.
//! 2. **Cached run:** Prints the cache configuration, then one log line per cache
//!    access as the program executes.
//! 3. **Statistics:** With `--stats`, writes run statistics as JSON to stderr.
//!
//! Usage errors, `-h/--help`, and every load or configuration error exit with code 1.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use e20sim_core::config::{CacheHierarchyConfig, Config};
use e20sim_core::core::units::cache::event::{CacheEvent, WriterSink};
use e20sim_core::sim::{Simulator, report};

const USAGE: &str = "\
usage: e20sim [-h] [--cache CACHE] [--config FILE] [--stats] filename

Simulate E20 machine

positional arguments:
  filename       The file containing machine code, typically with .bin suffix

optional arguments:
  -h, --help     show this help message and exit
  --cache CACHE  Cache configuration: size,associativity,blocksize (for one
                 cache) or
                 size,associativity,blocksize,size,associativity,blocksize
                 (for two caches)
  --config FILE  JSON configuration file; --cache overrides its cache section
  --stats        Print run statistics as JSON to stderr";

#[derive(Parser, Debug)]
#[command(
    name = "e20sim",
    about = "Simulate E20 machine",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Show usage and exit.
    #[arg(short, long)]
    help: bool,

    /// Cache configuration: `size,assoc,blocksize` or two such triples.
    #[arg(long, value_name = "CACHE")]
    cache: Option<String>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print run statistics as JSON to stderr.
    #[arg(long)]
    stats: bool,

    /// Machine-code image.
    filename: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => return usage(),
    };
    let Some(filename) = cli.filename.clone() else {
        return usage();
    };
    if cli.help {
        return usage();
    }

    match run(&cli, filename) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn usage() -> ExitCode {
    eprintln!("{USAGE}");
    ExitCode::FAILURE
}

/// Resolves the configuration: the `--config` file (or the default), with
/// `--cache` replacing its cache section.
fn resolve_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    if let Some(arg) = &cli.cache {
        config.cache = CacheHierarchyConfig::from_arg(arg).map_err(|e| e.to_string())?;
    }
    debug!(?config, "resolved configuration");
    Ok(config)
}

/// Loads the image, runs it, and prints the reports.
fn run(cli: &Cli, filename: PathBuf) -> Result<(), String> {
    let config = resolve_config(cli)?;
    let mut sim = Simulator::from_file(&config, &filename).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if sim.hierarchy.is_empty() {
        let _ = sim.run(&mut Vec::<CacheEvent>::new());
        out.write_all(report::final_state(&sim.state).as_bytes())
            .map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;
    } else {
        out.write_all(report::cache_config(sim.hierarchy.levels()).as_bytes())
            .map_err(|e| e.to_string())?;
        let mut sink = WriterSink::new(out);
        let _ = sim.run(&mut sink);
        let _ = sink.finish().map_err(|e| e.to_string())?;
    }

    if cli.stats {
        let json = sim.stats.to_json().map_err(|e| e.to_string())?;
        eprintln!("{json}");
    }
    Ok(())
}
