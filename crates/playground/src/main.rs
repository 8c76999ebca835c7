use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use jiff::Zoned;
use splice_playground::{Error, PlaygroundConfig, clock, commands};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Run the function composition examples from the command line.
#[derive(Debug, Parser)]
#[command(name = "splice-playground", version, about)]
struct Cli {
    /// Log the value produced by every pipeline stage.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split comma-separated text into rows and keep those of a given width.
    Csv {
        /// Number of fields a row must have to be kept.
        #[arg(short, long, default_value_t = 3)]
        width: usize,

        /// File to read; standard input when omitted.
        file: Option<PathBuf>,
    },

    /// Resolve a stock symbol to its document.
    Quote {
        /// The symbol to look up, such as AAPL.
        symbol: String,

        /// TOML config with `symbols` and `pages` tables.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check whether the market is open at a given time.
    Hours {
        /// Civil date-time such as 2024-03-04T10:30; now when omitted.
        #[arg(long)]
        at: Option<String>,

        /// TOML config with a `trading_hours` table.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {err}");
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Csv { width, file } => run_csv(width, file.as_deref()),
        Command::Quote { symbol, config } => {
            let config = load_config(config.as_deref())?;
            run_quote(&symbol, &config)
        }
        Command::Hours { at, config } => {
            let config = load_config(config.as_deref())?;
            run_hours(at.as_deref(), &config)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PlaygroundConfig, Error> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            PlaygroundConfig::load(path)
        }
        None => Ok(PlaygroundConfig::default()),
    }
}

fn run_csv(width: usize, file: Option<&Path>) -> Result<(), Error> {
    let text = match file {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => io::read_to_string(io::stdin())?,
    };

    let rows = commands::csv_rows(&text, width);

    if rows.is_empty() {
        warn!(width, "no rows had the requested width");
    }
    for row in rows {
        println!("{}", row.join(","));
    }
    Ok(())
}

fn run_quote(symbol: &str, config: &PlaygroundConfig) -> Result<(), Error> {
    let document = commands::quote(symbol, config)?;
    println!("{document}");
    Ok(())
}

fn run_hours(at: Option<&str>, config: &PlaygroundConfig) -> Result<(), Error> {
    let at = match at {
        Some(input) => clock::parse_civil(input)?,
        None => Zoned::now().datetime(),
    };
    let hours = config.trading_hours;

    let state = if commands::market_open(at, hours) { "open" } else { "closed" };
    println!(
        "market is {state} at {at} (trading hours {:02}:00-{:02}:00)",
        hours.open(),
        hours.close()
    );
    Ok(())
}
