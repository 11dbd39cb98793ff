//! Command-line front end.
//!
//! Wires the loader, planner and encoder together and maps failures to
//! process exit codes:
//!
//! - 1: input is an interactive terminal
//! - 2: the input header has the wrong shape
//! - 3: anything else

use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::io::{EncodeError, LoadError, OutputFormat, load_flights, write_itineraries};
use crate::planner::{ConfigError, Planner, SearchConfig, SearchResult};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-combinations",
    version,
    about = "List every itinerary that can be built from a set of flights"
)]
pub struct Args {
    /// CSV file of flights; reads standard input when omitted
    pub input: Option<PathBuf>,

    /// Write results to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Input has no header row; fields are in the canonical order
    #[arg(long)]
    pub no_header: bool,

    /// Shortest allowed layover, in minutes
    #[arg(long, default_value_t = SearchConfig::default().min_connection_mins)]
    pub min_connection_mins: i64,

    /// Longest allowed layover, in minutes
    #[arg(long, default_value_t = SearchConfig::default().max_connection_mins)]
    pub max_connection_mins: i64,

    /// Log search progress to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Returns the search configuration described by these arguments.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.min_connection_mins, self.max_connection_mins)
    }
}

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Standard input is a terminal
    #[error("cannot read flights in interactive mode; pipe a CSV file or pass a path")]
    InteractiveInput,

    /// Input could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Search options are inconsistent
    #[error("invalid search options: {0}")]
    Config(#[from] ConfigError),

    /// Results could not be written
    #[error("failed to write results: {0}")]
    Encode(#[from] EncodeError),

    /// Output file could not be created
    #[error("cannot create {}: {source}", .path.display())]
    Output { path: PathBuf, source: io::Error },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InteractiveInput => 1,
            CliError::Load(e) if e.is_header_error() => 2,
            _ => 3,
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise warnings only, or debug output
/// with `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load flights from `input`, search, and write results to `output`.
///
/// Nothing is written unless loading and searching both succeed.
pub fn execute<R: Read, W: Write>(
    args: &Args,
    input: R,
    output: W,
) -> Result<SearchResult, CliError> {
    let config = args.search_config();
    config.validate()?;

    let flights = load_flights(input, !args.no_header)?;
    let flight_count = flights.len();

    let result = Planner::new(&config).search_flights(flights);
    info!(
        flights = flight_count,
        itineraries = result.itineraries.len(),
        levels = result.levels,
        pairs_examined = result.pairs_examined,
        "Search complete"
    );

    write_itineraries(output, &result.itineraries, args.format)?;
    Ok(result)
}

/// Run with the streams named by `args`.
pub fn run(args: &Args) -> Result<(), CliError> {
    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(LoadError::from)?)),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::InteractiveInput);
            }
            Box::new(stdin.lock())
        }
    };

    match &args.output {
        Some(path) => {
            // Load and search before touching the file, so failures leave no output
            let mut buffer = Vec::new();
            execute(args, input, &mut buffer)?;
            let file = File::create(path).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(&buffer)
                .and_then(|()| writer.flush())
                .map_err(EncodeError::from)?;
        }
        None => {
            execute(args, input, io::stdout().lock())?;
        }
    }

    Ok(())
}
