use std::process::ExitCode;

use clap::Parser;

use flight_combinations::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
