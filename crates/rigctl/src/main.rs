//! rigctl binary entry point.

use clap::Parser;
use rigctl::cli::{Cli, Commands};
use rigctl::{commands, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so --json output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Check { ref parts, json } => {
            commands::check(parts, json, cli.heuristics.as_deref()).map(|compatible| {
                if compatible {
                    errors::EXIT_SUCCESS
                } else {
                    errors::EXIT_INCOMPATIBLE
                }
            })
        }
        Commands::Budget { ref parts } => commands::budget(parts, cli.heuristics.as_deref())
            .map(|()| errors::EXIT_SUCCESS),
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("rigctl: {e:#}");
            std::process::exit(errors::EXIT_GENERAL_ERROR);
        }
    }
}
