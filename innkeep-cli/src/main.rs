//! Main entry point for the innkeep CLI.
//!
//! Commands:
//! - `property add|list|remove`: manage the catalog
//! - `availability`: probe whether a stay could be booked
//! - `reservation book|list|cancel`: manage reservations

use clap::Parser;
use innkeep_cli::cli::{Cli, Command};
use innkeep_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = innkeep::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        config: cli.config,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        Command::Property(cmd) => cmd.execute(&global),
        Command::Availability(cmd) => cmd.execute(&global),
        Command::Reservation(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
