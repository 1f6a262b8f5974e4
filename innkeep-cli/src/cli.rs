//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{AvailabilityCommand, PropertyCommand, ReservationCommand};

/// Command-line tool for booking stays at rental properties.
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Manage rental properties and their reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "INNKEEP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Additional configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Override the busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "INNKEEP_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add, list and remove properties
    Property(PropertyCommand),

    /// Check whether a stay could be booked
    Availability(AvailabilityCommand),

    /// Book, list and cancel reservations
    Reservation(ReservationCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{PropertyAction, ReservationAction};
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_book() {
        let cli = Cli::try_parse_from([
            "innkeep",
            "--data-dir",
            "/tmp/x",
            "reservation",
            "book",
            "--property",
            "3",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--start",
            "2025-09-01",
            "--end",
            "2025-09-04",
            "--guests",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        match cli.command {
            Command::Reservation(cmd) => match cmd.action {
                ReservationAction::Book(book) => {
                    assert_eq!(book.property, 3);
                    assert_eq!(book.guests, 2);
                    assert_eq!(book.start.to_string(), "2025-09-01");
                }
                _ => panic!("expected book"),
            },
            _ => panic!("expected reservation"),
        }
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from([
            "innkeep",
            "availability",
            "--property",
            "1",
            "--start",
            "2025-13-01",
            "--end",
            "2025-09-04",
            "--guests",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["innkeep", "property", "list", "--quiet", "--format", "json"])
                .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Command::Property(cmd) => assert!(matches!(cmd.action, PropertyAction::List(_))),
            _ => panic!("expected property"),
        }
    }
}
