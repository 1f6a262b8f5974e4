//! Library exports for innkeep-cli.
//!
//! The binary in `main.rs` is a thin wrapper; exposing the modules here
//! lets unit tests and other tools reuse the argument definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
