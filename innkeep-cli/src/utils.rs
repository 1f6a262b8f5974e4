//! Utility functions for CLI operations.
//!
//! Configuration loading, database opening and the shared output
//! formatters used by the listing commands.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::error::CliError;
use innkeep::config::OutputFormat;
use innkeep::database::{database_path, resolve_data_dir};
use innkeep::{Config, ConfigBuilder, Database, DatabaseConfig};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Precedence, highest first: environment variables, the `--config` file,
/// `<data_dir>/config.yaml`, built-in defaults. Global flags are applied
/// on top by the callers that consume them.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }
    if let Some(ref file) = global.config {
        builder = builder.with_config_file(file);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options.
pub fn resolve_database_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let data_dir =
        resolve_data_dir(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))?;
    Ok(database_path(&data_dir))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDatabase` if the database doesn't exist and auto-init is
/// disabled by flag or configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global)?;

    let autoinit = !global.disable_autoinit && config.autoinit_enabled();
    if !db_path.exists() && !autoinit {
        return Err(CliError::NoDatabase);
    }

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |secs| Duration::from_secs(secs.into()));

    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(busy_timeout)
        .with_auto_create(autoinit);

    Database::open(db_config).map_err(CliError::from)
}

/// Parse a `--format` value for listings.
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Rows that can be rendered by [`write_rows`].
pub trait Tabular: Serialize {
    /// Column names, in order.
    const COLUMNS: &'static [&'static str];

    /// Cell values in column order, as plain text.
    fn cells(&self) -> Vec<String>;
}

/// Write `rows` to stdout in `format`.
pub fn write_rows<T: Tabular>(rows: &[T], format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    render_rows(&mut handle, rows, format)
}

/// Write `rows` to `out` in `format`.
pub fn render_rows<W: Write, T: Tabular>(
    out: &mut W,
    rows: &[T],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => render_table(out, rows),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => render_delimited(out, rows, b','),
        OutputFormat::Tsv => render_delimited(out, rows, b'\t'),
    }
}

/// Human-readable table with padded columns.
fn render_table<W: Write, T: Tabular>(out: &mut W, rows: &[T]) -> Result<(), CliError> {
    let header: Vec<String> = T::COLUMNS.iter().map(|c| c.to_uppercase()).collect();
    let body: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in std::iter::once(&header).chain(&body) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

fn render_delimited<W: Write, T: Tabular>(
    out: &mut W,
    rows: &[T],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    impl Tabular for Row {
        const COLUMNS: &'static [&'static str] = &["id", "name"];

        fn cells(&self) -> Vec<String> {
            vec![self.id.to_string(), self.name.to_string()]
        }
    }

    fn render(format: OutputFormat) -> String {
        let rows = [Row { id: 1, name: "Loft" }, Row { id: 22, name: "Casa, Batel" }];
        let mut out = Vec::new();
        render_rows(&mut out, &rows, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table() {
        assert_eq!(
            render(OutputFormat::Table),
            "ID  NAME\n1   Loft\n22  Casa, Batel\n"
        );
    }

    #[test]
    fn test_csv_quotes_commas() {
        assert_eq!(
            render(OutputFormat::Csv),
            "id,name\n1,Loft\n22,\"Casa, Batel\"\n"
        );
    }

    #[test]
    fn test_tsv() {
        assert_eq!(render(OutputFormat::Tsv), "id\tname\n1\tLoft\n22\tCasa, Batel\n");
    }

    #[test]
    fn test_json() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value[1]["name"], "Casa, Batel");
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("CSV").unwrap(), OutputFormat::Csv);
        assert!(parse_output_format("yaml").is_err());
    }
}
