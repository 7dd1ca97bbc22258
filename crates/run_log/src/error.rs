//! Result and Error types for the crate.
use miette::Diagnostic;
use thiserror::Error;

/// Type alias for [`std::result::Result`] containing a run-log [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Enum describing the possible errors that can occur while reading a run log.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{name}'")]
    #[diagnostic(
        code(run_log::missing_column),
        help("Is this a data-logger CSV? It should carry a header row with wall_time and q_0..q_11.")
    )]
    MissingColumn { name: String },

    #[error("Row {row}: expected at least {expected} fields, found {found}")]
    #[diagnostic(code(run_log::short_row))]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: could not parse '{value}' in column '{column}' as a number")]
    #[diagnostic(code(run_log::bad_number))]
    BadNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Could not parse time '{value}'")]
    #[diagnostic(
        code(run_log::bad_time),
        help("Expected format: H:M:S or H:M:S.f, e.g. 22:54:36 or 22:54:36.3")
    )]
    BadTime { value: String },
}
