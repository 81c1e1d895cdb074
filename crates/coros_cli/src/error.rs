//! Error type for the CLI flows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("API error: {0}")]
    Api(#[from] coros_client::CorosError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid format '{0}': choose from gpx, fit, tcx, kml, csv")]
    InvalidFormat(String),

    #[error("invalid selection {chosen}: choose 1-{count}")]
    InvalidSelection { chosen: usize, count: usize },
}

pub type CliResult<T> = Result<T, CliError>;
