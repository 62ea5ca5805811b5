use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input, enter a number! ({field}: {value:?})")]
    InvalidInput { field: &'static str, value: String },

    #[error("The {field} {value:?} is outside the supported range")]
    OutOfRange { field: &'static str, value: String },

    #[error("The balance overflows in year {year}")]
    Overflow { year: i64 },

    #[error("Nothing to save yet, press Calculate first")]
    NoSeriesAvailable,

    #[error("Cannot write to {}: {source}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl AppError {
    pub fn dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::DirectoryUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Short title for the notification window.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. }
            | AppError::OutOfRange { .. }
            | AppError::Overflow { .. } => "Error",
            _ => "Save",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
