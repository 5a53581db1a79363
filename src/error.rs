use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Selection `{0}` is not one of the listed file numbers.")]
    InvalidSelection(String),
    #[error("File `{0}` does not exist or could not be opened.")]
    MissingFile(String),
    #[error("Line {line} is not an integer: `{content}`.")]
    MalformedLine { line: usize, content: String },
    #[error("Unable to read from input. Reason: `{0}`.")]
    ReadError(io::Error),
    #[error("File `{0}` contains no numbers.")]
    EmptyData(String),
    #[error("Unable to write to output. Reason: `{0}`.")]
    Output(#[from] io::Error),
}

impl StatsError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StatsError::InvalidSelection(_) => {
                "Invalid choice.\nPlease enter a number between 1 and 3."
            }
            StatsError::MissingFile(_) | StatsError::EmptyData(_) => "No file",
            StatsError::MalformedLine { .. } | StatsError::ReadError(_) => "This is an error",
            StatsError::Output(_) => "Unable to write output",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
