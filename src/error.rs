use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorselError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No CSV files found in {0}")]
    NoCsvFiles(String),

    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: &'static str },

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, MorselError>;
