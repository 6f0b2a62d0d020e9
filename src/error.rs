use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiolosError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "xlsx")]
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Missing column '{column}' for the {format} layout")]
    MissingColumn { column: String, format: String },

    #[error("Row {row}: cannot read amount '{value}' in column '{column}'")]
    InvalidAmount {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Could not detect the file layout; pass --format (diakofti, athens, ilisia)")]
    UndetectedFormat,

    #[error("No header row found in {0}")]
    EmptyFile(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AiolosError>;
