//! Error handling for the job scanner application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobScannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Word document extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobScannerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for JobScannerError {
    fn from(err: anyhow::Error) -> Self {
        JobScannerError::InvalidInput(err.to_string())
    }
}

impl JobScannerError {
    /// True for failures that mean the uploaded document could not be read,
    /// as opposed to a bad request or a broken setup.
    pub fn is_extraction_error(&self) -> bool {
        matches!(
            self,
            JobScannerError::PdfExtraction(_)
                | JobScannerError::DocxExtraction(_)
                | JobScannerError::UnsupportedFormat(_)
        )
    }
}
