//! Input manager for routing documents to the right extractor

use crate::error::{JobScannerError, Result};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::{debug, info};
use std::path::Path;
use tokio::fs;

/// An uploaded résumé: raw bytes plus the declared format.
/// Lives only for the duration of one analysis request.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl ResumeDocument {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self { bytes, format }
    }

    /// Build a document from bytes and the content type an upload handler
    /// declared. An unrecognized content type falls back to magic-byte
    /// sniffing before giving up.
    pub fn from_mime(bytes: Vec<u8>, mime: &str) -> Self {
        let mut format = DocumentFormat::from_mime(mime);
        if format == DocumentFormat::Unknown {
            debug!("Unrecognized content type '{}', sniffing bytes", mime);
            format = DocumentFormat::sniff(&bytes);
        }
        Self { bytes, format }
    }

    /// Read a document from disk, detecting the format from the extension
    /// with magic-byte sniffing as fallback.
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JobScannerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;

        let mut format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(DocumentFormat::from_extension)
            .unwrap_or(DocumentFormat::Unknown);

        if format == DocumentFormat::Unknown {
            format = DocumentFormat::sniff(&bytes);
        }

        Ok(Self { bytes, format })
    }
}

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract plain text from a document, routing on its format.
    pub fn extract_text(&self, document: &ResumeDocument) -> Result<String> {
        match document.format {
            DocumentFormat::Pdf => {
                info!("Extracting text from PDF ({} bytes)", document.bytes.len());
                PdfExtractor.extract(&document.bytes)
            }
            DocumentFormat::Docx => {
                info!(
                    "Extracting text from Word document ({} bytes)",
                    document.bytes.len()
                );
                DocxExtractor.extract(&document.bytes)
            }
            DocumentFormat::Unknown => Err(JobScannerError::UnsupportedFormat(
                "unsupported format".to_string(),
            )),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::{DOCX_MIME, PDF_MIME};

    #[test]
    fn test_unknown_format_is_rejected() {
        let document = ResumeDocument::new(b"plain text resume".to_vec(), DocumentFormat::Unknown);
        let result = InputManager::new().extract_text(&document);
        assert!(matches!(
            result,
            Err(JobScannerError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_mime_trusts_declared_type() {
        let document = ResumeDocument::from_mime(b"%PDF-1.4".to_vec(), PDF_MIME);
        assert_eq!(document.format, DocumentFormat::Pdf);

        let document = ResumeDocument::from_mime(b"PK\x03\x04".to_vec(), DOCX_MIME);
        assert_eq!(document.format, DocumentFormat::Docx);
    }

    #[test]
    fn test_from_mime_sniffs_on_unknown_type() {
        let document = ResumeDocument::from_mime(b"%PDF-1.4".to_vec(), "application/octet-stream");
        assert_eq!(document.format, DocumentFormat::Pdf);

        let document = ResumeDocument::from_mime(b"random bytes".to_vec(), "");
        assert_eq!(document.format, DocumentFormat::Unknown);
    }
}
