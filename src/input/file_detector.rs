//! Document format detection

/// MIME type sent by upload collaborators for PDF documents.
pub const PDF_MIME: &str = "application/pdf";

/// MIME type sent by upload collaborators for Word documents.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unknown,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            _ => DocumentFormat::Unknown,
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        match mime.trim() {
            PDF_MIME => DocumentFormat::Pdf,
            DOCX_MIME => DocumentFormat::Docx,
            _ => DocumentFormat::Unknown,
        }
    }

    /// Magic-byte fallback for uploads with a missing or wrong content type.
    /// DOCX is a zip container, so it starts with the `PK` signature.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(b"%PDF-") {
            DocumentFormat::Pdf
        } else if bytes.starts_with(b"PK") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::Unknown
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::Docx => write!(f, "DOCX"),
            DocumentFormat::Unknown => write!(f, "unknown"),
        }
    }
}
