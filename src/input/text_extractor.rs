//! Text extraction from supported document formats
//!
//! Extractors work on raw bytes so an uploaded document never has to be
//! staged on disk. Both produce plain text only, with page or paragraph
//! breaks rendered as newlines in document order.

use crate::error::{JobScannerError, Result};
use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            JobScannerError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })?;

        Ok(normalize_page_text(&text))
    }
}

/// Collapse the library's page-break padding so page texts end up
/// newline-joined, with pages that carried no text dropped entirely.
/// A single blank line is document structure and survives; runs of two
/// or more blank lines are page padding and collapse away.
fn normalize_page_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;
    for line in normalized.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if blank_run == 1 && !lines.is_empty() {
            lines.push("");
        }
        blank_run = 0;
        lines.push(line);
    }

    lines.join("\n")
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let package = read_docx(bytes).map_err(|e| {
            JobScannerError::DocxExtraction(format!("Failed to read Word document: {}", e))
        })?;

        let mut lines = Vec::new();
        for child in &package.document.children {
            collect_document_child_text(child, &mut lines);
        }

        Ok(lines.join("\n"))
    }
}

fn collect_document_child_text(child: &DocumentChild, lines: &mut Vec<String>) {
    match child {
        // An empty paragraph still contributes an empty line, matching the
        // paragraph structure of the source document.
        DocumentChild::Paragraph(paragraph) => {
            lines.push(paragraph_text(paragraph.as_ref()));
        }
        DocumentChild::Table(table) => collect_table_text(table.as_ref(), lines),
        _ => {}
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        append_paragraph_child_text(child, &mut buffer);
    }
    buffer
}

fn append_paragraph_child_text(child: &ParagraphChild, buffer: &mut String) {
    match child {
        ParagraphChild::Run(run) => append_run_text(run.as_ref(), buffer),
        ParagraphChild::Hyperlink(hyperlink) => {
            for inner in &hyperlink.children {
                append_paragraph_child_text(inner, buffer);
            }
        }
        _ => {}
    }
}

fn append_run_text(run: &Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buffer.push_str(&text.text),
            RunChild::Tab(_) => buffer.push('\t'),
            RunChild::Break(_) => buffer.push('\n'),
            _ => {}
        }
    }
}

fn collect_table_text(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        lines.push(paragraph_text(paragraph));
                    }
                    TableCellContent::Table(inner) => collect_table_text(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_rejects_garbage() {
        let result = PdfExtractor.extract(b"this is not a pdf");
        assert!(matches!(result, Err(JobScannerError::PdfExtraction(_))));
    }

    #[test]
    fn test_docx_extractor_rejects_garbage() {
        let result = DocxExtractor.extract(b"this is not a docx");
        assert!(matches!(result, Err(JobScannerError::DocxExtraction(_))));
    }

    #[test]
    fn test_normalize_page_text_drops_blank_pages() {
        let raw = "Page one line\n\n\n\nPage two line\r\n\r\n";
        assert_eq!(normalize_page_text(raw), "Page one line\nPage two line");
    }

    #[test]
    fn test_normalize_page_text_keeps_line_order() {
        let raw = "first\nsecond\nthird\n";
        assert_eq!(normalize_page_text(raw), "first\nsecond\nthird");
    }

    #[test]
    fn test_normalize_page_text_keeps_single_blank_lines() {
        // One blank line is paragraph structure; longer runs are padding
        let raw = "Summary\n\nExperience\n\n\n\nEducation";
        assert_eq!(normalize_page_text(raw), "Summary\n\nExperience\nEducation");
    }
}
