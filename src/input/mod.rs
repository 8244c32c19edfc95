//! Input processing module
//! Handles format detection, text extraction, and document management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
