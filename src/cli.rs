//! CLI interface for the job scanner

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-scanner")]
#[command(about = "Resume skill scanner and job role recommendation tool")]
#[command(
    long_about = "Extract skills from a resume (PDF or DOCX), score it, and recommend matching job roles with a skill gap learning plan"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume and recommend matching job roles
    Analyze {
        /// Path to resume file (PDF, DOCX)
        resume: PathBuf,

        /// Declared content type, e.g. from an upload handler
        /// (overrides extension-based detection)
        #[arg(long)]
        content_type: Option<String>,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show detailed breakdown
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the recognized skill vocabulary
    Skills,

    /// List the job role catalog
    Jobs,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "docx"];
        assert!(validate_file_extension(Path::new("resume.pdf"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume.DOCX"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume.txt"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("resume"), &allowed).is_err());
    }
}
