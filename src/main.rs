//! Job scanner: resume skill scanner and job role recommendation tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{JobScannerError, Result};
use input::manager::ResumeDocument;
use log::{error, info};
use output::formatter::ReportGenerator;
use processing::analyzer::AnalysisEngine;
use processing::recommender::JobCatalog;
use processing::vocabulary::SkillVocabulary;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            content_type,
            output,
            save,
            detailed,
        } => {
            info!("Starting resume analysis");

            // Extension validation only applies when no content type was
            // declared; an upload collaborator's MIME type wins.
            if content_type.is_none() {
                cli::validate_file_extension(&resume, &["pdf", "docx"])
                    .map_err(|e| JobScannerError::InvalidInput(format!("Resume file: {}", e)))?;
            }

            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(JobScannerError::InvalidInput)?
                }
                None => config.output.format,
            };

            let document = match content_type {
                Some(mime) => {
                    let bytes = tokio::fs::read(&resume).await?;
                    ResumeDocument::from_mime(bytes, &mime)
                }
                None => ResumeDocument::from_path(&resume).await?,
            };

            let engine = AnalysisEngine::new(&config)?;
            let report = match engine.analyze_document(&document) {
                Ok(report) => report,
                Err(e) if e.is_extraction_error() => {
                    // Recovered locally: extraction trouble becomes advice,
                    // not a stack trace.
                    error!("Extraction failed: {}", e);
                    println!("Could not read the resume file. Please try with a different file.");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let generator =
                ReportGenerator::new(config.output.color_output, detailed || config.output.detailed);
            let rendered = generator.format(&report, output_format)?;

            if let Some(path) = save {
                save_report(&rendered, &path).await?;
                println!("Report saved to {}", path.display());
            } else {
                println!("{}", rendered);
            }
        }

        Commands::Skills => {
            let vocabulary = SkillVocabulary::with_additional(&config.matching.additional_skills);
            println!("Recognized skills ({} total):\n", vocabulary.len());
            for skill in vocabulary.skills() {
                println!("  {}", skill);
            }
        }

        Commands::Jobs => {
            let catalog = JobCatalog::standard();
            println!("Job role catalog ({} roles):\n", catalog.len());
            for role in catalog.roles() {
                println!("{}", role.name);
                println!("  {}", role.description);
                println!("  Required skills: {}\n", role.required_skills.join(", "));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Ideal skill count: {}", config.scoring.ideal_skill_count);
                println!("Match threshold: {}", config.matching.match_threshold);
                println!("Gap analysis role limit: {}", config.matching.gap_role_limit);
                println!(
                    "Additional skills: {}",
                    if config.matching.additional_skills.is_empty() {
                        "none".to_string()
                    } else {
                        config.matching.additional_skills.join(", ")
                    }
                );
                println!("Output format: {:?}", config.output.format);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                info!("Resetting configuration to defaults");
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset successfully");
            }
        },
    }

    Ok(())
}

async fn save_report(rendered: &str, path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, rendered).await?;
    Ok(())
}
