//! Configuration management for the job scanner

use crate::error::{JobScannerError, Result};
use crate::processing::gap_analyzer::GAP_ROLE_LIMIT;
use crate::processing::recommender::MATCH_THRESHOLD;
use crate::processing::scorer::IDEAL_SKILL_COUNT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Extra skills matched on top of the built-in vocabulary.
    pub additional_skills: Vec<String>,
    /// Minimum match ratio a role must strictly exceed to be recommended.
    pub match_threshold: f32,
    /// Number of top-ranked roles feeding the gap analysis.
    pub gap_role_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Skill count that earns a full résumé score.
    pub ideal_skill_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig {
                additional_skills: Vec::new(),
                match_threshold: MATCH_THRESHOLD,
                gap_role_limit: GAP_ROLE_LIMIT,
            },
            scoring: ScoringConfig {
                ideal_skill_count: IDEAL_SKILL_COUNT,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                JobScannerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobScannerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-scanner")
            .join("config.toml")
    }
}
