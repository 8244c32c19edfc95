//! Analysis engine tying extraction, matching, scoring, recommendation, and
//! gap analysis together behind one pure interface
//!
//! Both front-ends (console rendering and JSON serialization) call this
//! engine rather than re-deriving any of the pipeline themselves.

use crate::config::Config;
use crate::error::Result;
use crate::input::manager::{InputManager, ResumeDocument};
use crate::output::report::{AnalysisReport, ReportMetadata};
use crate::processing::gap_analyzer::GapAnalyzer;
use crate::processing::recommender::{JobCatalog, JobRecommender};
use crate::processing::scorer::{resume_score, ScoreTier};
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::vocabulary::SkillVocabulary;
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

pub struct AnalysisEngine {
    input_manager: InputManager,
    matcher: SkillMatcher,
    recommender: JobRecommender,
    gap_analyzer: GapAnalyzer,
    ideal_skill_count: usize,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let vocabulary = SkillVocabulary::with_additional(&config.matching.additional_skills);
        info!("Analysis engine ready with {} skills", vocabulary.len());

        Ok(Self {
            input_manager: InputManager::new(),
            matcher: SkillMatcher::new(vocabulary)?,
            recommender: JobRecommender::new(JobCatalog::standard())
                .with_threshold(config.matching.match_threshold),
            gap_analyzer: GapAnalyzer::new().with_role_limit(config.matching.gap_role_limit),
            ideal_skill_count: config.scoring.ideal_skill_count,
        })
    }

    /// Extract text from a document and analyze it. Extraction failures
    /// propagate so the caller can surface a "could not read file" advisory.
    pub fn analyze_document(&self, document: &ResumeDocument) -> Result<AnalysisReport> {
        let text = self.input_manager.extract_text(document)?;
        Ok(self.analyze_text(&text))
    }

    /// Analyze already-extracted text. Pure aside from the clock reads in the
    /// report metadata: empty or unmatchable text yields an empty-skill
    /// report, never an error.
    pub fn analyze_text(&self, text: &str) -> AnalysisReport {
        let started = Instant::now();

        let found_skills = self.matcher.find_skills(text);
        debug!("Found {} skills in resume text", found_skills.len());

        let score = resume_score(found_skills.len(), self.ideal_skill_count);
        let job_matches = self.recommender.recommend(&found_skills);
        let skill_gaps = self.gap_analyzer.analyze(&job_matches);

        AnalysisReport {
            resume_score: score,
            score_tier: ScoreTier::from_score(score),
            found_skills,
            job_matches,
            skill_gaps,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scanner_version: env!("CARGO_PKG_VERSION").to_string(),
                skill_count: self.matcher.skill_count(),
                processing_time_ms: started.elapsed().as_millis() as u64,
            },
        }
    }
}
