//! Structured analysis report shared by all front-ends

use crate::processing::gap_analyzer::SkillGapReport;
use crate::processing::recommender::JobMatch;
use crate::processing::scorer::ScoreTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one résumé analysis. Serialized as-is by the JSON front-end and
/// rendered by the console formatter; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Skills found in the résumé, in vocabulary order.
    pub found_skills: Vec<String>,

    /// Résumé quality score in [0, 100].
    pub resume_score: f32,

    /// Display tier for the score.
    pub score_tier: ScoreTier,

    /// Recommended roles, ranked descending by match ratio.
    pub job_matches: Vec<JobMatch>,

    /// Learning resources for missing skills, or the no-data sentinel.
    pub skill_gaps: SkillGapReport,

    /// Report generation info.
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scanner_version: String,
    /// Size of the vocabulary the matcher ran with.
    pub skill_count: usize,
    pub processing_time_ms: u64,
}

impl AnalysisReport {
    /// Whether any skills were identified. Callers present an explicit
    /// "no skills identified" outcome when this is false instead of a
    /// degenerate score and job report.
    pub fn has_skills(&self) -> bool {
        !self.found_skills.is_empty()
    }

    /// Whether any catalog role cleared the recommendation threshold.
    pub fn has_job_matches(&self) -> bool {
        !self.job_matches.is_empty()
    }

    /// Score-band advice shown alongside the report.
    pub fn improvement_tips(&self) -> &'static [&'static str] {
        if self.resume_score < 50.0 {
            &[
                "Add more technical skills to your resume",
                "Be specific about technologies you know (e.g. Python, Java, React)",
                "Include both hard and soft skills",
                "Mention projects where you used these skills",
            ]
        } else if self.resume_score < 80.0 {
            &[
                "Consider learning in-demand skills like Cloud Computing or Machine Learning",
                "Add certifications or online courses you've completed",
                "Highlight your achievements with metrics and numbers",
            ]
        } else {
            &[
                "Your resume is strong! Consider applying for senior positions",
                "Keep your skills updated with latest technologies",
                "Add leadership and project management experiences",
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_score(score: f32) -> AnalysisReport {
        AnalysisReport {
            found_skills: vec![],
            resume_score: score,
            score_tier: ScoreTier::from_score(score),
            job_matches: vec![],
            skill_gaps: SkillGapReport::NoData,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scanner_version: env!("CARGO_PKG_VERSION").to_string(),
                skill_count: 44,
                processing_time_ms: 0,
            },
        }
    }

    #[test]
    fn test_improvement_tips_follow_score_bands() {
        assert_eq!(report_with_score(40.0).improvement_tips().len(), 4);
        assert!(report_with_score(60.0).improvement_tips()[0].contains("in-demand"));
        assert!(report_with_score(90.0).improvement_tips()[0].contains("strong"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = report_with_score(0.0);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"resume_score\""));
        assert!(json.contains("\"needs_improvement\""));
    }
}
