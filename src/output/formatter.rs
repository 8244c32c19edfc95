//! Output formatters for the analysis report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::gap_analyzer::{title_case, SkillGapReport};
use crate::processing::recommender::MatchTier;
use crate::processing::scorer::ScoreTier;
use colored::Colorize;

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored tiers and grouped skills
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for the request/response front-end variant
pub struct JsonFormatter {
    pretty: bool,
}

/// Coordinates formatters behind a single format dispatch
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

const TECH_SKILLS: &[&str] = &[
    "python", "java", "javascript", "html", "css", "sql", "react", "node.js", "android", "swift",
];
const DATA_SKILLS: &[&str] = &["machine learning", "data analysis", "excel", "statistics"];
const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "analytical skills",
];

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn score_line(&self, report: &AnalysisReport) -> String {
        let text = format!("{:.0}/100", report.resume_score);
        if !self.use_colors {
            return text;
        }
        match report.score_tier {
            ScoreTier::Excellent => text.green().bold().to_string(),
            ScoreTier::Good => text.yellow().bold().to_string(),
            ScoreTier::NeedsImprovement => text.red().bold().to_string(),
        }
    }

    fn tier_label(&self, tier: MatchTier) -> String {
        let text = format!("{} match", tier);
        if !self.use_colors {
            return text;
        }
        match tier {
            MatchTier::High => text.green().bold().to_string(),
            MatchTier::Medium => text.yellow().bold().to_string(),
            MatchTier::Low => text.red().to_string(),
        }
    }

    fn score_message(tier: ScoreTier) -> &'static str {
        match tier {
            ScoreTier::Excellent => "Excellent! Your resume has strong skills.",
            ScoreTier::Good => "Good! But can be improved with more skills.",
            ScoreTier::NeedsImprovement => "Needs improvement. Add more technical skills.",
        }
    }

    fn skill_list(skills: &[&String]) -> String {
        skills
            .iter()
            .map(|s| title_case(s))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_grouped_skills(&self, out: &mut String, report: &AnalysisReport) {
        let tech: Vec<&String> = report
            .found_skills
            .iter()
            .filter(|s| TECH_SKILLS.contains(&s.as_str()))
            .collect();
        let data: Vec<&String> = report
            .found_skills
            .iter()
            .filter(|s| DATA_SKILLS.contains(&s.as_str()))
            .collect();
        let soft: Vec<&String> = report
            .found_skills
            .iter()
            .filter(|s| SOFT_SKILLS.contains(&s.as_str()))
            .collect();
        let other: Vec<&String> = report
            .found_skills
            .iter()
            .filter(|s| {
                !TECH_SKILLS.contains(&s.as_str())
                    && !DATA_SKILLS.contains(&s.as_str())
                    && !SOFT_SKILLS.contains(&s.as_str())
            })
            .collect();

        for (label, group) in [
            ("Technical Skills", tech),
            ("Data Skills", data),
            ("Soft Skills", soft),
            ("Other Skills", other),
        ] {
            if !group.is_empty() {
                out.push_str(&format!("  {}: {}\n", label, Self::skill_list(&group)));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        if !report.has_skills() {
            out.push_str(
                "No skills identified. Please make sure your resume contains technical skills.\n",
            );
            return Ok(out);
        }

        out.push_str(&format!("Resume Score: {}\n", self.score_line(report)));
        out.push_str(&format!("{}\n", Self::score_message(report.score_tier)));
        out.push_str(&format!(
            "Based on {} skills found in your resume\n",
            report.found_skills.len()
        ));

        out.push_str("\nSkills Identified:\n");
        self.write_grouped_skills(&mut out, report);

        out.push_str("\nRecommended Jobs:\n");
        if report.has_job_matches() {
            for job in &report.job_matches {
                out.push_str(&format!(
                    "  {} ({:.0}% - {})\n",
                    job.role,
                    job.match_ratio * 100.0,
                    self.tier_label(job.tier)
                ));
                if self.detailed {
                    out.push_str(&format!("    {}\n", job.description));
                }
                let matched: Vec<&String> = job.matched_skills.iter().collect();
                out.push_str(&format!(
                    "    Matching skills: {}\n",
                    Self::skill_list(&matched)
                ));
                if job.missing_skills.is_empty() {
                    out.push_str("    Skills to learn: none, you have all required skills\n");
                } else {
                    let missing: Vec<&String> = job.missing_skills.iter().collect();
                    out.push_str(&format!(
                        "    Skills to learn: {}\n",
                        Self::skill_list(&missing)
                    ));
                }
            }
        } else {
            out.push_str(
                "  No strong job matches found. Consider adding more skills to your resume.\n",
            );
        }

        out.push_str("\nSkill Gap Analysis & Learning Plan:\n");
        match &report.skill_gaps {
            SkillGapReport::NoData => {
                out.push_str("  Not enough data for skill gap analysis\n");
            }
            SkillGapReport::Resources(resources) if resources.is_empty() => {
                out.push_str("  No skill gaps in your top job matches\n");
            }
            SkillGapReport::Resources(resources) => {
                for (skill, entries) in resources {
                    out.push_str(&format!("  Learn {}:\n", title_case(skill)));
                    for (i, resource) in entries.iter().enumerate() {
                        out.push_str(&format!("    {}. {}\n", i + 1, resource));
                    }
                }
            }
        }

        out.push_str("\nImprovement Tips:\n");
        for tip in report.improvement_tips() {
            out.push_str(&format!("  - {}\n", tip));
        }

        if self.detailed {
            out.push_str(&format!(
                "\nAnalyzed against {} known skills in {}ms\n",
                report.metadata.skill_count, report.metadata.processing_time_ms
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn format(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::recommender::JobMatch;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            found_skills: vec!["python".to_string(), "sql".to_string(), "excel".to_string()],
            resume_score: 12.0,
            score_tier: ScoreTier::NeedsImprovement,
            job_matches: vec![JobMatch {
                role: "Data Analyst".to_string(),
                match_ratio: 0.6,
                tier: MatchTier::Medium,
                matched_skills: vec![
                    "excel".to_string(),
                    "sql".to_string(),
                    "python".to_string(),
                ],
                missing_skills: vec!["data analysis".to_string(), "statistics".to_string()],
                description: "Analyzes data to help businesses make informed decisions."
                    .to_string(),
            }],
            skill_gaps: SkillGapReport::Resources(BTreeMap::from([(
                "statistics".to_string(),
                vec![
                    "YouTube: Statistics Tutorial".to_string(),
                    "Udemy: Statistics Course".to_string(),
                    "Practice on HackerRank/LeetCode".to_string(),
                ],
            )])),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scanner_version: env!("CARGO_PKG_VERSION").to_string(),
                skill_count: 44,
                processing_time_ms: 3,
            },
        }
    }

    fn empty_report() -> AnalysisReport {
        AnalysisReport {
            found_skills: vec![],
            resume_score: 0.0,
            score_tier: ScoreTier::NeedsImprovement,
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
    fn test_console_output_contains_key_sections() {
        let output = ConsoleFormatter::new(false, false)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("Resume Score: 12/100"));
        assert!(output.contains("Data Analyst (60% - medium match)"));
        assert!(output.contains("Matching skills: Excel, Sql, Python"));
        assert!(output.contains("Skills to learn: Data Analysis, Statistics"));
        assert!(output.contains("Learn Statistics:"));
        assert!(output.contains("Improvement Tips:"));
    }

    #[test]
    fn test_console_output_for_empty_skills() {
        let output = ConsoleFormatter::new(false, false)
            .format_report(&empty_report())
            .unwrap();

        assert!(output.contains("No skills identified"));
        assert!(!output.contains("Resume Score"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let json = JsonFormatter::new(true)
            .format_report(&sample_report())
            .unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.found_skills, sample_report().found_skills);
        assert_eq!(parsed.job_matches.len(), 1);
        assert!(!parsed.skill_gaps.is_no_data());
    }

    #[test]
    fn test_report_generator_dispatch() {
        let generator = ReportGenerator::new(false, false);
        let report = sample_report();

        let console = generator.format(&report, OutputFormat::Console).unwrap();
        assert!(console.contains("Recommended Jobs:"));

        let json = generator.format(&report, OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }
}
