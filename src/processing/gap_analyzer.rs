//! Skill gap analysis with learning resource suggestions

use crate::processing::recommender::JobMatch;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// How many top-ranked roles contribute their missing skills.
pub const GAP_ROLE_LIMIT: usize = 3;

/// Learning resources suggested per missing skill.
pub const RESOURCES_PER_SKILL: usize = 3;

/// Gap analysis outcome. `NoData` is a distinct state from an empty resource
/// map: it means there were no ranked roles to analyze at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "resources", rename_all = "snake_case")]
pub enum SkillGapReport {
    NoData,
    Resources(BTreeMap<String, Vec<String>>),
}

impl SkillGapReport {
    pub fn is_no_data(&self) -> bool {
        matches!(self, SkillGapReport::NoData)
    }
}

pub struct GapAnalyzer {
    curated_resources: HashMap<&'static str, [&'static str; RESOURCES_PER_SKILL]>,
    role_limit: usize,
}

impl GapAnalyzer {
    pub fn new() -> Self {
        Self {
            curated_resources: Self::curated_resources(),
            role_limit: GAP_ROLE_LIMIT,
        }
    }

    pub fn with_role_limit(mut self, limit: usize) -> Self {
        self.role_limit = limit;
        self
    }

    /// Map the missing skills of the top-ranked roles to learning resources.
    ///
    /// Takes up to `role_limit` roles from the already-ranked matches, unions
    /// their missing skills, and resolves each to a curated resource list or
    /// a synthesized generic one.
    pub fn analyze(&self, ranked_matches: &[JobMatch]) -> SkillGapReport {
        if ranked_matches.is_empty() {
            return SkillGapReport::NoData;
        }

        let missing_skills: BTreeSet<&str> = ranked_matches
            .iter()
            .take(self.role_limit)
            .flat_map(|m| m.missing_skills.iter().map(|s| s.as_str()))
            .collect();

        let resources = missing_skills
            .into_iter()
            .map(|skill| (skill.to_string(), self.resources_for(skill)))
            .collect();

        SkillGapReport::Resources(resources)
    }

    fn resources_for(&self, skill: &str) -> Vec<String> {
        if let Some(curated) = self.curated_resources.get(skill) {
            return curated.iter().map(|r| r.to_string()).collect();
        }

        let display_name = title_case(skill);
        vec![
            format!("YouTube: {} Tutorial", display_name),
            format!("Udemy: {} Course", display_name),
            "Practice on HackerRank/LeetCode".to_string(),
        ]
    }

    fn curated_resources() -> HashMap<&'static str, [&'static str; RESOURCES_PER_SKILL]> {
        HashMap::from([
            (
                "python",
                [
                    "CodeWithHarry Python",
                    "freeCodeCamp Python",
                    "Coursera Python for Everybody",
                ],
            ),
            (
                "java",
                [
                    "Java Tutorial by Kunal Kushwaha",
                    "Udemy Java Masterclass",
                    "CodeWithHarry Java",
                ],
            ),
            (
                "javascript",
                [
                    "JavaScript.info",
                    "freeCodeCamp JavaScript",
                    "Namaste JavaScript by Akshay Saini",
                ],
            ),
            (
                "react",
                [
                    "React Official Docs",
                    "Scrimba React Course",
                    "CodeWithHarry React",
                ],
            ),
            (
                "machine learning",
                [
                    "Coursera ML by Andrew Ng",
                    "Krish Naik YouTube",
                    "freeCodeCamp ML",
                ],
            ),
            (
                "data analysis",
                [
                    "Google Data Analytics Certificate",
                    "Kaggle Courses",
                    "365 Data Science",
                ],
            ),
            (
                "sql",
                [
                    "SQL Bolt",
                    "Khan Academy SQL",
                    "StrataScratch SQL Practice",
                ],
            ),
            (
                "aws",
                [
                    "AWS Training Portal",
                    "freeCodeCamp AWS",
                    "Stephane Maarek Udemy",
                ],
            ),
            (
                "digital marketing",
                [
                    "Google Digital Garage",
                    "Coursera Digital Marketing",
                    "HubSpot Academy",
                ],
            ),
            (
                "excel",
                [
                    "Excel Easy Tutorials",
                    "Chandoo.org",
                    "YouTube Excel Is Fun",
                ],
            ),
        ])
    }
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Capitalize every letter that follows a non-letter, e.g.
/// "machine learning" -> "Machine Learning", "node.js" -> "Node.Js".
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut previous_is_alphabetic = false;

    for c in s.chars() {
        if c.is_alphabetic() && !previous_is_alphabetic {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        previous_is_alphabetic = c.is_alphabetic();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::recommender::MatchTier;

    fn job_match(role: &str, missing: &[&str]) -> JobMatch {
        JobMatch {
            role: role.to_string(),
            match_ratio: 0.6,
            tier: MatchTier::Medium,
            matched_skills: vec![],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let report = GapAnalyzer::new().analyze(&[]);
        assert!(report.is_no_data());
        assert_ne!(report, SkillGapReport::Resources(BTreeMap::new()));
    }

    #[test]
    fn test_curated_skill_gets_curated_resources() {
        let report = GapAnalyzer::new().analyze(&[job_match("Data Analyst", &["sql"])]);
        let SkillGapReport::Resources(resources) = report else {
            panic!("expected resources");
        };
        assert_eq!(
            resources["sql"],
            vec!["SQL Bolt", "Khan Academy SQL", "StrataScratch SQL Practice"]
        );
    }

    #[test]
    fn test_unlisted_skill_gets_generated_resources() {
        let report = GapAnalyzer::new().analyze(&[job_match("DevOps Engineer", &["linux"])]);
        let SkillGapReport::Resources(resources) = report else {
            panic!("expected resources");
        };
        assert_eq!(
            resources["linux"],
            vec![
                "YouTube: Linux Tutorial",
                "Udemy: Linux Course",
                "Practice on HackerRank/LeetCode"
            ]
        );
    }

    #[test]
    fn test_only_top_roles_contribute() {
        let matches = vec![
            job_match("First", &["sql"]),
            job_match("Second", &["excel"]),
            job_match("Third", &["aws"]),
            job_match("Fourth", &["kotlin"]),
        ];
        let report = GapAnalyzer::new().analyze(&matches);
        let SkillGapReport::Resources(resources) = report else {
            panic!("expected resources");
        };
        assert_eq!(resources.len(), 3);
        assert!(!resources.contains_key("kotlin"));
    }

    #[test]
    fn test_missing_skills_are_deduplicated() {
        let matches = vec![
            job_match("First", &["statistics", "sql"]),
            job_match("Second", &["statistics"]),
        ];
        let report = GapAnalyzer::new().analyze(&matches);
        let SkillGapReport::Resources(resources) = report else {
            panic!("expected resources");
        };
        assert_eq!(resources.len(), 2);
        assert_eq!(resources["statistics"].len(), RESOURCES_PER_SKILL);
    }

    #[test]
    fn test_fully_matched_roles_give_empty_map_not_sentinel() {
        let report = GapAnalyzer::new().analyze(&[job_match("Perfect Fit", &[])]);
        assert_eq!(report, SkillGapReport::Resources(BTreeMap::new()));
        assert!(!report.is_no_data());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("sql"), "Sql");
        assert_eq!(title_case(""), "");
    }
}
