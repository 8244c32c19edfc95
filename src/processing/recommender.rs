//! Job role recommendation from matched skills

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Minimum match ratio a role must exceed (strictly) to be recommended.
pub const MATCH_THRESHOLD: f32 = 0.3;

/// A catalog role with its required skills and a short description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRole {
    pub name: String,
    pub required_skills: Vec<String>,
    pub description: String,
}

impl JobRole {
    fn new(name: &str, required_skills: &[&str], description: &str) -> Self {
        Self {
            name: name.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        }
    }
}

/// Fixed role catalog, built once at startup. Iteration order is the catalog
/// order and decides ties in the ranking.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    roles: Vec<JobRole>,
}

impl JobCatalog {
    pub fn standard() -> Self {
        let roles = vec![
            JobRole::new(
                "Software Engineer",
                &["python", "java", "javascript", "sql", "git"],
                "Designs, develops, and tests software applications and systems.",
            ),
            JobRole::new(
                "Data Scientist",
                &["python", "machine learning", "data analysis", "sql", "statistics"],
                "Builds machine learning models to extract insights from data.",
            ),
            JobRole::new(
                "Web Developer",
                &["javascript", "html", "css", "python", "react"],
                "Creates and maintains websites and web applications.",
            ),
            JobRole::new(
                "Data Analyst",
                &["excel", "sql", "data analysis", "python", "statistics"],
                "Analyzes data to help businesses make informed decisions.",
            ),
            JobRole::new(
                "Mobile App Developer",
                &["android", "kotlin", "java", "swift", "ios"],
                "Develops applications for mobile devices.",
            ),
            JobRole::new(
                "DevOps Engineer",
                &["aws", "cloud computing", "git", "linux", "python"],
                "Manages and automates software deployment processes.",
            ),
            JobRole::new(
                "Digital Marketing Specialist",
                &["digital marketing", "seo", "content writing", "social media"],
                "Plans and executes online marketing campaigns.",
            ),
            JobRole::new(
                "Backend Developer",
                &["python", "java", "node.js", "sql", "mongodb"],
                "Develops server-side logic and databases for web applications.",
            ),
            JobRole::new(
                "Frontend Developer",
                &["javascript", "html", "css", "react", "angular"],
                "Creates user interfaces and client-side functionality.",
            ),
        ];

        Self { roles }
    }

    pub fn roles(&self) -> &[JobRole] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for JobCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Display tier for a match ratio. Boundaries are inclusive at the lower
/// bound of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio >= 0.8 {
            MatchTier::High
        } else if ratio >= 0.5 {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::High => write!(f, "high"),
            MatchTier::Medium => write!(f, "medium"),
            MatchTier::Low => write!(f, "low"),
        }
    }
}

/// A recommended role, recomputed fresh for each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub role: String,
    pub match_ratio: f32,
    pub tier: MatchTier,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub description: String,
}

pub struct JobRecommender {
    catalog: JobCatalog,
    threshold: f32,
}

impl JobRecommender {
    pub fn new(catalog: JobCatalog) -> Self {
        Self {
            catalog,
            threshold: MATCH_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Rank catalog roles against the found skills.
    ///
    /// Matched and missing skill lists keep the role's required-skill order.
    /// Roles are included only when their ratio strictly exceeds the
    /// threshold, then sorted descending by ratio; the sort is stable, so
    /// equal ratios keep catalog order.
    pub fn recommend(&self, found_skills: &[String]) -> Vec<JobMatch> {
        let found: HashSet<&str> = found_skills.iter().map(|s| s.as_str()).collect();
        let mut matches = Vec::new();

        for role in self.catalog.roles() {
            let matched_skills: Vec<String> = role
                .required_skills
                .iter()
                .filter(|skill| found.contains(skill.as_str()))
                .cloned()
                .collect();

            let missing_skills: Vec<String> = role
                .required_skills
                .iter()
                .filter(|skill| !found.contains(skill.as_str()))
                .cloned()
                .collect();

            let match_ratio = if role.required_skills.is_empty() {
                0.0
            } else {
                matched_skills.len() as f32 / role.required_skills.len() as f32
            };

            if match_ratio > self.threshold {
                matches.push(JobMatch {
                    role: role.name.clone(),
                    match_ratio,
                    tier: MatchTier::from_ratio(match_ratio),
                    matched_skills,
                    missing_skills,
                    description: role.description.clone(),
                });
            }
        }

        matches.sort_by(|a, b| b.match_ratio.total_cmp(&a.match_ratio));
        matches
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }
}
