//! Fixed skill vocabulary shared read-only across all requests

/// Recognized skill names, lowercase, in the order they are reported.
const COMMON_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "sql",
    "excel",
    "machine learning",
    "data analysis",
    "digital marketing",
    "seo",
    "content writing",
    "tally",
    "ms office",
    "word",
    "powerpoint",
    "deep learning",
    "nlp",
    "django",
    "flask",
    "react",
    "node.js",
    "aws",
    "cloud computing",
    "git",
    "github",
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "analytical skills",
    "android",
    "kotlin",
    "swift",
    "ios",
    "php",
    "wordpress",
    "angular",
    "vue",
    "typescript",
    "mongodb",
    "mysql",
    "postgresql",
    "linux",
];

/// Ordered set of skill names matched against résumé text.
/// Built once at startup and passed by reference into each component.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// The built-in vocabulary.
    pub fn standard() -> Self {
        Self {
            skills: COMMON_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The built-in vocabulary extended with caller-supplied skills.
    /// Extra entries are lowercased and appended after the standard list,
    /// skipping duplicates so membership stays set-like.
    pub fn with_additional(additional: &[String]) -> Self {
        let mut vocabulary = Self::standard();
        for skill in additional {
            let normalized = skill.trim().to_lowercase();
            if !normalized.is_empty() && !vocabulary.skills.contains(&normalized) {
                vocabulary.skills.push(normalized);
            }
        }
        vocabulary
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
