//! Résumé quality scoring

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of recognized skills that earns a full score. Intentionally below
/// the vocabulary size; kept as-is from the product definition.
pub const IDEAL_SKILL_COUNT: usize = 25;

/// Score a résumé from the number of recognized skills, on a 0-100 scale
/// capped at 100. A zero baseline scores 0.
pub fn resume_score(found_count: usize, ideal_skill_count: usize) -> f32 {
    if ideal_skill_count == 0 {
        return 0.0;
    }
    let score = (found_count as f32 / ideal_skill_count as f32) * 100.0;
    score.min(100.0)
}

/// Display tier for a résumé score. Boundaries are inclusive at the lower
/// bound of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreTier {
    pub fn from_score(score: f32) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 50.0 {
            ScoreTier::Good
        } else {
            ScoreTier::NeedsImprovement
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreTier::Excellent => write!(f, "excellent"),
            ScoreTier::Good => write!(f, "good"),
            ScoreTier::NeedsImprovement => write!(f, "needs improvement"),
        }
    }
}
