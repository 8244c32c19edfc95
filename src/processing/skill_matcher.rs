//! Whole-word skill matching against the fixed vocabulary

use crate::error::{JobScannerError, Result};
use crate::processing::vocabulary::SkillVocabulary;
use aho_corasick::{AhoCorasick, MatchKind};

/// Matcher for case-insensitive, word-boundary-delimited skill occurrences.
///
/// A single Aho-Corasick automaton scans the text once. The scan is
/// overlapping so every vocabulary entry is tested independently: an entry
/// nested inside a longer phrase ("learning" inside "machine learning")
/// still reports on its own, while the word-boundary check on each candidate
/// keeps "sql" from firing inside "mysql". Multi-word skills match as
/// contiguous phrases.
pub struct SkillMatcher {
    matcher: AhoCorasick,
    vocabulary: SkillVocabulary,
}

impl SkillMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self> {
        // Overlapping iteration requires the standard match kind
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(vocabulary.skills())
            .map_err(|e| {
                JobScannerError::InvalidInput(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            matcher,
            vocabulary,
        })
    }

    /// Find vocabulary skills present in the text.
    ///
    /// The result is ordered by vocabulary position, not text position, and
    /// contains each skill at most once. Empty text yields an empty result.
    pub fn find_skills(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut present = vec![false; self.vocabulary.len()];

        for mat in self.matcher.find_overlapping_iter(&lowered) {
            if is_word_bounded(&lowered, mat.start(), mat.end()) {
                present[mat.pattern().as_usize()] = true;
            }
        }

        self.vocabulary
            .skills()
            .iter()
            .zip(present)
            .filter(|(_, found)| *found)
            .map(|(skill, _)| skill.clone())
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.vocabulary.len()
    }
}

/// A match counts only if neither edge touches a word character, the same
/// delimitation `\b` gives in a regex.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(SkillVocabulary::standard()).unwrap()
    }

    #[test]
    fn test_case_insensitive_word_matching() {
        let found = matcher().find_skills("I know Python and SQL.");
        assert_eq!(found, vec!["python".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_no_match_inside_longer_token() {
        // "mysql" is its own vocabulary entry; "sql" must not fire inside it
        let found = matcher().find_skills("Strong MySQL administration background");
        assert_eq!(found, vec!["mysql".to_string()]);
    }

    #[test]
    fn test_multi_word_skill_matches_as_phrase() {
        let found = matcher().find_skills("Built machine learning pipelines");
        assert!(found.contains(&"machine learning".to_string()));

        let found = matcher().find_skills("machine tooling and learning materials");
        assert!(!found.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_result_follows_vocabulary_order() {
        // Text order is sql, excel, python; vocabulary order is python, sql, excel
        let found = matcher().find_skills("SQL first, then Excel, finally Python");
        assert_eq!(
            found,
            vec!["python".to_string(), "sql".to_string(), "excel".to_string()]
        );
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let found = matcher().find_skills("python python PYTHON");
        assert_eq!(found, vec!["python".to_string()]);
    }

    #[test]
    fn test_empty_text_yields_empty_result() {
        assert!(matcher().find_skills("").is_empty());
        assert!(matcher().find_skills("   \n\t ").is_empty());
    }

    #[test]
    fn test_dotted_skill_name() {
        let found = matcher().find_skills("Backend work with Node.js services");
        assert!(found.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_word_not_matched_inside_wordpress() {
        let found = matcher().find_skills("Maintained WordPress sites");
        assert!(found.contains(&"wordpress".to_string()));
        assert!(!found.contains(&"word".to_string()));
    }

    #[test]
    fn test_additional_skill_nested_in_phrase_matches_independently() {
        // "learning" sits word-bounded inside "machine learning"; both
        // entries must report
        let vocabulary = SkillVocabulary::with_additional(&["learning".to_string()]);
        let m = SkillMatcher::new(vocabulary).unwrap();

        let found = m.find_skills("Focused on machine learning projects");
        assert!(found.contains(&"machine learning".to_string()));
        assert!(found.contains(&"learning".to_string()));
    }

    #[test]
    fn test_matching_is_pure() {
        let m = matcher();
        let text = "Python, SQL and teamwork across excel reports";
        assert_eq!(m.find_skills(text), m.find_skills(text));
    }
}
