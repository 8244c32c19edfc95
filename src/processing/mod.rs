//! Skill matching and analysis module

pub mod analyzer;
pub mod gap_analyzer;
pub mod recommender;
pub mod scorer;
pub mod skill_matcher;
pub mod vocabulary;
