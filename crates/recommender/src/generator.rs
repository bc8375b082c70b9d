//! Recommendation text generation.
//!
//! A generator turns a username into a [`ProfileSummary`] and a block of
//! recommendation text. Both shipped implementations are pure: the same
//! username always yields the same output and nothing touches the network.

mod personalized;
mod static_template;

pub use personalized::{ExperienceLevel, PersonalizedTemplate};
pub use static_template::StaticTemplate;

use std::sync::Arc;

use crate::config::GeneratorKind;
use crate::error::AnalysisResult;
use crate::types::ProfileSummary;

pub trait RecommendationGenerator: Send + Sync {
    /// Profile statistics for `username`.
    fn profile(&self, username: &str) -> ProfileSummary;

    /// Recommendation text for `username` given its profile.
    fn recommendations(&self, username: &str, profile: &ProfileSummary) -> AnalysisResult<String>;
}

/// Placeholder profile reported for every username.
pub fn placeholder_profile(username: &str) -> ProfileSummary {
    ProfileSummary {
        username: username.to_string(),
        repo_count: 15,
        languages: vec![
            "Python".to_string(),
            "JavaScript".to_string(),
            "Go".to_string(),
        ],
        followers: 12,
        following: 25,
    }
}

pub fn build_generator(kind: GeneratorKind) -> Arc<dyn RecommendationGenerator> {
    match kind {
        GeneratorKind::Static => Arc::new(StaticTemplate),
        GeneratorKind::Personalized => Arc::new(PersonalizedTemplate),
    }
}
