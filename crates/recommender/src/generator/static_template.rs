use super::{placeholder_profile, RecommendationGenerator};
use crate::error::AnalysisResult;
use crate::types::ProfileSummary;

const TEMPLATE: &str = include_str!("../../templates/recommendations.txt");
const USERNAME_SLOT: &str = "{username}";

/// Fixed recommendation text with the username interpolated.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTemplate;

impl RecommendationGenerator for StaticTemplate {
    fn profile(&self, username: &str) -> ProfileSummary {
        placeholder_profile(username)
    }

    fn recommendations(&self, username: &str, _profile: &ProfileSummary) -> AnalysisResult<String> {
        Ok(TEMPLATE.replace(USERNAME_SLOT, username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(username: &str) -> String {
        let generator = StaticTemplate;
        let profile = generator.profile(username);
        generator
            .recommendations(username, &profile)
            .expect("render")
    }

    #[test]
    fn heading_names_the_user() {
        let text = render("torvalds");
        assert!(text.starts_with("🏆 AI Agents Hackathon Project Recommendations for torvalds\n"));
        assert!(!text.contains(USERNAME_SLOT));
        assert!(text.ends_with("start coding! 🎯"));
    }

    #[test]
    fn lists_five_projects() {
        let text = render("octocat");
        for n in 1..=5 {
            assert!(text.contains(&format!("\n{n}. **")), "missing project {n}");
        }
        assert!(text.contains("Tech Stack Suggestions:"));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(render("octocat"), render("octocat"));
        assert_ne!(render("octocat"), render("torvalds"));
    }

    #[test]
    fn profile_is_the_placeholder() {
        let profile = StaticTemplate.profile("torvalds");
        assert_eq!(profile.username, "torvalds");
        assert_eq!(profile.repo_count, 15);
        assert_eq!(profile.languages, vec!["Python", "JavaScript", "Go"]);
        assert_eq!(profile.followers, 12);
        assert_eq!(profile.following, 25);
    }
}
