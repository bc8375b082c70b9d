use std::fmt::Write as _;

use super::{placeholder_profile, RecommendationGenerator};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::ProfileSummary;

const MAX_PROJECTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub fn from_repo_count(repos: u32) -> Self {
        match repos {
            r if r > 50 => Self::Expert,
            r if r > 20 => Self::Advanced,
            r if r > 5 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectIdea {
    title: &'static str,
    description: String,
    stack: String,
}

/// Recommendation text shaped by the profile's languages and repo count.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalizedTemplate;

impl RecommendationGenerator for PersonalizedTemplate {
    fn profile(&self, username: &str) -> ProfileSummary {
        placeholder_profile(username)
    }

    fn recommendations(&self, username: &str, profile: &ProfileSummary) -> AnalysisResult<String> {
        render(username, profile)
            .map_err(|error| AnalysisError::Generation(error.to_string()))
    }
}

fn has_language(profile: &ProfileSummary, language: &str) -> bool {
    profile.languages.iter().any(|l| l == language)
}

fn primary_language(profile: &ProfileSummary) -> &str {
    profile
        .languages
        .first()
        .map(String::as_str)
        .unwrap_or("Multiple")
}

fn project_ideas(profile: &ProfileSummary) -> Vec<ProjectIdea> {
    let primary = primary_language(profile);
    let repos = profile.repo_count;
    let mut ideas = Vec::new();

    if has_language(profile, "Python") {
        ideas.push(ProjectIdea {
            title: "🐍 AI-Powered Python Assistant",
            description: format!(
                "Build an intelligent Python coding companion leveraging your {primary} expertise."
            ),
            stack: "Python + OpenAI API + FastAPI + Docker".to_string(),
        });
    }
    if has_language(profile, "JavaScript") || has_language(profile, "TypeScript") {
        ideas.push(ProjectIdea {
            title: "⚡ Interactive Web Agent",
            description: format!(
                "Create a dynamic web application with AI integration using your {primary} skills."
            ),
            stack: "Next.js + Node.js + AI APIs + PostgreSQL".to_string(),
        });
    }
    if has_language(profile, "Go") {
        ideas.push(ProjectIdea {
            title: "🚀 High-Performance API Agent",
            description: "Build a lightning-fast microservice architecture with AI capabilities."
                .to_string(),
            stack: "Go + Docker + Kubernetes + Redis".to_string(),
        });
    }
    if repos > 20 {
        ideas.push(ProjectIdea {
            title: "🔍 Advanced Code Analyzer",
            description: format!(
                "With {repos} repositories, create a sophisticated tool that analyzes codebases for improvements."
            ),
            stack: format!("{primary} + AST parsing + ML models + Web UI"),
        });
    }

    if ideas.is_empty() {
        ideas.push(ProjectIdea {
            title: "🤖 Universal AI Assistant",
            description:
                "Start your AI journey with a versatile assistant that can grow with your skills."
                    .to_string(),
            stack: "Python + OpenAI API + Streamlit + SQLite".to_string(),
        });
        ideas.push(ProjectIdea {
            title: "📚 Smart Learning Companion",
            description: "Build an AI that helps developers learn new technologies.".to_string(),
            stack: "Next.js + Python + Vector DB + AI APIs".to_string(),
        });
    }

    ideas.truncate(MAX_PROJECTS);
    ideas
}

fn backend_suggestion(profile: &ProfileSummary) -> &'static str {
    if has_language(profile, "Python") {
        "FastAPI"
    } else if has_language(profile, "JavaScript") {
        "Express.js"
    } else {
        "Your preferred framework"
    }
}

fn render(username: &str, profile: &ProfileSummary) -> Result<String, std::fmt::Error> {
    let experience = ExperienceLevel::from_repo_count(profile.repo_count);
    let primary = primary_language(profile);
    let languages = if profile.languages.is_empty() {
        "Multiple technologies".to_string()
    } else {
        profile
            .languages
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    writeln!(out, "🏆 AI Agents Hackathon Project Recommendations for {username}")?;
    writeln!(out)?;
    writeln!(out, "📊 Profile Analysis:")?;
    writeln!(
        out,
        "• GitHub profile: {} repositories, {} followers",
        profile.repo_count, profile.followers
    )?;
    writeln!(out, "• Primary languages: {languages}")?;
    writeln!(out, "• Experience level: {}", experience.label())?;
    writeln!(out, "• Coding focus: Full-stack development")?;
    writeln!(out)?;
    writeln!(out, "🚀 Personalized Project Recommendations:")?;
    writeln!(out)?;

    for (i, idea) in project_ideas(profile).iter().enumerate() {
        writeln!(out, "{}. **{}**", i + 1, idea.title)?;
        writeln!(out, "   {}", idea.description)?;
        writeln!(out, "   Tech Stack: {}", idea.stack)?;
        writeln!(out)?;
    }

    writeln!(out, "💡 Personalized Tips for {username}:")?;
    writeln!(out, "• Leverage your {primary} expertise as a foundation")?;
    writeln!(
        out,
        "• Consider your {} repositories as inspiration for new projects",
        profile.repo_count
    )?;
    writeln!(
        out,
        "• Build on your existing GitHub presence ({} followers)",
        profile.followers
    )?;
    writeln!(out, "• Open source gives you unique perspective")?;
    writeln!(out)?;
    writeln!(out, "🛠️ Recommended Tech Stack:")?;
    writeln!(out, "• Primary: {primary} (your strongest language)")?;
    writeln!(out, "• AI/ML: OpenAI API, Anthropic Claude, or Hugging Face")?;
    writeln!(out, "• Backend: {}", backend_suggestion(profile))?;
    writeln!(out, "• Database: PostgreSQL, MongoDB, or vector databases")?;
    writeln!(out, "• Deployment: Docker, Vercel, or cloud platforms")?;
    writeln!(out)?;
    write!(
        out,
        "Ready to build something amazing? Your {} level and {primary} skills are perfect for these projects! 🎯",
        experience.label().to_lowercase()
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(repos: u32, languages: &[&str]) -> ProfileSummary {
        ProfileSummary {
            username: "octocat".to_string(),
            repo_count: repos,
            languages: languages.iter().map(|l| l.to_string()).collect(),
            followers: 7,
            following: 3,
        }
    }

    #[test]
    fn experience_thresholds() {
        assert_eq!(ExperienceLevel::from_repo_count(0), ExperienceLevel::Beginner);
        assert_eq!(ExperienceLevel::from_repo_count(5), ExperienceLevel::Beginner);
        assert_eq!(ExperienceLevel::from_repo_count(6), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::from_repo_count(21), ExperienceLevel::Advanced);
        assert_eq!(ExperienceLevel::from_repo_count(51), ExperienceLevel::Expert);
    }

    #[test]
    fn ideas_follow_languages() {
        let ideas = project_ideas(&profile(15, &["Python", "JavaScript", "Go"]));
        let titles: Vec<_> = ideas.iter().map(|i| i.title).collect();
        assert_eq!(
            titles,
            vec![
                "🐍 AI-Powered Python Assistant",
                "⚡ Interactive Web Agent",
                "🚀 High-Performance API Agent",
            ]
        );
    }

    #[test]
    fn typescript_counts_as_web() {
        let ideas = project_ideas(&profile(2, &["TypeScript"]));
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "⚡ Interactive Web Agent");
    }

    #[test]
    fn many_repos_adds_code_analyzer() {
        let ideas = project_ideas(&profile(42, &["Rust"]));
        assert_eq!(ideas.len(), 1);
        assert!(ideas[0].description.contains("42 repositories"));
        assert_eq!(ideas[0].stack, "Rust + AST parsing + ML models + Web UI");
    }

    #[test]
    fn unmatched_profile_gets_generic_ideas() {
        let ideas = project_ideas(&profile(1, &[]));
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].title, "🤖 Universal AI Assistant");
    }

    #[test]
    fn render_uses_placeholder_profile() {
        let generator = PersonalizedTemplate;
        let p = generator.profile("torvalds");
        let text = generator.recommendations("torvalds", &p).expect("render");
        assert!(text.contains("for torvalds"));
        assert!(text.contains("• Experience level: Intermediate"));
        assert!(text.contains("• Primary languages: Python, JavaScript, Go"));
        assert!(text.contains("• Backend: FastAPI"));
        assert!(text.contains("Personalized Tips for torvalds:"));
        assert!(text.ends_with("perfect for these projects! 🎯"));
        assert_eq!(text, generator.recommendations("torvalds", &p).expect("render"));
    }

    #[test]
    fn empty_languages_render_fallbacks() {
        let text = render("newbie", &profile(0, &[])).expect("render");
        assert!(text.contains("• Primary languages: Multiple technologies"));
        assert!(text.contains("• Primary: Multiple (your strongest language)"));
        assert!(text.contains("• Backend: Your preferred framework"));
        assert!(text.contains("Your beginner level"));
    }
}
