use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::DEFAULT_AGENT;
use crate::error::AnalysisError;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// GitHub username to analyze. Must be non-empty after trimming.
    #[serde(default)]
    pub username: String,
    /// Agent to run; defaults to `hackathon_recommender`.
    #[serde(default = "default_agent")]
    pub agent: String,
}

fn default_agent() -> String {
    DEFAULT_AGENT.to_string()
}

impl AnalysisRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            agent: default_agent(),
        }
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.username.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "username is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Placeholder statistics about a GitHub account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileSummary {
    pub username: String,
    #[serde(rename = "repos")]
    pub repo_count: u32,
    pub languages: Vec<String>,
    pub followers: u32,
    pub following: u32,
}

/// Result of an analysis. `success` decides which of the optional fields
/// are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn success(
        agent: impl Into<String>,
        recommendations: String,
        profile: ProfileSummary,
    ) -> Self {
        Self {
            success: true,
            agent: Some(agent.into()),
            recommendations: Some(recommendations),
            profile: Some(profile),
            error: None,
        }
    }

    pub fn failure(agent: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            agent: Some(agent.into()),
            recommendations: None,
            profile: None,
            error: Some(error.into()),
        }
    }
}
