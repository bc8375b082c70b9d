//! Profile analysis.
//!
//! [`AnalysisService::analyze`] never fails: unknown agents, generator
//! errors and generator panics all come back as `success: false` responses.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::config::AgentRegistry;
use crate::error::AnalysisError;
use crate::generator::RecommendationGenerator;
use crate::types::AnalysisResponse;

/// Message returned to callers when generation faults unexpectedly.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error while generating recommendations";

#[derive(Clone)]
pub struct AnalysisService {
    registry: Arc<AgentRegistry>,
    generator: Arc<dyn RecommendationGenerator>,
}

impl AnalysisService {
    pub fn new(registry: AgentRegistry, generator: Arc<dyn RecommendationGenerator>) -> Self {
        Self {
            registry: Arc::new(registry),
            generator,
        }
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn analyze(&self, username: &str, agent: &str) -> AnalysisResponse {
        if !self.registry.contains(agent) {
            let error = AnalysisError::UnknownAgent(agent.to_string());
            tracing::warn!(username, agent, "analysis rejected: {error}");
            return AnalysisResponse::failure(agent, error.to_string());
        }

        tracing::info!(username, agent, "starting analysis");

        let generator = Arc::clone(&self.generator);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let profile = generator.profile(username);
            generator
                .recommendations(username, &profile)
                .map(|text| (text, profile))
        }));

        match outcome {
            Ok(Ok((recommendations, profile))) => {
                AnalysisResponse::success(agent, recommendations, profile)
            }
            Ok(Err(error)) => {
                tracing::error!(username, agent, "analysis failed: {error}");
                AnalysisResponse::failure(agent, error.to_string())
            }
            Err(payload) => {
                tracing::error!(
                    username,
                    agent,
                    "recommendation generator panicked: {}",
                    panic_message(payload.as_ref())
                );
                AnalysisResponse::failure(agent, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
