//! Hackathon project recommendation service.
//!
//! Loads agent definitions once at startup and answers `/analyze` with a
//! placeholder profile and templated recommendations.

pub mod analysis;
pub mod config;
pub mod error;
pub mod generator;
pub mod server;
pub mod telemetry;
pub mod types;

pub use crate::analysis::AnalysisService;
pub use crate::config::{AgentDefinition, AgentRegistry, ServiceSettings, DEFAULT_AGENT};
pub use crate::error::{AnalysisError, ConfigError};
pub use crate::generator::RecommendationGenerator;
pub use crate::types::{AnalysisRequest, AnalysisResponse, ProfileSummary};
