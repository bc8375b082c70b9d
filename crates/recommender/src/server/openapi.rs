use axum::Json;
use utoipa::OpenApi;

use crate::server::error::ApiErrorResponse;
use crate::server::meta::{AgentsResponse, HealthResponse, RootResponse};
use crate::types::{AnalysisRequest, AnalysisResponse, ProfileSummary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Agents Hackathon Recommender",
        version = "1.0.0",
        description = "Analyzes GitHub profiles and recommends hackathon projects"
    ),
    paths(
        crate::server::meta::root,
        crate::server::meta::health,
        crate::server::meta::list_agents,
        crate::server::analyze::analyze,
    ),
    components(schemas(
        ApiErrorResponse,
        AnalysisRequest,
        AnalysisResponse,
        ProfileSummary,
        AgentsResponse,
        HealthResponse,
        RootResponse,
    )),
    tags(
        (name = "meta", description = "Service identification and liveness"),
        (name = "agents", description = "Configured recommendation agents"),
        (name = "analysis", description = "Profile analysis"),
    )
)]
pub struct ApiDoc;

pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/agents", "/analyze"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
