//! HTTP client for the recommendation service.

use std::time::Duration;

use recommender::{AnalysisRequest, AnalysisResponse};

use crate::error::ProxyError;

#[derive(Debug, Clone)]
pub struct RecommenderClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecommenderClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProxyError::Config(format!("failed to build http client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {base_url}/analyze`. Non-2xx statuses are errors.
    pub async fn analyze(&self, username: &str, agent: &str) -> Result<AnalysisResponse, ProxyError> {
        let request = AnalysisRequest::new(username).with_agent(agent);
        let response = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<AnalysisResponse>()
            .await
            .map_err(|e| ProxyError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client =
            RecommenderClient::new("http://agents:7777/", Duration::from_secs(1)).expect("client");
        assert_eq!(client.base_url(), "http://agents:7777");
    }
}
