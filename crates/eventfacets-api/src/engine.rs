use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventfacets_core::{
    EngineConfig, FacetQueryClient, FacetRow, FacetsError, QueryScope, Result, FACETS_REFERRER,
};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// HTTP client for the analytics engine's top-tags endpoint.
///
/// Engine rejections are terminal for the request: a bad query or an
/// out-of-retention window is reported to the caller as-is, never retried.
pub struct HttpFacetQueryClient {
    config: EngineConfig,
    client: Client,
}

#[derive(Serialize)]
struct FacetsRequest<'a> {
    referrer: &'static str,
    organization_id: u64,
    project_ids: Vec<u64>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
}

#[derive(Deserialize)]
struct FacetsResponse {
    data: Vec<FacetRow>,
}

#[derive(Deserialize)]
struct EngineErrorBody {
    #[serde(default)]
    kind: Option<String>,
    detail: String,
}

impl HttpFacetQueryClient {
    pub fn new(config: EngineConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    fn facets_url(&self) -> String {
        format!("{}/facets", self.config.url.trim_end_matches('/'))
    }
}

#[async_trait]
impl FacetQueryClient for HttpFacetQueryClient {
    async fn fetch_facets(&self, query: Option<&str>, scope: &QueryScope) -> Result<Vec<FacetRow>> {
        let request = FacetsRequest {
            referrer: FACETS_REFERRER,
            organization_id: scope.organization_id,
            project_ids: scope.project_ids.iter().copied().collect(),
            start: scope.date_range.start,
            end: scope.date_range.end,
            query,
        };

        let response = self
            .client
            .post(self.facets_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| FacetsError::Engine(e.to_string()))?;

        let status = response.status();
        debug!(%status, "engine facets response");

        if status == StatusCode::BAD_REQUEST {
            let body: EngineErrorBody = response
                .json()
                .await
                .map_err(|e| FacetsError::Engine(e.to_string()))?;
            return Err(match body.kind.as_deref() {
                Some("invalid_query") => FacetsError::InvalidQuery(body.detail),
                Some("outside_retention") => FacetsError::OutsideRetention(body.detail),
                _ => FacetsError::Engine(body.detail),
            });
        }
        if !status.is_success() {
            return Err(FacetsError::Engine(format!(
                "engine returned status {}",
                status
            )));
        }

        let body: FacetsResponse = response
            .json()
            .await
            .map_err(|e| FacetsError::Engine(e.to_string()))?;
        Ok(body.data)
    }
}
