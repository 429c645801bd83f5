use eventfacets_core::{FacetQueryClient, FeatureGate, ProjectStore, Settings};
use std::sync::Arc;

/// Shared collaborators behind the facets endpoint. Everything here is
/// immutable after construction; per-request facet state never lives in
/// the app state.
#[derive(Clone)]
pub struct AppState {
    pub query_client: Arc<dyn FacetQueryClient>,
    pub projects: Arc<dyn ProjectStore>,
    pub features: Arc<dyn FeatureGate>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        query_client: Arc<dyn FacetQueryClient>,
        projects: Arc<dyn ProjectStore>,
        features: Arc<dyn FeatureGate>,
        settings: Settings,
    ) -> Self {
        Self {
            query_client,
            projects,
            features,
            settings: Arc::new(settings),
        }
    }
}
