use crate::{FacetRow, OrganizationId, Project, QueryScope, Result};
use async_trait::async_trait;

/// Attribution tag forwarded to the analytics engine with every facet query.
pub const FACETS_REFERRER: &str = "api.organization-events-facets.top-tags";

/// Boundary to the analytics engine. Implementations run the top-tags
/// aggregation and return one row per (key, value) pair, ranked and
/// truncated per key engine-side.
#[async_trait]
pub trait FacetQueryClient: Send + Sync {
    async fn fetch_facets(
        &self,
        query: Option<&str>,
        scope: &QueryScope,
    ) -> Result<Vec<FacetRow>>;
}

/// Project identity and visibility for the requesting caller.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Projects within the organization the caller is allowed to see.
    async fn accessible_projects(&self, organization_id: OrganizationId) -> Result<Vec<Project>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    DiscoverBasic,
    GlobalViews,
}

impl Feature {
    pub fn name(&self) -> &'static str {
        match self {
            Feature::DiscoverBasic => "organizations:discover-basic",
            Feature::GlobalViews => "organizations:global-views",
        }
    }
}

/// Capability flags evaluated by an external feature service. The core
/// treats the answers as opaque booleans.
#[async_trait]
pub trait FeatureGate: Send + Sync {
    async fn has(&self, feature: Feature, organization_id: OrganizationId) -> bool;
}
