use async_trait::async_trait;
use eventfacets_core::{
    Feature, FeatureGate, OrganizationId, Project, ProjectStore, Result, TenancyConfig,
};
use std::collections::{HashMap, HashSet};

/// Project visibility backed by the deployment's tenancy config. An unknown
/// organization simply has no accessible projects.
pub struct ConfigProjectStore {
    projects: HashMap<OrganizationId, Vec<Project>>,
}

impl ConfigProjectStore {
    pub fn from_tenancy(tenancy: &TenancyConfig) -> Self {
        let projects = tenancy
            .organizations
            .iter()
            .map(|org| {
                let projects = org
                    .projects
                    .iter()
                    .map(|p| Project {
                        id: p.id,
                        slug: p.slug.clone(),
                    })
                    .collect();
                (org.id, projects)
            })
            .collect();
        Self { projects }
    }
}

#[async_trait]
impl ProjectStore for ConfigProjectStore {
    async fn accessible_projects(&self, organization_id: OrganizationId) -> Result<Vec<Project>> {
        Ok(self
            .projects
            .get(&organization_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Feature gate backed by the per-organization feature lists in the
/// tenancy config.
pub struct ConfigFeatureGate {
    enabled: HashMap<OrganizationId, HashSet<String>>,
}

impl ConfigFeatureGate {
    pub fn from_tenancy(tenancy: &TenancyConfig) -> Self {
        let enabled = tenancy
            .organizations
            .iter()
            .map(|org| (org.id, org.features.iter().cloned().collect()))
            .collect();
        Self { enabled }
    }
}

#[async_trait]
impl FeatureGate for ConfigFeatureGate {
    async fn has(&self, feature: Feature, organization_id: OrganizationId) -> bool {
        self.enabled
            .get(&organization_id)
            .is_some_and(|features| features.contains(feature.name()))
    }
}
