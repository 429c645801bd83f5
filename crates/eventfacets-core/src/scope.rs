use crate::{FacetsError, Project, ProjectId, Result};
use std::collections::BTreeSet;

/// Resolve the caller-requested project ids against the projects the caller
/// can actually see. An empty request means "all accessible projects".
pub fn resolve_project_ids(
    requested: &[ProjectId],
    accessible: &[Project],
) -> Result<BTreeSet<ProjectId>> {
    if accessible.is_empty() {
        return Err(FacetsError::NoProjects);
    }

    let accessible_ids: BTreeSet<ProjectId> = accessible.iter().map(|p| p.id).collect();
    if requested.is_empty() {
        return Ok(accessible_ids);
    }

    let unknown: Vec<String> = requested
        .iter()
        .filter(|id| !accessible_ids.contains(id))
        .map(|id| id.to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(FacetsError::InvalidProjects(unknown.join(", ")));
    }

    Ok(requested.iter().copied().collect())
}

/// Multi-project queries require the global-views capability. Single-project
/// (or empty) scopes pass regardless of the flag.
pub fn validate_project_scope(
    project_ids: &BTreeSet<ProjectId>,
    has_global_views: bool,
) -> Result<()> {
    if !has_global_views && project_ids.len() > 1 {
        return Err(FacetsError::CrossProjectRestricted);
    }
    Ok(())
}
