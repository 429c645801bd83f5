use crate::{FacetGroup, ProjectId};
use std::collections::HashMap;

/// Reserved tag key whose values are internal numeric project ids.
pub const PROJECT_KEY: &str = "project";

/// Replace project ids with slugs, which is what we expose to users, and
/// drop values for projects the caller cannot see. Values that are not
/// numeric never match a project id. Retained values keep their order.
pub fn resolve_project_group(
    mut group: FacetGroup,
    visible: &HashMap<ProjectId, String>,
) -> FacetGroup {
    if group.key != PROJECT_KEY {
        return group;
    }
    group.top_values = group
        .top_values
        .into_iter()
        .filter_map(|mut tv| {
            let id = tv.value.as_number()?;
            let slug = visible.get(&id)?;
            tv.name = slug.clone();
            Some(tv)
        })
        .collect();
    group
}

/// Apply project identity resolution across a group sequence. Only the
/// `"project"` group is touched; everything else passes through unchanged.
pub fn resolve_project_groups(
    groups: Vec<FacetGroup>,
    visible: &HashMap<ProjectId, String>,
) -> Vec<FacetGroup> {
    groups
        .into_iter()
        .map(|g| resolve_project_group(g, visible))
        .collect()
}
