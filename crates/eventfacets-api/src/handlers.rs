use crate::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use eventfacets_core::{
    aggregate_facets, resolve_project_groups, resolve_project_ids, tagstore,
    validate_project_scope, DateRange, FacetGroup, Feature, OrganizationId, ProjectId, QueryScope,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: option_env!("CARGO_PKG_VERSION")
            .unwrap_or("0.1.0")
            .to_string(),
    })
}

#[derive(Deserialize)]
pub struct FacetsParams {
    /// Free-text search filter, forwarded verbatim to the engine.
    pub query: Option<String>,
    /// Comma-separated project ids; absent means all accessible projects.
    pub project: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn parse_project_ids(raw: Option<&str>) -> ApiResult<Vec<ProjectId>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.trim()
                .parse::<ProjectId>()
                .map_err(|_| ApiError::BadRequest(format!("Invalid project id: {}", part.trim())))
        })
        .collect()
}

/// Tag facets for events matching the query, scoped to the caller's
/// projects and time window.
pub async fn organization_events_facets(
    State(state): State<AppState>,
    Path(organization_id): Path<OrganizationId>,
    Query(params): Query<FacetsParams>,
) -> ApiResult<Json<Vec<FacetGroup>>> {
    if !state
        .features
        .has(Feature::DiscoverBasic, organization_id)
        .await
    {
        // Hide the endpoint rather than acknowledge the organization.
        return Err(eventfacets_core::FacetsError::AuthorizationDenied.into());
    }

    if params.start >= params.end {
        return Err(ApiError::BadRequest("start must be before end".to_string()));
    }

    let accessible = state.projects.accessible_projects(organization_id).await?;
    let requested = parse_project_ids(params.project.as_deref())?;
    let project_ids = resolve_project_ids(&requested, &accessible)?;

    let has_global_views = state
        .features
        .has(Feature::GlobalViews, organization_id)
        .await;
    validate_project_scope(&project_ids, has_global_views)?;

    let scope = QueryScope {
        organization_id,
        project_ids,
        date_range: DateRange {
            start: params.start,
            end: params.end,
        },
        query: params.query.clone(),
    };

    let rows = state
        .query_client
        .fetch_facets(params.query.as_deref(), &scope)
        .await?;
    debug!(
        organization_id,
        rows = rows.len(),
        "fetched facet rows from engine"
    );

    let groups = aggregate_facets(rows, tagstore::standardize_key, tagstore::tag_value_label);

    // Project ids are internal; expose slugs and hide projects the caller
    // cannot see.
    let visible: HashMap<ProjectId, String> = accessible
        .into_iter()
        .map(|p| (p.id, p.slug))
        .collect();
    let groups = resolve_project_groups(groups, &visible);

    Ok(Json(groups))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_param_parses_comma_separated_ids() {
        assert_eq!(parse_project_ids(Some("1,2, 3")).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_project_ids(Some("")).unwrap(), Vec::<u64>::new());
        assert_eq!(parse_project_ids(None).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn bad_project_param_is_a_bad_request() {
        let err = parse_project_ids(Some("1,abc")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
