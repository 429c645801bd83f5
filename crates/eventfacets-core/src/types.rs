use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub type OrganizationId = u64;
pub type ProjectId = u64;

/// Raw tag value as returned by the analytics engine. Project ids arrive as
/// numbers; every other tag value is a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Number(u64),
    Text(String),
}

impl TagValue {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            TagValue::Number(n) => Some(*n),
            TagValue::Text(_) => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Number(n) => write!(f, "{}", n),
            TagValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<u64> for TagValue {
    fn from(n: u64) -> Self {
        TagValue::Number(n)
    }
}

/// One (tag key, tag value) frequency row from the analytics engine,
/// pre-ranked and pre-truncated per key on the engine side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetRow {
    pub key: String,
    pub value: TagValue,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopValue {
    pub name: String,
    pub value: TagValue,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub key: String,
    #[serde(rename = "topValues")]
    pub top_values: Vec<TopValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Per-request query scope. Built fresh for every request and discarded
/// with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryScope {
    pub organization_id: OrganizationId,
    pub project_ids: BTreeSet<ProjectId>,
    pub date_range: DateRange,
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub slug: String,
}
