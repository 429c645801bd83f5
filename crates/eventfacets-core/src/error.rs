use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacetsError {
    #[error("authorization denied")]
    AuthorizationDenied,

    #[error("A valid project must be included.")]
    NoProjects,

    #[error("Invalid projects: {0}")]
    InvalidProjects(String),

    #[error("You cannot view events from multiple projects.")]
    CrossProjectRestricted,

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    #[error("Query outside retention window: {0}")]
    OutsideRetention(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FacetsError>;
