use crate::entry::Collection;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{} with the name '{name}' already exists", .collection.label())]
    DuplicateName { collection: Collection, name: String },

    #[error("{} '{name}' not found", .collection.label())]
    NotFound { collection: Collection, name: String },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("permission denied: caller is not the operator")]
    PermissionDenied,

    #[error("storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Conditions a caller is expected to handle and report back to the user.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateName { .. }
                | CatalogError::NotFound { .. }
                | CatalogError::Validation(_)
                | CatalogError::PermissionDenied
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
