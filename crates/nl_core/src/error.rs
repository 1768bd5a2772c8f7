use std::path::PathBuf;
use thiserror::Error;

use crate::types::DisplayRecommendation;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Column '{column}' missing from {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Query-time outcomes that are not successes. These are user-facing and
/// rendered verbatim by the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{0}")]
    Validation(String),

    #[error("Article ID '{id}' not found.")]
    ArticleNotFound { id: String },

    #[error("User ID '{user_id}' not found or no recommendations available.")]
    UserNotFound { user_id: String },

    #[error("No recommendations available for User ID '{user_id}'.")]
    NoRecommendations { user_id: String },

    #[error("Found recommendations, but could not retrieve details for any recommended articles.")]
    DetailsUnavailable { user_id: String },
}

impl QueryError {
    pub fn missing_article_id() -> Self {
        Self::Validation("Please enter an Article ID.".to_string())
    }

    pub fn missing_user_id() -> Self {
        Self::Validation("Please enter a User ID.".to_string())
    }

    /// The explicit empty result set that accompanies `NoRecommendations`.
    /// Every other variant carries no results at all.
    pub fn empty_results(&self) -> Option<Vec<DisplayRecommendation>> {
        match self {
            Self::NoRecommendations { .. } => Some(Vec::new()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound { .. } | Self::UserNotFound { .. })
    }
}
