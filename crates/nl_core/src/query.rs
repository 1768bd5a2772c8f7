use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::types::{DisplayArticle, DisplayRecommendation};

/// Cap applied to id lists handed to the presentation layer.
pub const DEFAULT_ID_LIST_LIMIT: usize = 200;

/// Where an article lookup came from. Decides what a blank id means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupOrigin {
    /// Page visit with an optional id: blank means "show the bare form".
    Browse,
    /// Form submission: blank is a validation error.
    Submit,
    /// Direct link that always names an id: blank is not found.
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStats {
    pub articles: usize,
    pub summaries: usize,
    pub users: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Read-only lookups consumed by the presentation layer.
pub trait NewsQueries: Send + Sync {
    /// `Ok(None)` means there was nothing to look up.
    fn lookup_article(
        &self,
        article_id: &str,
        origin: LookupOrigin,
    ) -> Result<Option<DisplayArticle>, QueryError>;

    /// Recommendations in rank order, one entry per recommended id.
    fn lookup_recommendations(&self, user_id: &str) -> Result<Vec<DisplayRecommendation>, QueryError>;

    /// Distinct article ids from the summary file, in file order.
    fn known_article_ids(&self, limit: usize) -> Vec<String>;

    /// Distinct user ids from the recommendations file, in file order.
    fn known_user_ids(&self, limit: usize) -> Vec<String>;

    fn stats(&self) -> DataStats;
}
