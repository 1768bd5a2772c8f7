use serde::{Deserialize, Serialize};

pub const TITLE_UNAVAILABLE: &str = "Title Unavailable";
pub const NOT_AVAILABLE: &str = "N/A";
/// Default written into the overlay when the summary file has no summary cell.
pub const SUMMARY_NOT_AVAILABLE: &str = "Summary Not Available";
/// What callers see whenever no usable summary exists.
pub const SUMMARY_NOT_GENERATED: &str = "Summary not generated for this article.";

/// Canonical per-article metadata from the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub abstract_clean: String,
}

impl ArticleRecord {
    /// A record carrying only the id, every other field at its default.
    pub fn with_defaults(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: TITLE_UNAVAILABLE.to_string(),
            category: NOT_AVAILABLE.to_string(),
            subcategory: NOT_AVAILABLE.to_string(),
            abstract_clean: String::new(),
        }
    }
}

/// A generated summary merged against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub abstract_clean: String,
    pub summary: String,
}

impl SummaryRecord {
    /// True when the summary text is blank or still the load-time sentinel.
    pub fn summary_missing(&self) -> bool {
        self.summary.trim().is_empty() || self.summary == SUMMARY_NOT_AVAILABLE
    }
}

/// Ranked article ids for one user. Order is presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationList {
    pub user_id: String,
    pub article_ids: Vec<String>,
}

/// What the summarize view renders for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArticle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub abstract_clean: String,
    pub summary: String,
}

impl From<&SummaryRecord> for DisplayArticle {
    fn from(record: &SummaryRecord) -> Self {
        let summary = if record.summary_missing() {
            SUMMARY_NOT_GENERATED.to_string()
        } else {
            record.summary.clone()
        };
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            subcategory: record.subcategory.clone(),
            abstract_clean: record.abstract_clean.clone(),
            summary,
        }
    }
}

impl From<&ArticleRecord> for DisplayArticle {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            subcategory: record.subcategory.clone(),
            abstract_clean: record.abstract_clean.clone(),
            summary: SUMMARY_NOT_GENERATED.to_string(),
        }
    }
}

/// One slot of the recommend view. Summaries and abstracts are never shown here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecommendation {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
}

impl DisplayRecommendation {
    /// Stand-in for a recommended id the catalog does not know.
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Article {} (Details Missing)", id),
            category: NOT_AVAILABLE.to_string(),
            subcategory: NOT_AVAILABLE.to_string(),
        }
    }
}

impl From<&ArticleRecord> for DisplayRecommendation {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            subcategory: record.subcategory.clone(),
        }
    }
}
