use nl_core::{
    DataStats, DisplayArticle, DisplayRecommendation, LookupOrigin, NewsQueries, QueryError,
};
use nl_storage::Snapshot;
use std::sync::Arc;
use tracing::debug;

/// Read-only lookups over a loaded [`Snapshot`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct QueryService {
    snapshot: Arc<Snapshot>,
}

impl QueryService {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl From<Snapshot> for QueryService {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(Arc::new(snapshot))
    }
}

impl NewsQueries for QueryService {
    fn lookup_article(
        &self,
        article_id: &str,
        origin: LookupOrigin,
    ) -> Result<Option<DisplayArticle>, QueryError> {
        let id = article_id.trim();
        if id.is_empty() {
            return match origin {
                LookupOrigin::Browse => Ok(None),
                LookupOrigin::Submit => Err(QueryError::missing_article_id()),
                LookupOrigin::Link => Err(QueryError::ArticleNotFound { id: article_id.to_string() }),
            };
        }

        if let Some(record) = self.snapshot.overlay.get(id) {
            debug!("Article '{}' served from summaries", id);
            return Ok(Some(DisplayArticle::from(record)));
        }
        if let Some(record) = self.snapshot.catalog.get(id) {
            debug!("Article '{}' served from catalog without summary", id);
            return Ok(Some(DisplayArticle::from(record)));
        }

        debug!("Article '{}' not found", id);
        Err(QueryError::ArticleNotFound { id: id.to_string() })
    }

    fn lookup_recommendations(&self, user_id: &str) -> Result<Vec<DisplayRecommendation>, QueryError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(QueryError::missing_user_id());
        }

        let article_ids = self
            .snapshot
            .index
            .get(user_id)
            .ok_or_else(|| QueryError::UserNotFound { user_id: user_id.to_string() })?;
        if article_ids.is_empty() {
            return Err(QueryError::NoRecommendations { user_id: user_id.to_string() });
        }

        let recommendations: Vec<DisplayRecommendation> = article_ids
            .iter()
            .map(|id| match self.snapshot.catalog.get(id) {
                Some(article) => DisplayRecommendation::from(article),
                None => {
                    debug!("Recommended article '{}' missing from catalog", id);
                    DisplayRecommendation::placeholder(id)
                }
            })
            .collect();

        // Unreachable while placeholders fill every slot.
        if recommendations.is_empty() {
            return Err(QueryError::DetailsUnavailable { user_id: user_id.to_string() });
        }
        Ok(recommendations)
    }

    fn known_article_ids(&self, limit: usize) -> Vec<String> {
        self.snapshot.overlay.ids().iter().take(limit).cloned().collect()
    }

    fn known_user_ids(&self, limit: usize) -> Vec<String> {
        self.snapshot.index.user_ids().iter().take(limit).cloned().collect()
    }

    fn stats(&self) -> DataStats {
        DataStats {
            articles: self.snapshot.catalog.len(),
            summaries: self.snapshot.overlay.len(),
            users: self.snapshot.index.len(),
            loaded_at: self.snapshot.loaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_core::{
        ArticleRecord, RecommendationList, SummaryRecord, DEFAULT_ID_LIST_LIMIT, SUMMARY_NOT_AVAILABLE,
        SUMMARY_NOT_GENERATED,
    };
    use nl_storage::{Catalog, RecommendationIndex, SummaryOverlay};

    fn article(id: &str, title: &str, category: &str) -> ArticleRecord {
        ArticleRecord {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            subcategory: "general".to_string(),
            abstract_clean: format!("abstract of {}", id),
        }
    }

    fn summary(id: &str, text: &str) -> SummaryRecord {
        SummaryRecord {
            id: id.to_string(),
            title: format!("Title {}", id),
            category: "news".to_string(),
            subcategory: "general".to_string(),
            abstract_clean: String::new(),
            summary: text.to_string(),
        }
    }

    fn list(user_id: &str, ids: &[&str]) -> RecommendationList {
        RecommendationList {
            user_id: user_id.to_string(),
            article_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn service() -> QueryService {
        let catalog = Catalog::from_records(vec![
            article("10", "A", "news"),
            article("11", "B", "sports"),
            article("12", "C", "finance"),
        ]);
        let overlay = SummaryOverlay::from_records(vec![
            summary("11", "B in brief."),
            summary("12", ""),
            summary("13", SUMMARY_NOT_AVAILABLE),
        ]);
        let index = RecommendationIndex::from_lists(vec![
            list("5", &[]),
            list("7", &["12", "404", "10"]),
        ]);
        QueryService::from(Snapshot::from_parts(catalog, overlay, index))
    }

    #[test]
    fn test_catalog_only_article() {
        let article = service()
            .lookup_article("10", LookupOrigin::Submit)
            .unwrap()
            .unwrap();
        assert_eq!(article.title, "A");
        assert_eq!(article.category, "news");
        assert_eq!(article.summary, SUMMARY_NOT_GENERATED);
    }

    #[test]
    fn test_summary_preferred_and_normalized() {
        let service = service();
        let found = service.lookup_article(" 11 ", LookupOrigin::Browse).unwrap().unwrap();
        assert_eq!(found.summary, "B in brief.");

        for id in ["12", "13"] {
            let found = service.lookup_article(id, LookupOrigin::Link).unwrap().unwrap();
            assert_eq!(found.summary, SUMMARY_NOT_GENERATED);
        }
    }

    #[test]
    fn test_every_catalog_id_resolves() {
        let service = service();
        let ids: Vec<String> = service.snapshot().catalog.ids().map(str::to_string).collect();
        for id in ids {
            assert!(service.lookup_article(&id, LookupOrigin::Submit).is_ok());
        }
    }

    #[test]
    fn test_blank_article_id_depends_on_origin() {
        let service = service();
        assert_eq!(service.lookup_article("  ", LookupOrigin::Browse), Ok(None));
        assert_eq!(
            service.lookup_article("", LookupOrigin::Submit),
            Err(QueryError::missing_article_id())
        );
        assert!(matches!(
            service.lookup_article("", LookupOrigin::Link),
            Err(QueryError::ArticleNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_article() {
        let err = service().lookup_article("999", LookupOrigin::Submit).unwrap_err();
        assert_eq!(err, QueryError::ArticleNotFound { id: "999".to_string() });
        assert_eq!(err.to_string(), "Article ID '999' not found.");
    }

    #[test]
    fn test_recommendations_keep_rank_and_fill_gaps() {
        let recommendations = service().lookup_recommendations("7").unwrap();
        let ids: Vec<&str> = recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["12", "404", "10"]);

        assert_eq!(recommendations[0].title, "C");
        assert_eq!(recommendations[1].title, "Article 404 (Details Missing)");
        assert_eq!(recommendations[1].category, "N/A");
        assert_eq!(recommendations[1].subcategory, "N/A");
        assert_eq!(recommendations[2].category, "news");
    }

    #[test]
    fn test_empty_versus_unknown_user() {
        let service = service();

        let empty = service.lookup_recommendations("5").unwrap_err();
        assert_eq!(empty, QueryError::NoRecommendations { user_id: "5".to_string() });
        assert_eq!(empty.empty_results(), Some(vec![]));

        let unknown = service.lookup_recommendations("6").unwrap_err();
        assert_eq!(unknown, QueryError::UserNotFound { user_id: "6".to_string() });
        assert_eq!(unknown.empty_results(), None);

        assert_eq!(
            service.lookup_recommendations(" "),
            Err(QueryError::missing_user_id())
        );
    }

    #[test]
    fn test_known_ids_are_capped() {
        let lists = (0..250).map(|i| list(&i.to_string(), &["1"]));
        let service = QueryService::from(Snapshot::from_parts(
            Catalog::default(),
            SummaryOverlay::default(),
            RecommendationIndex::from_lists(lists),
        ));
        let ids = service.known_user_ids(DEFAULT_ID_LIST_LIMIT);
        assert_eq!(ids.len(), 200);
        assert_eq!(ids[0], "0");
        assert_eq!(ids[199], "199");
        assert!(service.known_article_ids(DEFAULT_ID_LIST_LIMIT).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = service().stats();
        assert_eq!(stats.articles, 3);
        assert_eq!(stats.summaries, 3);
        assert_eq!(stats.users, 2);
    }
}
