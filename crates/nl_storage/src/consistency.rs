//! Cross-checks the recommendations against the catalog and the summaries.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::snapshot::Snapshot;

/// Missing-id lists are cut to this many entries.
pub const SAMPLE_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub recommended_articles: usize,
    pub summarized_articles: usize,
    pub catalog_articles: usize,
    /// Recommended ids the catalog does not know; these render as placeholders.
    pub missing_from_catalog: usize,
    pub missing_from_catalog_sample: Vec<String>,
    /// Recommended ids with no generated summary.
    pub missing_summary: usize,
    /// The subset of `missing_summary` that has no catalog details either.
    pub missing_summary_and_details: usize,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_from_catalog == 0
    }
}

pub fn check(snapshot: &Snapshot) -> ConsistencyReport {
    let recommended: BTreeSet<&str> = snapshot.index.article_ids().collect();

    let missing_from_catalog: Vec<&str> = recommended
        .iter()
        .copied()
        .filter(|id| !snapshot.catalog.contains(id))
        .collect();
    let missing_summary: Vec<&str> = recommended
        .iter()
        .copied()
        .filter(|id| !snapshot.overlay.contains(id))
        .collect();
    let missing_summary_and_details = missing_summary
        .iter()
        .filter(|id| !snapshot.catalog.contains(id))
        .count();

    ConsistencyReport {
        recommended_articles: recommended.len(),
        summarized_articles: snapshot.overlay.len(),
        catalog_articles: snapshot.catalog.len(),
        missing_from_catalog: missing_from_catalog.len(),
        missing_from_catalog_sample: missing_from_catalog
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|id| id.to_string())
            .collect(),
        missing_summary: missing_summary.len(),
        missing_summary_and_details,
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total unique articles in recommendations: {}", self.recommended_articles)?;
        writeln!(f, "Total unique articles with summaries: {}", self.summarized_articles)?;
        writeln!(f, "Total unique articles in catalog: {}", self.catalog_articles)?;

        if self.missing_from_catalog > 0 {
            writeln!(
                f,
                "\nWARNING: {} recommended article IDs are missing from the catalog:",
                self.missing_from_catalog
            )?;
            writeln!(f, "{:?}", self.missing_from_catalog_sample)?;
        } else {
            writeln!(f, "\nGOOD: All recommended article IDs are present in the catalog.")?;
        }

        if self.missing_summary > 0 {
            writeln!(
                f,
                "\nINFO: {} recommended article IDs have no summary.",
                self.missing_summary
            )?;
            if self.missing_summary_and_details > 0 {
                writeln!(
                    f,
                    "  {} of these are also missing from the catalog and will show placeholder details.",
                    self.missing_summary_and_details
                )?;
            } else {
                writeln!(f, "  All of these still have basic details in the catalog.")?;
            }
        } else {
            writeln!(f, "\nGOOD: All recommended article IDs have summaries.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, RecommendationIndex, SummaryOverlay};
    use nl_core::{ArticleRecord, RecommendationList, SummaryRecord};

    fn summary(id: &str) -> SummaryRecord {
        SummaryRecord {
            id: id.to_string(),
            title: "t".to_string(),
            category: "c".to_string(),
            subcategory: "s".to_string(),
            abstract_clean: String::new(),
            summary: "text".to_string(),
        }
    }

    #[test]
    fn test_counts_missing_references() {
        let catalog = Catalog::from_records(["1", "2", "3"].map(ArticleRecord::with_defaults));
        let overlay = SummaryOverlay::from_records(vec![summary("1")]);
        let index = RecommendationIndex::from_lists(vec![
            RecommendationList {
                user_id: "u1".to_string(),
                article_ids: vec!["1".to_string(), "2".to_string(), "9".to_string()],
            },
            RecommendationList {
                user_id: "u2".to_string(),
                article_ids: vec!["9".to_string(), "8".to_string()],
            },
        ]);
        let report = check(&Snapshot::from_parts(catalog, overlay, index));

        assert_eq!(report.recommended_articles, 4);
        assert_eq!(report.catalog_articles, 3);
        assert_eq!(report.missing_from_catalog, 2);
        assert_eq!(report.missing_from_catalog_sample, vec!["8", "9"]);
        assert_eq!(report.missing_summary, 3);
        assert_eq!(report.missing_summary_and_details, 2);
        assert!(!report.is_consistent());
        assert!(report.to_string().contains("WARNING: 2 recommended"));
    }

    #[test]
    fn test_empty_snapshot_is_consistent() {
        let snapshot = Snapshot::from_parts(
            Catalog::default(),
            SummaryOverlay::default(),
            RecommendationIndex::default(),
        );
        let report = check(&snapshot);
        assert!(report.is_consistent());
        assert_eq!(report.recommended_articles, 0);
    }
}
