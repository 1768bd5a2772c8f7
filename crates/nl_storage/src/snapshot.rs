use chrono::{DateTime, Utc};
use nl_core::Error;
use std::path::Path;
use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::config::DataConfig;
use crate::overlay::SummaryOverlay;
use crate::recommendations::RecommendationIndex;
use crate::report::{FileLoad, FileStatus, LoadReport};

/// Everything the query layer reads, built once and never mutated.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub catalog: Catalog,
    pub overlay: SummaryOverlay,
    pub index: RecommendationIndex,
    pub loaded_at: DateTime<Utc>,
    pub report: LoadReport,
}

impl Snapshot {
    /// Loads all three tables. A missing or unreadable file leaves its
    /// structure empty; this never fails.
    pub fn load(config: &DataConfig) -> Self {
        info!("📂 Loading data from {}", config.data_dir().display());
        let mut report = LoadReport::default();

        let catalog_path = config.catalog_path();
        let (catalog, status) = settle(&catalog_path, Catalog::load(&catalog_path), Catalog::len);
        if let FileStatus::Missing = status {
            warn!("Recommender and summarizer fallback will have limited functionality");
        }
        report.catalog = Some(FileLoad { path: catalog_path, status });

        let summaries_path = config.summaries_path();
        let (overlay, status) = settle(
            &summaries_path,
            SummaryOverlay::load(&summaries_path, &catalog),
            SummaryOverlay::len,
        );
        if let FileStatus::Missing = status {
            warn!("Summaries unavailable; article lookups fall back to the catalog");
        }
        report.summaries = Some(FileLoad { path: summaries_path, status });

        let recommendations_path = config.recommendations_path();
        let (index, status) = settle(
            &recommendations_path,
            RecommendationIndex::load(&recommendations_path),
            RecommendationIndex::len,
        );
        if let FileStatus::Missing = status {
            warn!("Recommendations unavailable; every user lookup will report not found");
        }
        report.recommendations = Some(FileLoad { path: recommendations_path, status });
        report.malformed_recommendation_rows = index.malformed_rows();

        info!(
            "✨ Data loaded: {} articles, {} summaries, {} users",
            catalog.len(),
            overlay.len(),
            index.len()
        );

        Self {
            catalog,
            overlay,
            index,
            loaded_at: Utc::now(),
            report,
        }
    }

    /// In-memory snapshot with no file provenance.
    pub fn from_parts(catalog: Catalog, overlay: SummaryOverlay, index: RecommendationIndex) -> Self {
        Self {
            catalog,
            overlay,
            index,
            loaded_at: Utc::now(),
            report: LoadReport::default(),
        }
    }
}

/// Absorbs a file-level load error into an empty structure and a status.
fn settle<T: Default>(path: &Path, result: nl_core::Result<T>, len: fn(&T) -> usize) -> (T, FileStatus) {
    match result {
        Ok(value) => {
            let entries = len(&value);
            info!("Loaded {} entries from '{}'", entries, path.display());
            (value, FileStatus::Loaded { entries })
        }
        Err(Error::MissingFile { .. }) => {
            warn!("'{}' not found", path.display());
            (T::default(), FileStatus::Missing)
        }
        Err(e) => {
            error!("Error loading '{}': {}", path.display(), e);
            (T::default(), FileStatus::Failed { reason: e.to_string() })
        }
    }
}
