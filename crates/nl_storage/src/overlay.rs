use nl_core::{Result, SummaryRecord, NOT_AVAILABLE, SUMMARY_NOT_AVAILABLE, TITLE_UNAVAILABLE};
use std::collections::HashMap;
use std::path::Path;

use crate::catalog::Catalog;
use crate::ingest::{read_table, Column, Table};

pub const KEY_COLUMN: &str = "id";

pub const COLUMNS: &[Column] = &[
    Column::new("title", TITLE_UNAVAILABLE),
    Column::new("abstract_clean", ""),
    Column::new("summary", SUMMARY_NOT_AVAILABLE),
    Column::new("category", NOT_AVAILABLE),
    Column::new("subcategory", NOT_AVAILABLE),
];

/// Generated summaries keyed by article id.
///
/// Descriptive fields come from the catalog whenever it knows the id; the
/// summary file's own columns are only a fallback. The summary text always
/// comes from the file.
#[derive(Debug, Clone, Default)]
pub struct SummaryOverlay {
    summaries: HashMap<String, SummaryRecord>,
    ids: Vec<String>,
}

impl SummaryOverlay {
    /// The catalog must be complete before this runs.
    pub fn load(path: &Path, catalog: &Catalog) -> Result<Self> {
        let table = read_table(path, KEY_COLUMN, COLUMNS)?;
        Ok(Self::from_table(&table, catalog))
    }

    pub fn from_table(table: &Table, catalog: &Catalog) -> Self {
        let records = table.rows.iter().map(|row| {
            let id = row.key().to_string();
            let summary = row.get("summary").to_string();
            match catalog.get(&id) {
                Some(article) => SummaryRecord {
                    id,
                    title: article.title.clone(),
                    category: article.category.clone(),
                    subcategory: article.subcategory.clone(),
                    abstract_clean: article.abstract_clean.clone(),
                    summary,
                },
                None => SummaryRecord {
                    id,
                    title: row.get("title").to_string(),
                    category: row.get("category").to_string(),
                    subcategory: row.get("subcategory").to_string(),
                    abstract_clean: row.get("abstract_clean").to_string(),
                    summary,
                },
            }
        });
        Self::from_records(records)
    }

    /// Records are taken as-is; later ids replace earlier ones but keep their
    /// first position in [`SummaryOverlay::ids`].
    pub fn from_records(records: impl IntoIterator<Item = SummaryRecord>) -> Self {
        let mut overlay = Self::default();
        for record in records {
            if !overlay.summaries.contains_key(&record.id) {
                overlay.ids.push(record.id.clone());
            }
            overlay.summaries.insert(record.id.clone(), record);
        }
        overlay
    }

    pub fn get(&self, id: &str) -> Option<&SummaryRecord> {
        self.summaries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.summaries.contains_key(id)
    }

    /// Distinct ids in file order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
