use nl_core::{ArticleRecord, Result, NOT_AVAILABLE, TITLE_UNAVAILABLE};
use std::collections::HashMap;
use std::path::Path;

use crate::ingest::{read_table, Column, Table};

pub const KEY_COLUMN: &str = "id";

pub const COLUMNS: &[Column] = &[
    Column::new("title", TITLE_UNAVAILABLE),
    Column::new("category", NOT_AVAILABLE),
    Column::new("subcategory", NOT_AVAILABLE),
    Column::new("abstract_clean", ""),
];

/// Article id to canonical metadata. Authoritative for every display field
/// except the summary text.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    articles: HashMap<String, ArticleRecord>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let table = read_table(path, KEY_COLUMN, COLUMNS)?;
        Ok(Self::from_table(&table))
    }

    /// Later rows replace earlier ones with the same id.
    pub fn from_table(table: &Table) -> Self {
        Self::from_records(table.rows.iter().map(|row| ArticleRecord {
            id: row.key().to_string(),
            title: row.get("title").to_string(),
            category: row.get("category").to_string(),
            subcategory: row.get("subcategory").to_string(),
            abstract_clean: row.get("abstract_clean").to_string(),
        }))
    }

    pub fn from_records(records: impl IntoIterator<Item = ArticleRecord>) -> Self {
        let articles = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self { articles }
    }

    pub fn get(&self, id: &str) -> Option<&ArticleRecord> {
        self.articles.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.articles.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.articles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
