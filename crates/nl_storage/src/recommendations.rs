use nl_core::{RecommendationList, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::ingest::{read_table, Column, Table};
use crate::literal::decode_list;

pub const KEY_COLUMN: &str = "user_id";
pub const LIST_COLUMN: &str = "recommended_news_ids";

pub const COLUMNS: &[Column] = &[Column::new(LIST_COLUMN, "[]")];

/// User id to ranked article ids.
#[derive(Debug, Clone, Default)]
pub struct RecommendationIndex {
    lists: HashMap<String, Vec<String>>,
    user_ids: Vec<String>,
    malformed_rows: usize,
}

impl RecommendationIndex {
    pub fn load(path: &Path) -> Result<Self> {
        let table = read_table(path, KEY_COLUMN, COLUMNS)?;
        Ok(Self::from_table(&table))
    }

    /// A row whose list does not decode keeps its user with no recommendations.
    pub fn from_table(table: &Table) -> Self {
        let mut malformed_rows = 0;
        let lists: Vec<RecommendationList> = table
            .rows
            .iter()
            .map(|row| {
                let article_ids = match decode_list(row.get(LIST_COLUMN)) {
                    Ok(ids) => ids,
                    Err(e) => {
                        warn!(
                            "User '{}' in {}: {}; treating as no recommendations",
                            row.key(),
                            table.path.display(),
                            e
                        );
                        malformed_rows += 1;
                        Vec::new()
                    }
                };
                RecommendationList {
                    user_id: row.key().to_string(),
                    article_ids,
                }
            })
            .collect();

        let mut index = Self::from_lists(lists);
        index.malformed_rows = malformed_rows;
        index
    }

    pub fn from_lists(lists: impl IntoIterator<Item = RecommendationList>) -> Self {
        let mut index = Self::default();
        for list in lists {
            if !index.lists.contains_key(&list.user_id) {
                index.user_ids.push(list.user_id.clone());
            }
            index.lists.insert(list.user_id, list.article_ids);
        }
        index
    }

    /// `None` when the user is unknown, `Some(&[])` when known with nothing ranked.
    pub fn get(&self, user_id: &str) -> Option<&[String]> {
        self.lists.get(user_id).map(Vec::as_slice)
    }

    /// Distinct user ids in file order.
    pub fn user_ids(&self) -> &[String] {
        &self.user_ids
    }

    /// Every recommended article id across all users.
    pub fn article_ids(&self) -> impl Iterator<Item = &str> {
        self.lists.values().flatten().map(String::as_str)
    }

    pub fn malformed_rows(&self) -> usize {
        self.malformed_rows
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
