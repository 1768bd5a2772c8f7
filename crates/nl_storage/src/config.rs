use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CATALOG_FILE: &str = "cleaned_articles.csv";
pub const DEFAULT_SUMMARIES_FILE: &str = "summarized_articles_t5.csv";
pub const DEFAULT_RECOMMENDATIONS_FILE: &str = "bert_faiss_recommendations.csv";

/// Where the three input tables live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub catalog_file: String,
    pub summaries_file: String,
    pub recommendations_file: String,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_catalog_file(mut self, file: impl Into<String>) -> Self {
        self.catalog_file = file.into();
        self
    }

    pub fn with_summaries_file(mut self, file: impl Into<String>) -> Self {
        self.summaries_file = file.into();
        self
    }

    pub fn with_recommendations_file(mut self, file: impl Into<String>) -> Self {
        self.recommendations_file = file.into();
        self
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn summaries_path(&self) -> PathBuf {
        self.data_dir.join(&self.summaries_file)
    }

    pub fn recommendations_path(&self) -> PathBuf {
        self.data_dir.join(&self.recommendations_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
            summaries_file: DEFAULT_SUMMARIES_FILE.to_string(),
            recommendations_file: DEFAULT_RECOMMENDATIONS_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = DataConfig::default();
        assert_eq!(config.catalog_path(), PathBuf::from("data/cleaned_articles.csv"));
        assert_eq!(config.summaries_path(), PathBuf::from("data/summarized_articles_t5.csv"));
        assert_eq!(
            config.recommendations_path(),
            PathBuf::from("data/bert_faiss_recommendations.csv")
        );
    }

    #[test]
    fn test_overrides() {
        let config = DataConfig::new("/srv/news").with_summaries_file("bart.csv");
        assert_eq!(config.summaries_path(), PathBuf::from("/srv/news/bart.csv"));
        assert_eq!(config.catalog_path(), PathBuf::from("/srv/news/cleaned_articles.csv"));
    }
}
