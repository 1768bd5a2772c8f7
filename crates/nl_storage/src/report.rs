use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Loaded { entries: usize },
    Missing,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLoad {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl fmt::Display for FileLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            FileStatus::Loaded { entries } => write!(f, "{}: loaded {} entries", self.path.display(), entries),
            FileStatus::Missing => write!(f, "{}: missing", self.path.display()),
            FileStatus::Failed { reason } => write!(f, "{}: failed ({})", self.path.display(), reason),
        }
    }
}

/// What happened to each input file during a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub catalog: Option<FileLoad>,
    pub summaries: Option<FileLoad>,
    pub recommendations: Option<FileLoad>,
    pub malformed_recommendation_rows: usize,
}

impl LoadReport {
    pub fn files(&self) -> impl Iterator<Item = &FileLoad> {
        [&self.catalog, &self.summaries, &self.recommendations]
            .into_iter()
            .flatten()
    }

    /// True when every file was read.
    pub fn is_complete(&self) -> bool {
        self.files().count() == 3
            && self.files().all(|file| matches!(file.status, FileStatus::Loaded { .. }))
    }
}
