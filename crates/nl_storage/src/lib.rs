pub mod catalog;
pub mod config;
pub mod consistency;
pub mod ingest;
pub mod literal;
pub mod overlay;
pub mod recommendations;
pub mod report;
pub mod snapshot;

pub use catalog::Catalog;
pub use config::DataConfig;
pub use consistency::ConsistencyReport;
pub use overlay::SummaryOverlay;
pub use recommendations::RecommendationIndex;
pub use report::{FileLoad, FileStatus, LoadReport};
pub use snapshot::Snapshot;

pub mod prelude {
    pub use super::{Catalog, DataConfig, RecommendationIndex, Snapshot, SummaryOverlay};
}
