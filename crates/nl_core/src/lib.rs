pub mod error;
pub mod query;
pub mod types;

pub use error::{Error, QueryError, Result};
pub use query::{DataStats, LookupOrigin, NewsQueries, DEFAULT_ID_LIST_LIMIT};
pub use types::*;

pub mod prelude {
    pub use crate::{
        ArticleRecord, DisplayArticle, DisplayRecommendation, Error, LookupOrigin, NewsQueries,
        QueryError, RecommendationList, Result, SummaryRecord,
    };
}
