pub mod service;

pub use service::QueryService;

pub mod prelude {
    pub use super::QueryService;
    pub use nl_core::{LookupOrigin, NewsQueries, QueryError};
}
