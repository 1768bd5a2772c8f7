use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/:id", get(handlers::get_article))
        .route(
            "/api/summarize",
            get(handlers::summarize_page).post(handlers::summarize_submit),
        )
        .route("/api/users", get(handlers::list_users))
        .route(
            "/api/recommend",
            get(handlers::recommend_page).post(handlers::recommend_submit),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves the app until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

pub mod prelude {
    pub use crate::AppState;
    pub use nl_core::{DisplayArticle, DisplayRecommendation, NewsQueries, QueryError};
}
