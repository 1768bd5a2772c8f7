use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use chrono::{DateTime, Utc};
use nl_core::{
    DisplayArticle, DisplayRecommendation, LookupOrigin, QueryError, DEFAULT_ID_LIST_LIMIT,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

impl ListParams {
    fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_ID_LIST_LIMIT).min(DEFAULT_ID_LIST_LIMIT)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    pub article_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserParams {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub loaded_at: DateTime<Utc>,
    pub articles: usize,
    pub summaries: usize,
    pub users: usize,
}

/// Everything the summarize page renders.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizePage {
    pub article_id_input: Option<String>,
    pub article: Option<DisplayArticle>,
    pub error: Option<String>,
    pub available_article_ids: Vec<String>,
}

/// Everything the recommend page renders. `recommendations` is `Some(vec![])`
/// for a known user with nothing ranked and `None` when there is no result.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendPage {
    pub user_id_input: Option<String>,
    pub recommendations: Option<Vec<DisplayRecommendation>>,
    pub error: Option<String>,
    pub available_user_ids: Vec<String>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.queries.stats();
    Json(Health {
        status: "ok".to_string(),
        loaded_at: stats.loaded_at,
        articles: stats.articles,
        summaries: stats.summaries,
        users: stats.users,
    })
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    Json(state.queries.known_article_ids(params.limit()))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    Json(state.queries.known_user_ids(params.limit()))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.queries.lookup_article(&id, LookupOrigin::Link) {
        Ok(Some(article)) => (StatusCode::OK, Json(json!(article))),
        Ok(None) | Err(QueryError::ArticleNotFound { .. }) => {
            let message = QueryError::ArticleNotFound { id }.to_string();
            (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
        }
        Err(e) => (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))),
    }
}

pub async fn summarize_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArticleParams>,
) -> impl IntoResponse {
    Json(summarize(&state, params.article_id, LookupOrigin::Browse))
}

pub async fn summarize_submit(
    State(state): State<Arc<AppState>>,
    Form(params): Form<ArticleParams>,
) -> impl IntoResponse {
    Json(summarize(&state, params.article_id, LookupOrigin::Submit))
}

fn summarize(state: &AppState, article_id: Option<String>, origin: LookupOrigin) -> SummarizePage {
    let input = article_id.map(|id| id.trim().to_string());
    debug!("Summarize lookup {:?} ({:?})", input, origin);

    let (article, error) =
        match state.queries.lookup_article(input.as_deref().unwrap_or(""), origin) {
            Ok(article) => (article, None),
            Err(e) => (None, Some(e.to_string())),
        };

    SummarizePage {
        article_id_input: input,
        article,
        error,
        available_article_ids: state.queries.known_article_ids(DEFAULT_ID_LIST_LIMIT),
    }
}

pub async fn recommend_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> impl IntoResponse {
    // A plain visit shows the bare form.
    match params.user_id {
        Some(user_id) if !user_id.trim().is_empty() => Json(recommend(&state, user_id)),
        _ => Json(RecommendPage {
            user_id_input: None,
            recommendations: None,
            error: None,
            available_user_ids: state.queries.known_user_ids(DEFAULT_ID_LIST_LIMIT),
        }),
    }
}

pub async fn recommend_submit(
    State(state): State<Arc<AppState>>,
    Form(params): Form<UserParams>,
) -> impl IntoResponse {
    Json(recommend(&state, params.user_id.unwrap_or_default()))
}

fn recommend(state: &AppState, user_id: String) -> RecommendPage {
    let input = user_id.trim().to_string();
    debug!("Recommend lookup {:?}", input);

    let (recommendations, error) = match state.queries.lookup_recommendations(&input) {
        Ok(recommendations) => (Some(recommendations), None),
        Err(e) => (e.empty_results(), Some(e.to_string())),
    };

    RecommendPage {
        user_id_input: Some(input),
        recommendations,
        error,
        available_user_ids: state.queries.known_user_ids(DEFAULT_ID_LIST_LIMIT),
    }
}
