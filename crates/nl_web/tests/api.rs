use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use nl_core::{ArticleRecord, RecommendationList, SummaryRecord};
use nl_query::QueryService;
use nl_storage::{Catalog, RecommendationIndex, Snapshot, SummaryOverlay};
use nl_web::{create_app, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

async fn app() -> Router {
    let catalog = Catalog::from_records(vec![
        ArticleRecord {
            id: "10".to_string(),
            title: "A".to_string(),
            category: "news".to_string(),
            subcategory: "world".to_string(),
            abstract_clean: "abstract".to_string(),
        },
        ArticleRecord::with_defaults("11"),
    ]);
    let overlay = SummaryOverlay::from_records(vec![SummaryRecord {
        id: "11".to_string(),
        title: "Title Unavailable".to_string(),
        category: "N/A".to_string(),
        subcategory: "N/A".to_string(),
        abstract_clean: String::new(),
        summary: "Short version.".to_string(),
    }]);
    let index = RecommendationIndex::from_lists(vec![
        RecommendationList {
            user_id: "5".to_string(),
            article_ids: vec![],
        },
        RecommendationList {
            user_id: "7".to_string(),
            article_ids: vec!["11".to_string(), "99".to_string()],
        },
    ]);
    let service = QueryService::from(Snapshot::from_parts(catalog, overlay, index));
    create_app(AppState::new(Arc::new(service))).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().await.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["articles"], 2);
    assert_eq!(body["users"], 2);
}

#[tokio::test]
async fn test_article_link() {
    let (status, body) = send(get("/api/articles/10")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "A");
    assert_eq!(body["summary"], "Summary not generated for this article.");

    let (status, body) = send(get("/api/articles/404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Article ID '404' not found.");
}

#[tokio::test]
async fn test_summarize_bare_page_and_validation() {
    let (_, body) = send(get("/api/summarize")).await;
    assert!(body["error"].is_null());
    assert!(body["article"].is_null());
    assert_eq!(body["available_article_ids"], serde_json::json!(["11"]));

    let (_, body) = send(post_form("/api/summarize", "article_id=+")).await;
    assert_eq!(body["error"], "Please enter an Article ID.");
}

#[tokio::test]
async fn test_summarize_submit() {
    let (_, body) = send(post_form("/api/summarize", "article_id=11")).await;
    assert_eq!(body["article_id_input"], "11");
    assert_eq!(body["article"]["summary"], "Short version.");
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn test_recommend_outcomes() {
    let (_, body) = send(post_form("/api/recommend", "user_id=7")).await;
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["id"], "11");
    assert_eq!(recommendations[1]["title"], "Article 99 (Details Missing)");
    assert!(recommendations[0].get("summary").is_none());

    let (_, body) = send(post_form("/api/recommend", "user_id=5")).await;
    assert_eq!(body["recommendations"], serde_json::json!([]));
    assert_eq!(body["error"], "No recommendations available for User ID '5'.");

    let (_, body) = send(get("/api/recommend?user_id=6")).await;
    assert!(body["recommendations"].is_null());
    assert_eq!(
        body["error"],
        "User ID '6' not found or no recommendations available."
    );

    let (_, body) = send(post_form("/api/recommend", "user_id=")).await;
    assert_eq!(body["error"], "Please enter a User ID.");
}

#[tokio::test]
async fn test_user_list_limit() {
    let (_, body) = send(get("/api/users?limit=1")).await;
    assert_eq!(body, serde_json::json!(["5"]));
}
