use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use sightstack::app::router;
use sightstack::config::SearchSettings;
use sightstack::search::engine::QuestionService;
use sightstack::storage::fixtures::{AnswerFixture, Fixture, QuestionFixture, TrendFixture};
use sightstack::storage::memory::MemoryStore;
use sightstack::trends::engine::TrendService;

fn test_app() -> Router {
    let store = MemoryStore::new();
    let fixture = Fixture {
        questions: vec![
            QuestionFixture {
                id: "1".to_string(),
                title: Some("A category theory primer".to_string()),
                tags: vec!["haskell".to_string(), "database".to_string()],
                creation_date: Some("2024-01-02T03:04:05".to_string()),
                answers: vec![
                    AnswerFixture {
                        id: "low".to_string(),
                        score: 200,
                        owner_reputation: 500,
                        ..Default::default()
                    },
                    AnswerFixture {
                        id: "s50".to_string(),
                        score: 50,
                        owner_reputation: 2000,
                        ..Default::default()
                    },
                    AnswerFixture {
                        id: "accepted".to_string(),
                        score: 1,
                        is_accepted: true,
                        ..Default::default()
                    },
                    AnswerFixture {
                        id: "s100".to_string(),
                        score: 100,
                        owner_reputation: 2000,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            QuestionFixture {
                id: "2".to_string(),
                title: Some("Concatenating strings in Go".to_string()),
                tags: vec!["golang".to_string()],
                ..Default::default()
            },
        ],
        trends: vec![TrendFixture {
            tag: "golang".to_string(),
            period: "day".to_string(),
            counts: vec![2, 4, 8],
        }],
    };
    fixture.apply(&store, "qna").unwrap();

    let settings = SearchSettings {
        table: "qna".to_string(),
        max_results: 50,
        max_suggestions: 10,
    };
    let questions = QuestionService::new(store.clone(), settings);
    let trends = TrendService::new(store, "qna");
    router(questions, trends)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn search_by_text_and_tag() {
    let (status, json) = get("/search?q=cat&tags=db").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalResults"], 1);
    assert_eq!(json["results"][0]["id"], "1");

    let answer_ids: Vec<&str> = json["results"][0]["answers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(answer_ids, vec!["accepted", "s100", "s50"]);
}

#[tokio::test]
async fn search_without_filters_returns_everything() {
    let (status, json) = get("/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalResults"], 2);
    assert!(json["searchTimeMs"].is_u64());
}

#[tokio::test]
async fn search_with_blank_tags_ignores_them() {
    let (_, json) = get("/search?tags=,,&limit=1").await;

    assert_eq!(json["totalResults"], 1);
}

#[tokio::test]
async fn suggest_needs_two_characters() {
    let (status, json) = get("/search/suggest?prefix=C").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));

    let (_, json) = get("/search/suggest?prefix=Con").await;
    assert_eq!(json, serde_json::json!(["Concatenating strings in Go"]));
}

#[tokio::test]
async fn question_lookup() {
    let (status, json) = get("/questions/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["creationDate"], "2024-01-02T03:04:05");
    assert_eq!(json["answers"].as_array().unwrap().len(), 3);

    let (status, _) = get("/questions/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trend_series_shape() {
    let (status, json) = get("/trends?tag=golang").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["period"], "day");
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 24);
    assert_eq!(data[0]["count"], 2);
    assert_eq!(data[2]["count"], 8);
    assert_eq!(data[3]["count"], 0);
}

#[tokio::test]
async fn trend_rejects_unknown_period() {
    let (status, _) = get("/trends?tag=golang&period=week").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = get("/trends?tag=golang&period=HOUR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 60);
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, json) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
