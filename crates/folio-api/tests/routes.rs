use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use folio_api::router;
use folio_api::state::{ApiConfig, AppState, AppStateInner, OrphanContactPolicy};

fn app_with(config: ApiConfig) -> (Router, AppState) {
    let state = AppStateInner::new(config);
    (router(state.clone()), state)
}

fn app() -> (Router, AppState) {
    app_with(ApiConfig::default())
}

fn ada() -> Value {
    json!({
        "name": "Ada",
        "shortBio": "Engineer",
        "projects": [{ "title": "X", "description": "Y" }],
        "socialMedia": []
    })
}

fn contact(portfolio_id: Value) -> Value {
    json!({
        "portfolioId": portfolio_id,
        "name": "Grace",
        "email": "grace@example.com",
        "message": "Loved the notes."
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

async fn post(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn first_portfolio_gets_id_one() {
    let (app, _) = app();
    let (status, body) = post(&app, "/api/portfolio", &ada()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["portfolioId"], 1);
    assert_eq!(body["message"], "Portfolio saved successfully");

    let (_, body) = post(&app, "/api/portfolio", &ada()).await;
    assert_eq!(body["portfolioId"], 2);
}

#[tokio::test]
async fn empty_project_list_is_rejected() {
    let (app, state) = app();
    let mut payload = ada();
    payload["projects"] = json!([]);

    let (status, body) = post(&app, "/api/portfolio", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("project"));
    assert_eq!(body["errors"][0]["field"], "projects");
    assert_eq!(state.db.counts().unwrap().portfolios, 0);
}

#[tokio::test]
async fn validation_reports_every_failing_field() {
    let (app, _) = app();
    let payload = json!({
        "shortBio": "",
        "profilePicture": "not a url",
        "projects": [{ "title": "", "description": "ok" }],
        "socialMedia": [{ "name": "Site", "url": "nope" }],
        "contactEmail": "nobody"
    });

    let (status, body) = post(&app, "/api/portfolio", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec![
            "name",
            "shortBio",
            "profilePicture",
            "projects[0].title",
            "socialMedia[0].url",
            "contactEmail",
        ]
    );
}

#[tokio::test]
async fn stored_portfolio_is_returned_as_submitted() {
    let (app, _) = app();
    let payload = json!({
        "name": "Ada",
        "shortBio": "Engineer",
        "fullBio": "Long form",
        "profilePicture": "",
        "skills": "Math, Engines",
        "interests": "Poetry",
        "projects": [
            { "title": "B", "description": "second", "image": "https://img.example/b.png", "github": "" },
            { "title": "A", "description": "first" }
        ],
        "socialMedia": [{ "name": "GitHub", "url": "https://github.com/ada" }],
        "contactEmail": "ada@example.com"
    });

    let (_, saved) = post(&app, "/api/portfolio", &payload).await;
    let id = saved["portfolioId"].as_i64().unwrap();

    let (status, body) = get(&app, &format!("/api/portfolio/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn unknown_portfolio_is_not_found() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/portfolio/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Portfolio not found");
}

#[tokio::test]
async fn malformed_portfolio_id_is_bad_request() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/portfolio/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid portfolio ID");
}

#[tokio::test]
async fn contact_ids_increase_per_message() {
    let (app, state) = app();
    post(&app, "/api/portfolio", &ada()).await;

    let before = chrono::Utc::now();
    let (status, body) = post(&app, "/api/contact", &contact(json!(1))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["contactId"], 1);
    assert_eq!(body["message"], "Message sent successfully");

    let (status, body) = post(&app, "/api/contact", &contact(json!("1"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["contactId"], 2);
    let after = chrono::Utc::now();

    let stored = state.db.contact_messages_for_portfolio(1).unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|m| before <= m.created_at && m.created_at <= after));
}

#[tokio::test]
async fn contact_with_malformed_portfolio_id_is_bad_request() {
    let (app, _) = app();
    post(&app, "/api/portfolio", &ada()).await;

    for id in [json!("abc"), json!(null), json!([1])] {
        let (status, body) = post(&app, "/api/contact", &contact(id)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid portfolio ID");
    }

    let mut payload = contact(json!(1));
    payload.as_object_mut().unwrap().remove("portfolioId");
    let (status, _) = post(&app, "/api/contact", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_fields_are_validated_before_the_id() {
    let (app, state) = app();
    let payload = json!({ "portfolioId": "abc", "name": "", "email": "bad", "message": "" });

    let (status, body) = post(&app, "/api/contact", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
    assert_eq!(state.db.counts().unwrap().contact_messages, 0);
}

#[tokio::test]
async fn orphan_contact_is_rejected_by_default() {
    let (app, state) = app();
    let (status, body) = post(&app, "/api/contact", &contact(json!(7))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Portfolio not found");
    assert_eq!(state.db.counts().unwrap().contact_messages, 0);
}

#[tokio::test]
async fn orphan_contact_is_stored_when_accepted() {
    let (app, state) = app_with(ApiConfig {
        orphan_contacts: OrphanContactPolicy::Accept,
    });
    let (status, body) = post(&app, "/api/contact", &contact(json!(7))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["contactId"], 1);
    assert_eq!(state.db.contact_messages_for_portfolio(7).unwrap().len(), 1);
}

#[tokio::test]
async fn non_json_body_is_bad_request() {
    let (app, _) = app();
    let request = Request::post("/api/portfolio")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn projects_endpoint_is_a_placeholder() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Projects"));
    assert!(body["note"].is_string());
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".into()));
}
