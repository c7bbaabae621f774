use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{events, health_check, nav, review, submissions};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/nav", get(nav))
        .route("/events", get(events::list_events))
        .route("/events/filters", get(events::event_filters))
        .route("/events/featured", get(events::featured_events))
        .route("/events/public", get(events::public_events))
        .route("/events/:id", get(events::event_detail))
        .route("/submissions", post(submissions::submit_event))
        .route("/submissions/next", post(submissions::next_step))
        .route("/submissions/back", post(submissions::previous_step))
        .route("/submissions/images", post(submissions::add_images))
        .route("/submissions/images/:index", delete(submissions::remove_image))
        .route("/review/pending", get(review::pending_events))
        .route("/review/:id/approve", post(review::approve_event))
        .route("/review/:id/reject", post(review::reject_event));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(create_security_headers_layer(&state.config))
        .layer(create_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::review::ReviewStore;

    const TOKEN: &str = "review-token";

    fn app() -> Router {
        create_routes(AppState::new(
            Config::ephemeral(Some(TOKEN)),
            ReviewStore::in_memory(),
        ))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        json_request("POST", uri, token, body.to_string())
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: String) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::from(body)).unwrap()
    }

    fn pending_ids(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap().to_string())
            .collect()
    }

    fn draft() -> Value {
        json!({
            "details": {
                "name": "Hack Night",
                "event_type": "hackathon",
                "university": "IIT Bombay",
                "date": "2099-09-01",
                "expected_attendees": 150,
                "location": "Main Auditorium",
                "description": "An overnight build sprint.",
                "contact_email": "team@hacknight.in"
            },
            "media": {
                "images": [
                    { "file_name": "poster.png", "content_type": "image/png", "size_bytes": 5120 }
                ]
            },
            "sponsorship": {
                "goal": 5000,
                "gold_benefits": "Title sponsorship",
                "silver_benefits": "Booth",
                "bronze_benefits": "Logo"
            },
            "confirmed": true
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(&app(), get("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "ok");
        assert_eq!(body["data"]["pending_events"], 3);
    }

    #[tokio::test]
    async fn test_filter_by_category() {
        let (status, body) = send(&app(), get("/api/events?category=Hackathon", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["events"][0]["title"], "TechHacks 2025");
        assert_eq!(body["message"], "1 Event Available");
    }

    #[tokio::test]
    async fn test_budget_excluding_everything_shows_fallback() {
        let uri = "/api/events?min_budget=19000&max_budget=20000";
        let (_, body) = send(&app(), get(uri, None)).await;
        assert_eq!(body["data"]["total"], 0);
        assert_eq!(body["data"]["message"], "No events match your filters");
    }

    #[tokio::test]
    async fn test_event_detail_and_missing() {
        let app = app();
        let (status, body) = send(&app, get("/api/events/4", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "AI & ML Symposium");
        assert_eq!(body["data"]["tiers"].as_array().unwrap().len(), 3);

        let (status, body) = send(&app, get("/api/events/77", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_filters_route_is_not_an_id() {
        let (status, body) = send(&app(), get("/api/events/filters", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["categories"][0], "All Categories");
    }

    #[tokio::test]
    async fn test_nav_review_link_follows_session() {
        let app = app();
        let (_, body) = send(&app, get("/api/nav", Some(TOKEN))).await;
        let links = body["data"]["links"].as_array().unwrap();
        assert!(links.iter().any(|l| l["href"] == "/review-events"));
        assert_eq!(body["data"]["session"]["is_admin"], true);

        let (_, body) = send(&app, get("/api/nav", None)).await;
        let links = body["data"]["links"].as_array().unwrap();
        assert!(links.iter().all(|l| l["href"] != "/review-events"));
    }

    #[tokio::test]
    async fn test_review_requires_admin() {
        let app = app();
        let (status, _) = send(&app, get("/api/review/pending", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, get("/api/review/pending", Some("guess"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");

        let (status, _) = send(&app, post("/api/review/1/approve", Some("guess"), json!({}))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_approve_publishes_event() {
        let app = app();
        let approve = post("/api/review/2/approve", Some(TOKEN), json!({}));
        let (status, body) = send(&app, approve).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "approved");

        let (_, body) = send(&app, get("/api/review/pending", Some(TOKEN))).await;
        assert_eq!(pending_ids(&body), vec!["1", "3"]);

        let (_, body) = send(&app, get("/api/events/public", None)).await;
        assert_eq!(body["data"][0]["id"], "2");
        assert_eq!(body["data"][0]["status"], "approved");
    }

    #[tokio::test]
    async fn test_reject_publishes_nothing() {
        let app = app();
        let (status, _) = send(&app, post("/api/review/1/reject", Some(TOKEN), json!({}))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, get("/api/review/pending", Some(TOKEN))).await;
        assert_eq!(pending_ids(&body), vec!["2", "3"]);
        let (_, body) = send(&app, get("/api/events/public", None)).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_leaves_queue_unchanged() {
        let app = app();
        let approve = post("/api/review/nope/approve", Some(TOKEN), json!({}));
        let (status, _) = send(&app, approve).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let reject = post("/api/review/nope/reject", Some(TOKEN), json!({}));
        let (status, _) = send(&app, reject).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, get("/api/review/pending", Some(TOKEN))).await;
        assert_eq!(pending_ids(&body), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_submission_lands_in_pending_queue() {
        let app = app();
        let (status, body) = send(&app, post("/api/submissions", None, draft())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "pending");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (_, body) = send(&app, get("/api/review/pending", Some(TOKEN))).await;
        assert_eq!(pending_ids(&body).last(), Some(&id));
    }

    #[tokio::test]
    async fn test_invalid_submission_reports_fields() {
        let mut invalid = draft();
        invalid["details"]["contact_email"] = json!("nobody");
        invalid["confirmed"] = json!(false);

        let (status, body) = send(&app(), post("/api/submissions", None, invalid)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_FIELDS");
        assert!(body["error"]["details"]["contact_email"].is_array());
        assert!(body["error"]["details"]["confirmed"].is_array());
    }

    #[tokio::test]
    async fn test_wizard_next_and_back() {
        let app = app();
        let (status, body) = send(&app, post("/api/submissions/next", None, draft())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["step"], "media");
        assert_eq!(body["data"]["progress_percent"], 33);

        let draft_at_media = body["data"]["draft"].clone();
        let (_, body) = send(&app, post("/api/submissions/back", None, draft_at_media)).await;
        assert_eq!(body["data"]["step"], "details");

        let (status, _) = send(&app, post("/api/submissions/next", None, json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_fields_are_not_submitted() {
        let mut blank = draft();
        blank["details"]["name"] = json!("   ");
        blank["details"]["university"] = json!("  ");
        blank["sponsorship"]["gold_benefits"] = json!(" ");

        let app = app();
        let (status, body) = send(&app, post("/api/submissions", None, blank)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_FIELDS");
        assert!(body["error"]["details"]["name"].is_array());
        assert!(body["error"]["details"]["university"].is_array());
        assert!(body["error"]["details"]["gold_benefits"].is_array());

        let (_, body) = send(&app, get("/api/review/pending", Some(TOKEN))).await;
        assert_eq!(pending_ids(&body), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_malformed_input_uses_error_envelope() {
        let app = app();
        let body = json!({ "sponsorship": { "goal": "lots" } });
        let (status, body) = send(&app, post("/api/submissions", None, body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let truncated = json_request("POST", "/api/submissions/next", None, "{\"details\":".into());
        let (status, body) = send(&app, truncated).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(&app, get("/api/events?min_budget=abc", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(&app, get("/api/events/not-a-number", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_draft_images_add_and_remove() {
        let app = app();
        let mut start = draft();
        start["media"]["images"] = json!([]);
        let body = json!({
            "draft": start,
            "images": [
                { "file_name": "stage.jpg", "content_type": "image/jpeg", "size_bytes": 2048 },
                { "file_name": "crowd.png", "content_type": "image/png" }
            ]
        });
        let (status, body) = send(&app, post("/api/submissions/images", None, body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "2 images added");
        let images = body["data"]["draft"]["media"]["images"].as_array().unwrap();
        assert_eq!(images.len(), 2);

        let with_images = body["data"]["draft"].to_string();
        let remove = json_request("DELETE", "/api/submissions/images/0", None, with_images.clone());
        let (status, body) = send(&app, remove).await;
        assert_eq!(status, StatusCode::OK);
        let images = body["data"]["draft"]["media"]["images"].as_array().unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0]["file_name"], "crowd.png");

        let remove = json_request("DELETE", "/api/submissions/images/9", None, with_images);
        let (status, body) = send(&app, remove).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_non_image_files_are_refused() {
        let body = json!({
            "draft": draft(),
            "images": [{ "file_name": "brochure.pdf", "content_type": "application/pdf" }]
        });
        let (status, body) = send(&app(), post("/api/submissions/images", None, body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_FIELDS");
        assert!(body["error"]["details"]["images"].is_object());
    }
}
