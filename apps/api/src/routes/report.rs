use axum::{extract::State, response::Html, Json};
use leptos::prelude::*;
use serde::Deserialize;

use crate::models::feedback::{Feedback, Suggestion};
use crate::render;
use crate::state::AppState;
use crate::ui::ats::AtsScore;
use crate::ui::details::Details;

#[derive(Deserialize)]
pub struct AtsReportRequest {
    pub score: u32,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Deserialize)]
pub struct ReportRequest {
    pub score: u32,
    pub suggestions: Vec<Suggestion>,
    pub feedback: Feedback,
}

/// POST /api/v1/report/ats
/// Renders the overall ATS score panel as an HTML fragment.
pub async fn handle_ats_report(Json(req): Json<AtsReportRequest>) -> Html<String> {
    Html(view! { <AtsScore score=req.score suggestions=req.suggestions /> }.to_html())
}

/// POST /api/v1/report/details
/// Renders the categorized feedback breakdown as an HTML fragment.
pub async fn handle_details_report(Json(feedback): Json<Feedback>) -> Html<String> {
    Html(view! { <Details feedback=feedback /> }.to_html())
}

/// POST /api/v1/report
/// Renders both components into one full report document.
pub async fn handle_full_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Html<String> {
    let body = view! {
        <main class="flex flex-col gap-8 p-8 w-full max-w-3xl mx-auto">
            <AtsScore score=req.score suggestions=req.suggestions />
            <Details feedback=req.feedback />
        </main>
    }
    .to_html();

    Html(render::page(&state.config.report_title, &body))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                report_title: "Resume Feedback".to_string(),
            },
        }
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn category(score: u32) -> Value {
        json!({
            "title": "Structure",
            "score": score,
            "tips": [
                {"type": "good", "tip": "Clear sections", "explanation": "Sections are easy to scan."},
                {"type": "improve", "tip": "Long summary", "explanation": "Trim the opening summary."}
            ]
        })
    }

    fn feedback_json() -> Value {
        json!({
            "toneAndStyle": category(82),
            "content": category(55),
            "structure": category(40),
            "skills": category(39)
        })
    }

    #[tokio::test]
    async fn test_ats_endpoint_renders_html_fragment() {
        let app = build_router(test_state());
        let body = json!({
            "score": 68,
            "suggestions": [
                {"type": "good", "tip": "Standard headings"},
                {"type": "improve", "tip": "Add keywords"}
            ]
        });

        let response = app
            .oneshot(post_json("/api/v1/report/ats", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains("ATS Score – 68/100"));
        assert!(html.contains("from-yellow-100"));
        assert_eq!(html.matches("<li").count(), 2);
    }

    #[tokio::test]
    async fn test_details_endpoint_renders_four_sections() {
        let app = build_router(test_state());

        let response = app
            .oneshot(post_json("/api/v1/report/details", &feedback_json()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert_eq!(html.matches("data-accordion-item=").count(), 4);
        assert!(html.contains("Tone and Style"));
        assert!(html.contains("82/100"));
    }

    #[tokio::test]
    async fn test_full_report_wraps_both_components_in_a_document() {
        let app = build_router(test_state());
        let body = json!({
            "score": 75,
            "suggestions": [{"type": "good", "tip": "Parses cleanly"}],
            "feedback": feedback_json()
        });

        let response = app.oneshot(post_json("/api/v1/report", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Resume Feedback</title>"));
        assert!(html.contains("ATS Score – 75/100"));
        assert_eq!(html.matches("data-accordion-item=").count(), 4);
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_client_error() {
        let app = build_router(test_state());
        // suggestions missing entirely
        let response = app
            .oneshot(post_json("/api/v1/report/ats", &json!({"score": 50})))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_error_envelope() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_text(response).await;
        assert!(body.contains("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("\"status\":\"ok\""));
    }
}
