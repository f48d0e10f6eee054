mod common;

use std::sync::Arc;

use aqi_predictor::AqiCategory;
use aqi_predictor::web::server::{
    AppState, ErrorResponse, PollutantField, PredictResponse, build_router,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use aqi_predictor::ModelArtifacts;
use common::{
    SCENARIO, SCENARIO_AQI, SCENARIO_FORM, assert_close, fixture_artifacts, overflowing_artifacts,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn send_to(artifacts: ModelArtifacts, request: Request<Body>) -> Response {
    build_router(Arc::new(AppState { artifacts }))
        .oneshot(request)
        .await
        .unwrap()
}

async fn send(request: Request<Body>) -> Response {
    send_to(fixture_artifacts(), request).await
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(features: &[f64]) -> Request<Body> {
    raw_json_post(&serde_json::json!({ "features": features }).to_string())
}

fn raw_json_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn error_body(response: Response) -> ErrorResponse {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// The landing page shows the empty form and the awareness block, but no
/// result until a predict action happens.
#[tokio::test]
async fn index_renders_empty_form() {
    let resp = send(Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("🔍 Predict AQI"));
    assert!(html.contains("Xylene (µg/m³)"));
    assert_eq!(html.matches("value=\"0.00\"").count(), 12);
    assert!(!html.contains("Predicted AQI"));
    assert!(html.contains("Why is Air Quality Important?"));
}

#[tokio::test]
async fn form_submission_shows_the_classified_result() {
    let resp = send(form_post(SCENARIO_FORM)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("😷 Predicted AQI: 130.00"), "{html}");
    assert!(html.contains("🟠 Unhealthy for Sensitive Groups"));
    assert!(html.contains("border: 2px solid #FFAB00;"));
    assert!(html.contains("value=\"60.00\""));
    assert!(html.contains("Why is Air Quality Important?"));
}

#[tokio::test]
async fn missing_form_fields_default_to_zero() {
    let resp = send(form_post("pm2_5=60")).await;
    let html = body_text(resp).await;
    assert!(html.contains("Predicted AQI:"));
    assert_eq!(html.matches("value=\"0.00\"").count(), 11);
}

#[tokio::test]
async fn negative_reading_shows_failure_state() {
    let resp = send(form_post("pm2_5=60&so2=-1")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("Prediction unavailable"));
    assert!(html.contains("SO2: concentration must not be negative"));
    assert!(html.contains("value=\"-1\""));
    assert!(!html.contains("Predicted AQI:"));
}

#[tokio::test]
async fn api_predicts_and_classifies() {
    let resp = send(json_post(&SCENARIO)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let response: PredictResponse = serde_json::from_slice(&body).unwrap();
    assert_close(response.aqi, SCENARIO_AQI);
    assert_eq!(response.category, AqiCategory::UnhealthyForSensitiveGroups);
    assert_eq!(response.color, "#FFAB00");
}

#[tokio::test]
async fn overflowing_model_shows_unavailable_state() {
    let resp = send_to(overflowing_artifacts(), form_post("pm2_5=10&pm10=10")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("Prediction unavailable"));
    assert!(html.contains("non-finite AQI"), "{html}");
    assert!(!html.contains("Predicted AQI:"));
    assert!(html.contains("value=\"10.00\""));
}

#[tokio::test]
async fn api_rejects_wrong_length() {
    let error = error_body(send(json_post(&SCENARIO[..11])).await).await;
    assert_eq!(error.error, "expected 12 readings, found 11");
}

#[tokio::test]
async fn api_rejects_negative_reading() {
    let mut features = SCENARIO;
    features[5] = -1.0;
    let error = error_body(send(json_post(&features)).await).await;
    assert!(error.error.starts_with("SO2: concentration must not be negative"));
}

#[tokio::test]
async fn api_malformed_bodies_get_json_errors() {
    let cases = [
        r#"{"features":[1,2,3,4,5,6,7,8,9,10,11,"x"]}"#,
        r#"{"features":[1e400,2,3,4,5,6,7,8,9,10,11,12]}"#,
        r#"{"feature":[]}"#,
        "not json",
    ];
    for body in cases {
        let error = error_body(send(raw_json_post(body)).await).await;
        assert!(!error.error.is_empty(), "{body}");
    }
}

#[tokio::test]
async fn api_reports_non_finite_prediction() {
    let mut features = [0.0; 12];
    features[0] = 10.0;
    features[1] = 10.0;
    let resp = send_to(overflowing_artifacts(), json_post(&features)).await;
    let error = error_body(resp).await;
    assert!(error.error.contains("non-finite AQI"));
}

#[tokio::test]
async fn api_lists_fields_in_model_order() {
    let resp = send(
        Request::builder()
            .uri("/api/pollutants")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let fields: Vec<PollutantField> = serde_json::from_slice(&body).unwrap();
    assert_eq!(fields.len(), 12);
    assert_eq!(fields[0].name, "PM2.5");
    assert_eq!(fields[0].field, "pm2_5");
    assert_eq!(fields[11].label, "Xylene (µg/m³)");
    assert_eq!(fields[0].step, 0.1);
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let resp = send(
        Request::builder()
            .uri("/static/style.css")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/css; charset=utf-8"
    );
}
