//! HTTP surface: the form page plus a small JSON API.
//!
//! The model artifacts are loaded before the router is built and shared
//! read-only by every handler, so no request can observe a partially
//! loaded model and no handler needs a lock.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::Router;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::data::input::{InputVector, MIN_READING, READING_STEP};
use crate::data::pollutant::Pollutant;
use crate::model::artifacts::ModelArtifacts;
use crate::prediction::engine::{Assessment, assess};
use crate::prediction::severity::AqiCategory;
use crate::web::page::{self, Outcome, fields_from_form, fields_from_input};

const STYLE_CSS: &str = include_str!("../../templates/style.css");

/// Shared, immutable application state.
#[derive(Debug)]
pub struct AppState {
    pub artifacts: ModelArtifacts,
}

/// Body of `POST /api/predict`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

/// Successful response of `POST /api/predict`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub aqi: f64,
    pub category: AqiCategory,
    pub band: String,
    pub status: String,
    pub color: String,
    pub icon: String,
}

impl From<&Assessment> for PredictResponse {
    fn from(assessment: &Assessment) -> Self {
        PredictResponse {
            aqi: assessment.aqi.get(),
            category: assessment.band.category,
            band: assessment.band.label.to_string(),
            status: assessment.band.status.to_string(),
            color: assessment.band.color.to_string(),
            icon: assessment.band.icon.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Metadata of one form field, as served by `GET /api/pollutants`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PollutantField {
    pub name: String,
    pub label: String,
    pub field: String,
    pub min: f64,
    pub step: f64,
}

/// Routes:
/// - `GET /` -- the empty form
/// - `POST /` -- form submission, re-renders with the result
/// - `GET /static/style.css` -- stylesheet
/// - `GET /api/pollutants` -- ordered field metadata
/// - `POST /api/predict` -- JSON prediction
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/static/style.css", get(css_handler))
        .route("/api/pollutants", get(pollutants_handler))
        .route("/api/predict", post(predict_handler))
        .with_state(state)
}

fn html_response(rendered: Result<String, askama::Error>) -> Response {
    match rendered {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            warn!(error = %e, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

async fn index_handler() -> Response {
    html_response(page::render(
        fields_from_input(&InputVector::zeros()),
        &Outcome::Pending,
    ))
}

async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let input = match InputVector::from_fields(&form) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "rejected form submission");
            return html_response(page::render(
                fields_from_form(&form),
                &Outcome::Unavailable(e.to_string()),
            ));
        }
    };

    let outcome = match assess(&input, &state.artifacts) {
        Ok(assessment) => {
            info!(aqi = assessment.aqi.get(), band = assessment.band.label, "prediction");
            Outcome::Assessed(assessment)
        }
        Err(e) => {
            warn!(error = %e, "prediction failed");
            Outcome::Unavailable(e.to_string())
        }
    };
    html_response(page::render(fields_from_input(&input), &outcome))
}

async fn css_handler() -> ([(&'static str, &'static str); 1], &'static str) {
    ([("content-type", "text/css; charset=utf-8")], STYLE_CSS)
}

async fn pollutants_handler() -> Json<Vec<PollutantField>> {
    Json(
        Pollutant::ALL
            .iter()
            .map(|p| PollutantField {
                name: p.name().to_string(),
                label: p.label(),
                field: p.field_name().to_string(),
                min: MIN_READING,
                step: READING_STEP,
            })
            .collect(),
    )
}

fn unprocessable(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse { error: message }),
    )
}

async fn predict_handler(
    State(state): State<Arc<AppState>>,
    request: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Malformed bodies get the same JSON error shape as invalid readings.
    let Json(request) = request.map_err(|rejection| {
        warn!(error = %rejection, "malformed prediction request");
        unprocessable(rejection.body_text())
    })?;
    let input = InputVector::try_from(request.features.as_slice()).map_err(|e| {
        warn!(error = %e, "rejected prediction request");
        unprocessable(e.to_string())
    })?;
    let assessment = assess(&input, &state.artifacts).map_err(|e| {
        warn!(error = %e, "prediction failed");
        unprocessable(e.to_string())
    })?;
    Ok(Json(PredictResponse::from(&assessment)))
}

/// Binds `addr` and serves until the process is terminated.
pub async fn run_server(artifacts: ModelArtifacts, addr: SocketAddr) -> std::io::Result<()> {
    let state = Arc::new(AppState { artifacts });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!("listening on http://{local}");

    axum::serve(listener, app).await
}
