// crates/inference/src/routes/predict.rs
//! Sentiment prediction endpoints.
//!
//! - `POST /predict` - one text, 1 to 500 characters
//! - `POST /predict/batch` - 1 to 20 texts of any length

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::metrics::{record_inference, RequestStatus, RequestTimer};
use crate::sentiment::{classify, Classification, Sentiment};
use crate::state::AppState;

pub const MAX_TEXT_CHARS: usize = 500;
pub const MAX_BATCH_TEXTS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchPredictionRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct PredictionResponse {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub processing_time_ms: f64,
    pub timestamp: String,
}

impl PredictionResponse {
    fn new(text: String, result: Classification, took: Duration) -> Self {
        Self {
            text,
            sentiment: result.sentiment,
            confidence: result.confidence,
            processing_time_ms: millis(took),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct BatchPredictionResponse {
    pub predictions: Vec<PredictionResponse>,
    pub total_processing_time_ms: f64,
}

/// Milliseconds rounded to two decimals.
fn millis(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100_000.0).round() / 100.0
}

fn validate_text(text: &str, field: &str) -> Result<(), ApiError> {
    let len = text.chars().count();
    if len == 0 {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
    if len > MAX_TEXT_CHARS {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {MAX_TEXT_CHARS} characters, got {len}"
        )));
    }
    Ok(())
}

fn validate_batch(texts: &[String]) -> Result<(), ApiError> {
    if texts.is_empty() {
        return Err(ApiError::Validation("texts must not be empty".to_string()));
    }
    if texts.len() > MAX_BATCH_TEXTS {
        return Err(ApiError::Validation(format!(
            "texts must contain at most {MAX_BATCH_TEXTS} items, got {}",
            texts.len()
        )));
    }
    Ok(())
}

/// Run `check`, counting a failure as an invalid request on `timer`.
fn checked<T>(timer: RequestTimer, check: impl FnOnce() -> ApiResult<T>) -> ApiResult<(RequestTimer, T)> {
    match check() {
        Ok(value) => Ok((timer, value)),
        Err(e) => {
            timer.finish(RequestStatus::Invalid);
            Err(e)
        }
    }
}

/// POST /predict - classify a single text.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> ApiResult<Json<PredictionResponse>> {
    let timer = RequestTimer::start("predict");
    let (timer, request) = checked(timer, || {
        let Json(request) = payload?;
        validate_text(&request.text, "text")?;
        Ok(request)
    })?;

    let inference_start = Instant::now();
    let result = classify(&request.text);
    tokio::time::sleep(state.config.inference_delay).await;
    record_inference(inference_start.elapsed());

    tracing::debug!(
        sentiment = ?result.sentiment,
        confidence = result.confidence,
        chars = request.text.chars().count(),
        "Prediction complete"
    );

    let response = PredictionResponse::new(request.text, result, timer.elapsed());
    timer.finish(RequestStatus::Success);
    Ok(Json(response))
}

/// POST /predict/batch - classify up to 20 texts.
///
/// Each prediction reports its own classifier time; the batch reports the
/// wall time of the whole request.
pub async fn predict_batch(
    payload: Result<Json<BatchPredictionRequest>, JsonRejection>,
) -> ApiResult<Json<BatchPredictionResponse>> {
    let timer = RequestTimer::start("batch");
    let (timer, request) = checked(timer, || {
        let Json(request) = payload?;
        validate_batch(&request.texts)?;
        Ok(request)
    })?;

    let predictions: Vec<PredictionResponse> = request
        .texts
        .into_iter()
        .map(|text| {
            let started = Instant::now();
            let result = classify(&text);
            let took = started.elapsed();
            record_inference(took);
            PredictionResponse::new(text, result, took)
        })
        .collect();

    tracing::debug!(count = predictions.len(), "Batch prediction complete");

    let response = BatchPredictionResponse {
        predictions,
        total_processing_time_ms: millis(timer.elapsed()),
    };
    timer.finish(RequestStatus::Success);
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/predict", post(predict))
        .route("/predict/batch", post(predict_batch))
}
