//! HTTP handlers for the Trust Simulator demo API.
//!
//! Bodies are read raw and parsed here rather than through the `Json`
//! extractor, so malformed JSON surfaces as a 500 and missing fields as a 400.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use super::state::AppState;
use crate::scoring::ScoreResult;

const SIMULATE_REQUIRED: &str = "Project input is required";
const SIMULATE_FAILED: &str = "Internal server error";
const SMS_REQUIRED: &str = "Phone number is required";
const SMS_FAILED: &str = "Failed to send SMS";

/// `{ "success": true, "message": "...", "sid": "demo_sms_..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsResponse {
    pub success: bool,
    pub message: String,
    pub sid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `POST /api/simulate` with `{ "userInput": string }`
pub async fn simulate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let payload = parse_body(body, SIMULATE_FAILED)?;

    let text = match truthy_field(&payload, "userInput") {
        None => return Err(ApiError::Validation(SIMULATE_REQUIRED)),
        Some(Value::String(text)) => text,
        Some(other) => {
            return Err(ApiError::internal(
                SIMULATE_FAILED,
                anyhow::anyhow!("userInput must be a string, got {}", json_kind(other)),
            ))
        }
    };

    let result = state.scorer().score(text);
    tracing::info!(
        input_len = text.len(),
        score = result.score,
        approved = result.approved,
        "scored project"
    );

    Ok(Json(result))
}

/// `POST /api/sms-demo` with `{ "phoneNumber": string }`
pub async fn sms_demo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SmsResponse>, ApiError> {
    let payload = parse_body(body, SMS_FAILED)?;

    let phone_number = match truthy_field(&payload, "phoneNumber") {
        None => return Err(ApiError::Validation(SMS_REQUIRED)),
        Some(Value::String(number)) => number.clone(),
        Some(other) => other.to_string(),
    };

    let receipt = state
        .sms()
        .send(&phone_number)
        .await
        .map_err(|e| ApiError::internal(SMS_FAILED, e))?;

    Ok(Json(SmsResponse {
        success: true,
        message: "SMS sent successfully".to_string(),
        sid: receipt.sid,
    }))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn parse_body(
    body: Result<Bytes, BytesRejection>,
    public: &'static str,
) -> Result<Value, ApiError> {
    let body = body.map_err(|e| {
        ApiError::internal(public, anyhow::anyhow!("failed to read request body: {}", e))
    })?;

    // Invalid UTF-8 becomes U+FFFD rather than a parse failure
    let text = String::from_utf8_lossy(&body);
    let payload: Value = serde_json::from_str(&text)
        .map_err(|e| ApiError::internal(public, anyhow::Error::new(e).context("invalid JSON body")))?;

    if payload.is_null() {
        return Err(ApiError::internal(public, anyhow::anyhow!("request body is null")));
    }
    Ok(payload)
}

/// Look up `field` on an object body, treating JavaScript-falsy values
/// (`null`, `false`, `0`, `""`) as absent. Non-object bodies have no fields.
fn truthy_field<'a>(payload: &'a Value, field: &str) -> Option<&'a Value> {
    payload.as_object()?.get(field).filter(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
