use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};
use tracing::info;

use super::domain::{IntakeResponse, SubmissionPayload};
use super::session::{IntakeTransport, TransportError};

/// Router exposing the single intake route. POST is the only accepted
/// method; everything else is answered by the 405 fallback without the
/// payload ever being read or logged.
pub fn intake_router() -> Router {
    Router::new().route(
        "/api/apply",
        post(apply_endpoint).fallback(method_not_allowed),
    )
}

/// Log the submission for operator visibility and echo it back with the
/// receipt timestamp. No schema validation, no persistence.
pub fn receive_application(payload: Value) -> Value {
    info!(%payload, "application received");
    acknowledge(payload, Utc::now())
}

/// Merge a receipt timestamp into the payload. Object payloads gain a
/// `receivedAt` member; a well-formed non-object payload is wrapped so the
/// echo is never lost.
pub(crate) fn acknowledge(payload: Value, received_at: DateTime<Utc>) -> Value {
    let stamp = received_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    match payload {
        Value::Object(mut fields) => {
            fields.insert("receivedAt".to_string(), Value::String(stamp));
            Value::Object(fields)
        }
        other => json!({ "payload": other, "receivedAt": stamp }),
    }
}

async fn apply_endpoint(Json(payload): Json<Value>) -> impl IntoResponse {
    let received = receive_application(payload);
    (StatusCode::OK, Json(json!({ "ok": true, "received": received })))
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "ok": false, "message": "Method not allowed" })),
    )
}

/// Drives the intake contract in-process. Used by the CLI demo so the full
/// submission flow runs without a listening socket.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoopbackTransport;

impl IntakeTransport for LoopbackTransport {
    fn deliver(&self, payload: &SubmissionPayload) -> Result<IntakeResponse, TransportError> {
        let value = serde_json::to_value(payload)
            .map_err(|err| TransportError::Unreachable(err.to_string()))?;
        Ok(IntakeResponse {
            ok: true,
            received: Some(receive_application(value)),
            message: None,
        })
    }
}
