use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::reply::JsonReply;
use crate::utils::json::classify_body;

/// Returns the posted JSON document, or `204` with no body for an empty request.
pub async fn echo(body: Result<Bytes, BytesRejection>) -> AppResult<JsonReply<Value>> {
    let body = body.map_err(|rejection| AppError::new(rejection.status(), rejection.body_text()))?;
    let payload = classify_body(&body).map_err(AppError::bad_request)?;
    tracing::debug!(empty = payload.is_absent(), "echo request");

    let status = if payload.is_absent() {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::OK
    };
    Ok(JsonReply::new(status, payload))
}
