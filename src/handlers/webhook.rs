use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use base64::Engine;
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::AppError;
use crate::models::WebhookPayload;
use crate::services::dispatch;
use crate::state::AppState;

pub const SIGNATURE_HEADER: &str = "x-line-signature";

fn keyed_mac(channel_secret: &str, body: &[u8]) -> Result<Hmac<Sha256>, InvalidLength> {
    let mut mac = Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes())?;
    mac.update(body);
    Ok(mac)
}

/// base64(HMAC-SHA256(channel_secret, body)), as LINE signs webhook bodies.
pub fn sign_body(channel_secret: &str, body: &[u8]) -> Result<String, InvalidLength> {
    let mac = keyed_mac(channel_secret, body)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

fn validate_line_signature(channel_secret: &str, signature: &str, body: &[u8]) -> bool {
    let Ok(expected) = base64::engine::general_purpose::STANDARD.decode(signature) else {
        return false;
    };
    match keyed_mac(channel_secret, body) {
        Ok(mac) => mac.verify_slice(&expected).is_ok(),
        Err(_) => false,
    }
}

/// `POST /callback`. Acknowledges as soon as the payload is verified and decoded;
/// replies go out from a background task.
pub async fn line_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if signature.is_empty() {
        tracing::warn!("missing X-Line-Signature header");
        return Err(AppError::InvalidSignature);
    }

    if !validate_line_signature(&state.config.line_channel_secret, signature, &body) {
        tracing::warn!("invalid LINE signature");
        return Err(AppError::InvalidSignature);
    }

    let payload: WebhookPayload = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "failed to decode webhook payload");
        AppError::from(e)
    })?;

    tracing::info!(
        destination = %payload.destination,
        events = payload.events.len(),
        "incoming webhook"
    );

    if !payload.events.is_empty() {
        tokio::spawn(dispatch::dispatch_events(state, payload.events));
    }

    Ok(StatusCode::OK)
}
