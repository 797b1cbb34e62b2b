//! Play event handlers: polling and manual triggers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use slotbox_core::{PlayEvent, TriggerSource};
use tracing::debug;

use super::handlers::ErrorResponse;
use crate::state::AppState;

/// Response for the polling endpoint.
///
/// The event's fields sit next to the availability flag.
#[derive(Debug, Serialize)]
pub struct NextEventResponse {
    #[serde(rename = "eventAvailable")]
    pub event_available: bool,
    #[serde(flatten)]
    pub event: Option<PlayEvent>,
}

#[derive(Debug, Serialize)]
pub struct QueuedResponse {
    pub status: &'static str,
}

impl QueuedResponse {
    fn queued() -> Self {
        Self { status: "queued" }
    }
}

/// Pop the oldest pending event, if any. Never waits.
pub async fn next_event(State(state): State<Arc<AppState>>) -> Json<NextEventResponse> {
    let event = state.orchestrator().dequeue_next();
    Json(NextEventResponse {
        event_available: event.is_some(),
        event,
    })
}

/// Queue a simulated play. Only allowed in simulator mode.
pub async fn simulate_hit(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QueuedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let orchestrator = state.orchestrator();
    if !orchestrator.get_config().simulator_mode {
        debug!("Simulated hit refused, simulator mode is off");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Simulator mode disabled")),
        ));
    }
    orchestrator.handle_trigger(TriggerSource::Simulated);
    Ok(Json(QueuedResponse::queued()))
}

/// Queue a manual play regardless of simulator mode.
pub async fn test_spin(State(state): State<Arc<AppState>>) -> Json<QueuedResponse> {
    state.orchestrator().handle_trigger(TriggerSource::Manual);
    Json(QueuedResponse::queued())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotbox_core::Symbol;

    #[test]
    fn test_empty_response_shape() {
        let response = NextEventResponse {
            event_available: false,
            event: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"eventAvailable": false}));
    }

    #[test]
    fn test_event_fields_are_flattened() {
        let event = PlayEvent::new(
            true,
            [Symbol::Bell, Symbol::Bell, Symbol::Bell],
            TriggerSource::Manual,
        );
        let response = NextEventResponse {
            event_available: true,
            event: Some(event.clone()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["eventAvailable"], true);
        assert_eq!(json["id"], event.id.as_str());
        assert_eq!(json["win"], true);
        assert_eq!(json["source"], "manual");
        assert_eq!(json["reels"][0], "BELL");
        assert!(json["created_at"].is_f64());
    }
}
