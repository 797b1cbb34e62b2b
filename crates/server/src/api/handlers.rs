//! Health, settings, status and metrics handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use slotbox_core::{GameSettings, OrchestratorStatus, SettingsUpdate};
use tracing::warn;

use crate::metrics::{collect_dynamic_metrics, encode_metrics};
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<GameSettings> {
    Json(state.orchestrator().get_config())
}

/// Replace the game settings.
///
/// The body is parsed leniently: malformed JSON counts as an empty object and
/// missing fields take their defaults.
pub async fn update_config(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GameSettings>, (StatusCode, Json<ErrorResponse>)> {
    let fields = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) | Err(_) => Map::new(),
    };

    let update = parse_update(&fields).ok_or_else(invalid_ratio)?;
    let settings = state.orchestrator().update_config(update).map_err(|e| {
        warn!("Rejected settings update: {}", e);
        invalid_ratio()
    })?;
    Ok(Json(settings))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<OrchestratorStatus> {
    Json(state.orchestrator().status())
}

/// Prometheus scrape endpoint.
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    collect_dynamic_metrics(&state);
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}

fn invalid_ratio() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Invalid win_ratio")),
    )
}

/// Build a settings update from a request object, or `None` if `win_ratio`
/// is present but not usable as a number.
fn parse_update(fields: &Map<String, Value>) -> Option<SettingsUpdate> {
    let defaults = SettingsUpdate::default();
    let win_ratio = match fields.get("win_ratio") {
        None => defaults.win_ratio,
        Some(value) => parse_ratio(value)?,
    };
    let flag = |key: &str, default: bool| fields.get(key).map(truthy).unwrap_or(default);

    Some(SettingsUpdate {
        win_ratio,
        simulator_mode: flag("simulator_mode", defaults.simulator_mode),
        music_enabled: flag("music_enabled", defaults.music_enabled),
        sfx_enabled: flag("sfx_enabled", defaults.sfx_enabled),
    })
}

/// Numbers, numeric strings and booleans are accepted.
fn parse_ratio(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// JSON truthiness: null, false, zero and empty values are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_empty_object_takes_defaults() {
        let update = parse_update(&Map::new()).unwrap();
        assert_eq!(update, SettingsUpdate::default());
    }

    #[test]
    fn test_ratio_forms() {
        assert_eq!(parse_ratio(&json!(0.4)), Some(0.4));
        assert_eq!(parse_ratio(&json!(" 0.3 ")), Some(0.3));
        assert_eq!(parse_ratio(&json!(true)), Some(1.0));
        assert_eq!(parse_ratio(&json!("abc")), None);
        assert_eq!(parse_ratio(&json!(null)), None);
        assert_eq!(parse_ratio(&json!([0.5])), None);
    }

    #[test]
    fn test_bad_ratio_rejects_whole_update() {
        let body = fields(json!({"win_ratio": "lots", "music_enabled": false}));
        assert!(parse_update(&body).is_none());
    }

    #[test]
    fn test_flags_follow_truthiness() {
        let body = fields(json!({
            "simulator_mode": 0,
            "music_enabled": "no",
            "sfx_enabled": [],
        }));
        let update = parse_update(&body).unwrap();
        assert!(!update.simulator_mode);
        // Any non-empty string is true
        assert!(update.music_enabled);
        assert!(!update.sfx_enabled);
    }

    #[test]
    fn test_truthy() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!({})));
        assert!(truthy(&json!(2)));
        assert!(truthy(&json!({"a": 1})));
    }
}
