//! Sound file handler.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, warn};

use super::handlers::ErrorResponse;
use crate::media::MediaLibrary;
use crate::metrics::MEDIA_REQUESTS;
use crate::state::AppState;

/// Serve the sound for `kind` (`victory`, `ching`, `win`, `loose`).
pub async fn serve_media(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    request: Request<Body>,
) -> Response {
    let label = kind.to_lowercase();
    let label = if MediaLibrary::KINDS.contains(&label.as_str()) {
        label
    } else {
        "unknown".to_string()
    };

    let Some(path) = state.media().resolve(&kind) else {
        debug!(%kind, "No audio for kind");
        MEDIA_REQUESTS.with_label_values(&[&label, "missing"]).inc();
        return not_found();
    };

    MEDIA_REQUESTS.with_label_values(&[&label, "found"]).inc();
    match ServeFile::new(&path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            warn!(path = %path.display(), "Failed to serve audio: {}", e);
            not_found()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Audio not found")),
    )
        .into_response()
}
