use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::server::app::AppState;

/// Query parameters carried by signed file URLs.
#[derive(Deserialize)]
pub struct SignedUrlParams {
    pub exp: i64,
    pub sig: String,
}

/// Serve a stored blob after verifying its signed URL.
pub async fn serve_file_handler(
    Extension(state): Extension<AppState>,
    Path(path): Path<String>,
    Query(params): Query<SignedUrlParams>,
) -> Response {
    if !state.files.verify(&path, params.exp, &params.sig) {
        debug!(path = %path, "Rejected file request with bad signature");
        return StatusCode::FORBIDDEN.into_response();
    }

    let target = match state.files.object_path(&path) {
        Ok(target) => target,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match tokio::fs::read(&target).await {
        Ok(bytes) => {
            let content_type = if path.ends_with(".pdf") {
                "application/pdf"
            } else {
                "application/octet-stream"
            };
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
