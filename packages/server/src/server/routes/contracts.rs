use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::common::ContractId;
use crate::domains::contracts::effects::{generate_contract_pdf, CallableError};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Serialize)]
pub struct GenerateContractPdfResponse {
    pub success: bool,
    pub pdf_url: String,
}

/// Generate (or regenerate) a contract's PDF and return its signed URL.
///
/// Requires an authenticated caller; the admin-review UI invokes this on
/// demand when a contract is opened for signing.
pub async fn generate_contract_pdf_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    Path(contract_id): Path<String>,
) -> Result<Json<GenerateContractPdfResponse>, CallableError> {
    if auth_user.is_none() {
        return Err(CallableError::Unauthenticated);
    }

    let contract_id = ContractId::new(contract_id);
    let pdf_url = generate_contract_pdf(&state.server_deps, &contract_id).await?;

    Ok(Json(GenerateContractPdfResponse {
        success: true,
        pdf_url,
    }))
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            CallableError::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            CallableError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid-argument"),
            CallableError::NotFound(_) => (StatusCode::NOT_FOUND, "not-found"),
            CallableError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        // Internal errors were logged where they were wrapped; the caller
        // only sees the generic Display text.
        let body = Json(json!({
            "error": code,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
