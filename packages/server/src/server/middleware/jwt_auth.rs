use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

use crate::server::auth::JwtService;

/// Authenticated caller information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub profile_id: String,
    pub role: String,
}

/// JWT authentication middleware
///
/// Extracts the JWT from the Authorization header, verifies it, and adds
/// AuthUser to request extensions. Without a valid token the request
/// continues unauthenticated; handlers that require auth check for the
/// extension themselves.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = auth_user {
        debug!(profile_id = %user.profile_id, role = %user.role, "Authenticated caller");
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify the JWT from a request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthUser {
        profile_id: claims.sub,
        role: claims.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn extracts_user_from_bearer_header() {
        let jwt_service = JwtService::new("test_secret");
        let token = jwt_service
            .create_token("hosp1", "HOSPITAL", Utc::now().timestamp() + 3600)
            .unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert_eq!(auth_user.profile_id, "hosp1");
    }

    #[test]
    fn missing_header_yields_no_user() {
        let jwt_service = JwtService::new("test_secret");
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(extract_auth_user(&request, &jwt_service).is_none());
    }

    #[test]
    fn garbage_token_yields_no_user() {
        let jwt_service = JwtService::new("test_secret");
        let request = axum::http::Request::builder()
            .header("authorization", "Bearer not-a-token")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(extract_auth_user(&request, &jwt_service).is_none());
    }
}
