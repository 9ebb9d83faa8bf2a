use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved principal through request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves a bearer token to an authenticated principal.
///
/// This is the single gate in front of every protected route: token
/// signature and expiry are checked first, then the subject is looked up in
/// the credential store. A token naming a principal that no longer exists
/// fails closed with 401 rather than falling back to any default identity.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate signature, structure, and expiry
    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    // The subject is a username; a malformed one can never resolve
    let username = Username::new(claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid username");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    // Resolve the subject against the credential store
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                tracing::warn!(username = %username, "Token subject no longer exists");
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            _ => ApiError::from(e),
        })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
