use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{
    auth::{
        jwt::{Claims, JwtKeys},
        repo,
    },
    error::ApiError,
    state::AppState,
};

/// Verified caller identity. Every protected handler takes this extractor,
/// so a missing, invalid, expired or revoked token short-circuits with 401
/// before any handler logic runs.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::Unauthenticated("Missing Authorization header".into())
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| {
                ApiError::Unauthenticated("Invalid Authorization header".into())
            })?;

        let keys = JwtKeys::from_ref(state);
        let claims = match keys.verify(token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired token");
                return Err(ApiError::Unauthenticated("Invalid or expired token".into()));
            }
        };

        if repo::is_token_revoked(&state.db, claims.jti).await? {
            warn!(user_id = %claims.sub, jti = %claims.jti, "revoked token presented");
            return Err(ApiError::Unauthenticated("Invalid or expired token".into()));
        }

        Ok(AuthUser(claims))
    }
}
