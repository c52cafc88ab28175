use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, NewUser, RegisterRequest, TokenResponse},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo,
        repo_types::User,
    },
    error::{ApiError, FieldErrors},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Shape checks for registration. Email uniqueness is checked against the
/// store by the handler and merged into the same error set.
fn validate_register(payload: &RegisterRequest) -> Result<NewUser, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = payload.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        errors.add("name", "The name field is required.");
    } else if name.chars().count() > 255 {
        errors.add("name", "The name may not be greater than 255 characters.");
    }

    let email = payload.email.as_deref().unwrap_or("").trim().to_lowercase();
    if email.is_empty() {
        errors.add("email", "The email field is required.");
    } else {
        if !is_valid_email(&email) {
            errors.add("email", "The email must be a valid email address.");
        }
        if email.chars().count() > 255 {
            errors.add("email", "The email may not be greater than 255 characters.");
        }
    }

    let password = payload.password.as_deref().unwrap_or("");
    if password.is_empty() {
        errors.add("password", "The password field is required.");
    } else {
        if password.chars().count() < 6 {
            errors.add("password", "The password must be at least 6 characters.");
        }
        if payload.password_confirmation.as_deref() != Some(password) {
            errors.add("password", "The password confirmation does not match.");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewUser {
        name: name.to_string(),
        email,
        password: password.to_string(),
    })
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let new_user = validate_register(&payload).map_err(ApiError::Validation)?;

    if User::find_by_email(&state.db, &new_user.email).await?.is_some() {
        warn!(email = %new_user.email, "email already registered");
        let mut errors = FieldErrors::new();
        errors.add("email", "The email has already been taken.");
        return Err(ApiError::Validation(errors));
    }

    let hash = hash_password(&new_user.password)?;
    let user = User::create(&state.db, &new_user.name, &new_user.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(MessageResponse {
        message: "User registered successfully",
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::Unauthorized);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(TokenResponse::bearer(access_token, keys.expires_in())))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::Unauthenticated("User not found".into()))?;
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    repo::revoke_token(&state.db, claims.jti, claims.expires_at()).await?;

    info!(user_id = %claims.sub, jti = %claims.jti, "user logged out");
    Ok(Json(MessageResponse {
        message: "Successfully logged out",
    }))
}

/// The presented token is revoked and a fresh one is minted for the same
/// identity, so the old token cannot be replayed after a refresh.
#[instrument(skip(state))]
pub async fn refresh(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<TokenResponse>, ApiError> {
    repo::revoke_token(&state.db, claims.jti, claims.expires_at()).await?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(claims.sub)?;

    info!(user_id = %claims.sub, "token refreshed");
    Ok(Json(TokenResponse::bearer(access_token, keys.expires_in())))
}
