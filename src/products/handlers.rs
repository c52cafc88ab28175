use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    products::{dto::ProductPayload, repo_types::ProductWithType, services},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<ProductWithType>>, ApiError> {
    let products = services::get_all(&state).await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ProductWithType>, ApiError> {
    let product = services::get_by_id(&state, id).await?;
    Ok(Json(product))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductWithType>), ApiError> {
    let product = services::create(&state, &payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductWithType>, ApiError> {
    let product = services::update(&state, &payload, id).await?;
    Ok(Json(product))
}
