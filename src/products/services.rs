use crate::error::{ApiError, FieldErrors};
use crate::products::dto::{NewProduct, ProductPayload};
use crate::products::repo_types::{ProductType, ProductWithType};
use crate::products::validator::{validate_create, validate_update};
use crate::state::AppState;

pub async fn get_all(state: &AppState) -> Result<Vec<ProductWithType>, ApiError> {
    Ok(state.products.get_all().await?)
}

pub async fn get_by_id(state: &AppState, id: i64) -> Result<ProductWithType, ApiError> {
    state
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::product_not_found)
}

pub async fn create(state: &AppState, payload: &ProductPayload) -> Result<ProductWithType, ApiError> {
    let data = validate_create(payload).map_err(ApiError::Validation)?;
    ensure_type_exists(state, &data).await?;
    Ok(state.products.create(&data).await?)
}

pub async fn update(
    state: &AppState,
    payload: &ProductPayload,
    id: i64,
) -> Result<ProductWithType, ApiError> {
    let data = validate_update(payload).map_err(ApiError::Validation)?;
    ensure_type_exists(state, &data).await?;
    state
        .products
        .update(&data, id)
        .await?
        .ok_or_else(ApiError::product_not_found)
}

/// The one rule that needs the store: product_type_id must reference an
/// existing row. Reported through the same 422 field-error contract.
async fn ensure_type_exists(state: &AppState, data: &NewProduct) -> Result<(), ApiError> {
    if !ProductType::exists(&state.db, data.product_type_id).await? {
        let mut errors = FieldErrors::new();
        errors.add("product_type_id", "The selected product type id is invalid.");
        return Err(ApiError::Validation(errors));
    }
    Ok(())
}
