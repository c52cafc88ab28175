use rust_decimal::Decimal;

use crate::error::FieldErrors;
use crate::products::dto::{NewProduct, ProductPayload};

/// Shape rules shared by create and update: name required and ≤255 chars,
/// price required and ≥0, product_type_id required. The referenced type's
/// existence is checked by the service against the store.
fn validate(payload: &ProductPayload) -> Result<NewProduct, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = payload.name.as_deref().unwrap_or("");
    if name.is_empty() {
        errors.add("name", "The name field is required.");
    } else if name.chars().count() > 255 {
        errors.add("name", "The name may not be greater than 255 characters.");
    }

    match payload.price {
        None => errors.add("price", "The price field is required."),
        Some(price) if price < Decimal::ZERO => {
            errors.add("price", "The price must be at least 0.")
        }
        Some(_) => {}
    }

    if payload.product_type_id.is_none() {
        errors.add("product_type_id", "The product type id field is required.");
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewProduct {
        name: name.to_string(),
        description: payload.description.clone(),
        price: payload.price.unwrap_or_default(),
        product_type_id: payload.product_type_id.unwrap_or_default(),
    })
}

pub fn validate_create(payload: &ProductPayload) -> Result<NewProduct, FieldErrors> {
    validate(payload)
}

pub fn validate_update(payload: &ProductPayload) -> Result<NewProduct, FieldErrors> {
    validate(payload)
}
