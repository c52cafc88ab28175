use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Product-type lookup row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Flat projection of a product joined with its type.
#[derive(Debug, FromRow)]
pub struct ProductJoinRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub product_type_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub type_name: String,
    pub type_description: Option<String>,
}

/// Product as served to clients, with its type eagerly attached.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub product_type_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub product_type: ProductType,
}

impl From<ProductJoinRow> for ProductWithType {
    fn from(r: ProductJoinRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            price: r.price,
            product_type_id: r.product_type_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            product_type: ProductType {
                id: r.product_type_id,
                name: r.type_name,
                description: r.type_description,
            },
        }
    }
}
