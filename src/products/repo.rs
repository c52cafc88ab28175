use axum::async_trait;
use sqlx::PgPool;

use crate::products::dto::NewProduct;
use crate::products::repo_types::{ProductJoinRow, ProductType, ProductWithType};

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.description, p.price, p.product_type_id,
           p.created_at, p.updated_at,
           t.name AS type_name, t.description AS type_description
    FROM products p
    JOIN product_types t ON t.id = p.product_type_id
"#;

/// Persistence capability set for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> anyhow::Result<Vec<ProductWithType>>;
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<ProductWithType>>;
    async fn create(&self, data: &NewProduct) -> anyhow::Result<ProductWithType>;
    /// Returns `None` when no product with that id exists.
    async fn update(&self, data: &NewProduct, id: i64) -> anyhow::Result<Option<ProductWithType>>;
}

#[derive(Clone)]
pub struct PgProductRepository {
    db: PgPool,
}

impl PgProductRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    async fn fetch_with_type(&self, id: i64) -> anyhow::Result<Option<ProductWithType>> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProductJoinRow>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.map(ProductWithType::from))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> anyhow::Result<Vec<ProductWithType>> {
        let sql = format!("{SELECT_PRODUCT} ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProductJoinRow>(&sql)
            .fetch_all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ProductWithType::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<ProductWithType>> {
        self.fetch_with_type(id).await
    }

    async fn create(&self, data: &NewProduct) -> anyhow::Result<ProductWithType> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (name, description, price, product_type_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.product_type_id)
        .fetch_one(&self.db)
        .await?;

        self.fetch_with_type(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("created product {id} not readable"))
    }

    async fn update(&self, data: &NewProduct, id: i64) -> anyhow::Result<Option<ProductWithType>> {
        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, product_type_id = $4,
                updated_at = now()
            WHERE id = $5
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.product_type_id)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        match updated {
            Some(id) => self.fetch_with_type(id).await,
            None => Ok(None),
        }
    }
}

impl ProductType {
    pub async fn exists(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM product_types WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(db)
        .await?;
        Ok(exists)
    }
}
