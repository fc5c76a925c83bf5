use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL-backed product storage
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn select_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn delete_product_by_id(&self, id: i64) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::debug!(product_id = id, rows_affected = result.rows_affected, "Deleted product");
        Ok(())
    }

    async fn insert_product(&self, input: CreateProduct) -> ProductResult<()> {
        let id = input.id;
        let active_model: entity::ActiveModel = input.into();

        entity::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await?;

        tracing::debug!(product_id = id, "Inserted product");
        Ok(())
    }

    async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<()> {
        let active_model: entity::ActiveModel = input.into();

        let result = entity::Entity::update_many()
            .set(active_model)
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        tracing::debug!(product_id = id, rows_affected = result.rows_affected, "Updated product");
        Ok(())
    }
}
