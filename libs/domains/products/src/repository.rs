use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Deletes and updates that match no row succeed; only storage failures
/// are reported, as [`ProductError::Database`](crate::ProductError::Database).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn select_all(&self) -> ProductResult<Vec<Product>>;

    async fn delete_product_by_id(&self, id: i64) -> ProductResult<()>;

    /// Fails if a product with the same id already exists
    async fn insert_product(&self, input: CreateProduct) -> ProductResult<()>;

    /// Replaces name and price of the product with `id`
    async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<()>;
}
