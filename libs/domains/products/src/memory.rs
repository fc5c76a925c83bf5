//! In-memory product storage for local development and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Products kept in a `BTreeMap`, so listing is naturally ordered by id.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing products
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn select_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn delete_product_by_id(&self, id: i64) -> ProductResult<()> {
        let removed = self.products.write().await.remove(&id);
        tracing::debug!(product_id = id, removed = removed.is_some(), "Deleted product");
        Ok(())
    }

    async fn insert_product(&self, input: CreateProduct) -> ProductResult<()> {
        let mut products = self.products.write().await;
        if products.contains_key(&input.id) {
            return Err(ProductError::Database(format!(
                "Product with ID {} already exists",
                input.id
            )));
        }

        tracing::debug!(product_id = input.id, "Inserted product");
        products.insert(input.id, input.into());
        Ok(())
    }

    async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<()> {
        if let Some(product) = self.products.write().await.get_mut(&id) {
            product.name = input.name;
            product.price = input.price;
            tracing::debug!(product_id = id, "Updated product");
        }
        Ok(())
    }
}
