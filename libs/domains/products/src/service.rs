//! Product Service - validation in front of the repository

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service
///
/// Create and update validate their input before any storage call, so
/// direct callers get the same guarantees as the HTTP layer.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.select_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        self.repository.delete_product_by_id(id).await
    }

    #[instrument(skip(self, input), fields(product_id = input.id))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<()> {
        input.validate()?;
        self.repository.insert_product(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<()> {
        input.validate()?;
        self.repository.update_product(id, input).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
