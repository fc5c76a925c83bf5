//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::{AppState, Storage};

/// Create products router backed by the configured storage
pub fn router(state: &AppState) -> Router {
    match &state.storage {
        Storage::Postgres(db) => {
            handlers::router(ProductService::new(PgProductRepository::new(db.clone())))
        }
        Storage::Memory(repository) => handlers::router(ProductService::new(repository.clone())),
    }
}
