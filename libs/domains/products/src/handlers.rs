//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    ApiResponse, AppError, IdPath, ValidatedJson,
    errors::responses::{DatabaseErrorResponse, InvalidIdResponse, InvalidInputResponse},
};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, update_product, delete_product),
    components(
        schemas(Product, CreateProduct, UpdateProduct),
        responses(InvalidIdResponse, InvalidInputResponse, DatabaseErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            axum::routing::delete(delete_product)
                .put(update_product)
                .patch(update_product),
        )
        .with_state(shared_service)
}

/// The storage call a handler is making, used as log context on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    List,
    Delete(i64),
    Insert(i64),
    Update(i64),
}

impl Operation {
    pub fn product_id(&self) -> Option<i64> {
        match self {
            Operation::List => None,
            Operation::Delete(id) | Operation::Insert(id) | Operation::Update(id) => Some(*id),
        }
    }
}

/// Awaits `call` and renders the outcome.
///
/// Success goes through `render`; failures are logged with the operation and
/// product id, then rendered as the matching error envelope.
async fn respond<T, B, F>(
    operation: Operation,
    call: F,
    render: impl FnOnce(T) -> (StatusCode, ApiResponse<B>),
) -> Response
where
    F: Future<Output = ProductResult<T>>,
    B: Serialize,
{
    match call.await {
        Ok(value) => {
            let (status, body) = render(value);
            (status, Json(body)).into_response()
        }
        Err(err) => {
            match &err {
                ProductError::Database(_) => tracing::error!(
                    operation = %operation,
                    product_id = ?operation.product_id(),
                    error = %err,
                    "Product storage call failed"
                ),
                _ => tracing::info!(
                    operation = %operation,
                    product_id = ?operation.product_id(),
                    error = %err,
                    "Product request rejected"
                ),
            }
            err.into_response()
        }
    }
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products, ordered by id", body = ApiResponse<Vec<Product>>),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Response {
    respond(Operation::List, service.list_products(), |products| {
        (StatusCode::OK, ApiResponse::ok(products))
    })
    .await
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<String>),
        (status = 400, response = InvalidInputResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> Response {
    respond(Operation::Insert(input.id), service.create_product(input), |()| {
        (
            StatusCode::CREATED,
            ApiResponse::message("Product created successfully"),
        )
    })
    .await
}

/// Replace a product's name and price
///
/// A malformed id is reported as invalid input, like a malformed body.
#[utoipa::path(
    method(put, patch),
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated (also when no product has this id)", body = ApiResponse<String>),
        (status = 400, response = InvalidInputResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    id: Result<IdPath, AppError>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> Response {
    let id = match id {
        Ok(IdPath(id)) => id,
        Err(rejection) => {
            return AppError::InvalidInput(rejection.to_string()).into_response();
        }
    };

    respond(
        Operation::Update(id),
        service.update_product(id, input),
        |()| {
            (
                StatusCode::OK,
                ApiResponse::message(format!("Product with ID {} updated successfully", id)),
            )
        },
    )
    .await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted (also when no product has this id)", body = ApiResponse<String>),
        (status = 400, response = InvalidIdResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> Response {
    respond(Operation::Delete(id), service.delete_product(id), |()| {
        (
            StatusCode::OK,
            ApiResponse::ok(format!("Product with ID {} deleted successfully", id)),
        )
    })
    .await
}
