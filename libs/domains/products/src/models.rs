use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn validate_finite_price(price: f64) -> Result<(), validator::ValidationError> {
    if !price.is_finite() {
        return Err(validator::ValidationError::new("non_finite_price"));
    }
    Ok(())
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Externally assigned identifier
    pub id: i64,
    pub name: String,
    /// Any finite number, including zero and negatives
    pub price: f64,
}

/// Request body for creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    pub id: i64,
    pub name: String,
    #[validate(custom(function = "validate_finite_price"))]
    pub price: f64,
}

/// Request body for replacing a product's name and price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    pub name: String,
    #[validate(custom(function = "validate_finite_price"))]
    pub price: f64,
}

impl From<CreateProduct> for Product {
    fn from(input: CreateProduct) -> Self {
        Self {
            id: input.id,
            name: input.name,
            price: input.price,
        }
    }
}
