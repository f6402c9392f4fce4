//! # Validation Module
//!
//! Input validation for values that arrive from callers: product ids typed on
//! a command line, search text, delivery addresses, catalog records.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Command parsing (clap / front end)                            │
//! │  ├── Type checks (quantity is an integer)                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Empty / too long / negative price                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart rules                                                    │
//! │  └── quantity <= 0 means removal, unknown id is a no-op                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grooso_core::validation::{validate_product_id, validate_search_query};
//!
//! assert!(validate_product_id("14").is_ok());
//! assert_eq!(validate_search_query("  biryani ").unwrap(), "biryani");
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_PRODUCT_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 500;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - No whitespace
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "productId".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "productId".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "productId".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a delivery address entered at checkout.
///
/// ## Returns
/// The trimmed address.
pub fn validate_delivery_address(address: &str) -> ValidationResult<String> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "deliveryAddress".to_string(),
        });
    }

    if address.len() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "deliveryAddress".to_string(),
            max: MAX_ADDRESS_LEN,
        });
    }

    Ok(address.to_string())
}

/// Validates the quantity a caller asks to add.
///
/// The cart itself ignores a zero add; at the command boundary it is a
/// caller mistake and is reported.
pub fn validate_add_quantity(quantity: u32) -> ValidationResult<u32> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(quantity)
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a catalog record before it is offered to the cart.
///
/// ## Rules
/// - Valid product id
/// - Non-empty name, at most 200 characters
/// - Price and original price not negative
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;

    let name = product.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if product.price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if product.original_price.is_some_and(|p| p.is_negative()) {
        return Err(ValidationError::MustNotBeNegative {
            field: "originalPrice".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::OrderType;

    fn product(id: &str, name: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "Books".to_string(),
            price: Money::from_rupees(price),
            original_price: None,
            image: None,
            rating: 0.0,
            reviews: 0,
            in_stock: true,
            vendor: "Book Store".to_string(),
            description: String::new(),
            features: vec![],
            order_type: OrderType::Nationwide,
        }
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("14").is_ok());
        assert!(matches!(
            validate_product_id("  "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_id("a b"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_product_id(&"x".repeat(65)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("").unwrap(), "");
        assert_eq!(validate_search_query("  pizza ").unwrap(), "pizza");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_delivery_address() {
        assert_eq!(
            validate_delivery_address(" 12 MG Road, Bangalore ").unwrap(),
            "12 MG Road, Bangalore"
        );
        assert!(validate_delivery_address("   ").is_err());
    }

    #[test]
    fn test_validate_add_quantity() {
        assert_eq!(validate_add_quantity(3).unwrap(), 3);
        assert!(matches!(
            validate_add_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&product("1", "Novel", 299)).is_ok());
        assert!(validate_product(&product("1", "", 299)).is_err());
        assert!(matches!(
            validate_product(&product("1", "Novel", -1)),
            Err(ValidationError::MustNotBeNegative { .. })
        ));

        let mut discounted = product("1", "Novel", 299);
        discounted.original_price = Some(Money::from_rupees(-5));
        assert!(validate_product(&discounted).is_err());
    }
}
