//! # Catalog Commands
//!
//! Product listing and lookup for the storefront pages.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page                 Filter                                            │
//! │  ────                 ──────                                            │
//! │  Express page  ─────► order_type = express                              │
//! │  Category chip ─────► category = "Electronics"                          │
//! │  Search box    ─────► query = "biryani" (trimmed, max 100 chars)        │
//! │  "In stock"    ─────► in_stock_only = true                              │
//! │                          │                                              │
//! │                          ▼                                              │
//! │               CatalogProvider::filter ──► Vec<ProductDto>               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grooso_core::validation::{validate_product_id, validate_search_query};
use grooso_core::{Money, OrderType, Product};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogProvider, ProductFilter};
use crate::error::ApiError;

/// Product as shown on a product card.
///
/// Adds the rounded discount badge the cards display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub original_price: Option<Money>,
    /// Whole percent off the original price (0 when not discounted)
    pub discount_percent: i64,
    pub image: Option<String>,
    pub rating: f32,
    pub reviews: u32,
    pub in_stock: bool,
    pub vendor: String,
    pub description: String,
    pub features: Vec<String>,
    pub order_type: OrderType,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            discount_percent: p.discount_percent(),
            id: p.id,
            name: p.name,
            category: p.category,
            price: p.price,
            original_price: p.original_price,
            image: p.image,
            rating: p.rating,
            reviews: p.reviews,
            in_stock: p.in_stock,
            vendor: p.vendor,
            description: p.description,
            features: p.features,
            order_type: p.order_type,
        }
    }
}

/// Lists products matching `filter`, in catalog order.
///
/// The query is trimmed; a blank query matches everything.
pub fn list_products(
    catalog: &dyn CatalogProvider,
    mut filter: ProductFilter,
) -> Result<Vec<ProductDto>, ApiError> {
    filter.query = match filter.query.take() {
        Some(q) => Some(validate_search_query(&q)?).filter(|q| !q.is_empty()),
        None => None,
    };
    debug!(?filter, "list_products command");

    let products: Vec<ProductDto> = catalog
        .filter(&filter)
        .into_iter()
        .map(ProductDto::from)
        .collect();

    info!(count = products.len(), "list_products complete");
    Ok(products)
}

/// Gets one product by id.
pub fn get_product(catalog: &dyn CatalogProvider, id: &str) -> Result<ProductDto, ApiError> {
    validate_product_id(id)?;
    debug!(id = %id, "get_product command");

    catalog
        .product(id)
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::not_found("Product", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixtureCatalog;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_all_products() {
        let catalog = FixtureCatalog::new();
        let products = list_products(&catalog, ProductFilter::default()).unwrap();
        assert_eq!(products.len(), 16);
    }

    #[test]
    fn test_list_trims_query() {
        let catalog = FixtureCatalog::new();
        let filter = ProductFilter {
            query: Some("  pizza  ".to_string()),
            ..Default::default()
        };

        let products = list_products(&catalog, filter).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Margherita Pizza");
    }

    #[test]
    fn test_list_rejects_long_query() {
        let catalog = FixtureCatalog::new();
        let filter = ProductFilter {
            query: Some("x".repeat(101)),
            ..Default::default()
        };

        let err = list_products(&catalog, filter).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_citymart_in_stock() {
        let catalog = FixtureCatalog::new();
        let filter = ProductFilter {
            order_type: Some(OrderType::Citymart),
            in_stock_only: true,
            ..Default::default()
        };

        let ids: Vec<String> = list_products(&catalog, filter)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["3", "4", "9"]);
    }

    #[test]
    fn test_get_product_with_discount() {
        let catalog = FixtureCatalog::new();

        let laptop = get_product(&catalog, "16").unwrap();
        assert_eq!(laptop.price.rupees(), 44990);
        assert_eq!(laptop.discount_percent, 18);

        let err = get_product(&catalog, "77").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
