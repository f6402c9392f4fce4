//! # Product Catalog
//!
//! Where the cart gets products from. The cart only reads a product at
//! add-to-cart time; after that the line item carries its own price snapshot.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lookups                                   │
//! │                                                                         │
//! │  list_products(filter) ──► CatalogProvider::filter                      │
//! │                              │                                          │
//! │                              ├── order type   (express / citymart / …)  │
//! │                              ├── category     (exact, case-insensitive) │
//! │                              ├── in stock only                          │
//! │                              └── query        (substring of name,       │
//! │                                                vendor or category)      │
//! │                                                                         │
//! │  add_to_cart(id) ────────► CatalogProvider::product(id)                 │
//! │                              └── None → NOT_FOUND                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering is a linear scan with no ranking; the fixture catalog has a
//! handful of products.

use grooso_core::validation::validate_product;
use grooso_core::{CoreResult, Money, OrderType, Product};
use std::collections::HashSet;
use tracing::{debug, warn};

// =============================================================================
// Provider Trait
// =============================================================================

/// Read-only product source.
pub trait CatalogProvider {
    /// All products, in display order.
    fn products(&self) -> Vec<Product>;

    /// Looks up one product by id.
    fn product(&self, id: &str) -> Option<Product> {
        self.products().into_iter().find(|p| p.id == id)
    }

    /// Products matching every criterion set in `filter`.
    fn filter(&self, filter: &ProductFilter) -> Vec<Product> {
        self.products()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect()
    }
}

/// Product search criteria. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub order_type: Option<OrderType>,
    pub category: Option<String>,
    /// Case-insensitive substring of name, vendor or category
    pub query: Option<String>,
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if self.order_type.is_some_and(|t| t != product.order_type) {
            return false;
        }

        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if self.in_stock_only && !product.in_stock {
            return false;
        }

        match self.query.as_deref().map(str::to_lowercase) {
            Some(query) if !query.is_empty() => [&product.name, &product.vendor, &product.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&query)),
            _ => true,
        }
    }
}

// =============================================================================
// Fixture Catalog
// =============================================================================

/// In-memory catalog, seeded with the storefront's demo products.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    products: Vec<Product>,
}

impl FixtureCatalog {
    /// The demo catalog.
    pub fn new() -> Self {
        FixtureCatalog {
            products: fixture_products(),
        }
    }

    /// Builds a catalog from `products`.
    ///
    /// Every product is validated. When an id repeats, the first occurrence
    /// wins and the rest are dropped.
    pub fn with_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(products.len());

        for product in products {
            validate_product(&product)?;
            if seen.insert(product.id.clone()) {
                kept.push(product);
            } else {
                warn!(product_id = %product.id, "Duplicate catalog id, keeping first");
            }
        }

        debug!(count = kept.len(), "Catalog loaded");
        Ok(FixtureCatalog { products: kept })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for FixtureCatalog {
    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn product(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}

// =============================================================================
// Demo Data
// =============================================================================

const PEXELS_QUERY: &str = "?auto=compress&cs=tinysrgb&w=500";

fn pexels(photo: u32) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{PEXELS_QUERY}")
}

#[allow(clippy::too_many_arguments)]
fn demo(
    id: &str,
    name: &str,
    category: &str,
    (price, original): (i64, i64),
    image: String,
    (rating, reviews): (f32, u32),
    in_stock: bool,
    vendor: &str,
    description: &str,
    features: &[&str],
    order_type: OrderType,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_rupees(price),
        original_price: Some(Money::from_rupees(original)),
        image: Some(image),
        rating,
        reviews,
        in_stock,
        vendor: vendor.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        order_type,
    }
}

#[rustfmt::skip]
fn fixture_products() -> Vec<Product> {
    use OrderType::*;

    vec![
        // Home page recommendations
        demo("13", "Lotion", "Health & Beauty", (260, 320), pexels(4465124), (2.66, 45), true,
            "Beauty Store", "Moisturizing body lotion for daily use",
            &["Moisturizing", "Natural Ingredients", "All Skin Types"], Nationwide),
        demo("14", "Wireless", "Electronics", (999, 1299), pexels(3394650), (4.941, 203), true,
            "TechWorld Electronics", "Premium wireless headphones with noise cancellation",
            &["Noise Cancellation", "20h Battery", "Quick Charge"], Nationwide),
        demo("15", "T-shirt", "Clothing", (350, 450), pexels(1020585), (5.0, 156), true,
            "Fashion Hub", "Comfortable cotton t-shirt for everyday wear",
            &["100% Cotton", "Machine Washable", "Multiple Colors"], Nationwide),
        demo("16", "Laptop", "Electronics", (44990, 54990),
            format!("https://images.pexels.com/photos/18105/pexels-photo.jpg{PEXELS_QUERY}"),
            (4.4, 89), true, "Tech Store", "High-performance laptop for work and gaming",
            &["Intel i5", "8GB RAM", "512GB SSD"], Nationwide),

        // Express (dine out)
        demo("1", "Chicken Biryani", "Food & Beverages", (299, 349), pexels(1893556), (4.5, 128), true,
            "Biryani House Restaurant", "Authentic Hyderabadi chicken biryani with aromatic spices",
            &["30 min delivery", "Hot & Fresh", "Authentic Recipe"], Express),
        demo("2", "Margherita Pizza", "Food & Beverages", (249, 299), pexels(315755), (4.3, 89), true,
            "Pizza Corner Restaurant", "Classic margherita pizza with fresh mozzarella and basil",
            &["Wood Fired", "Fresh Ingredients", "Italian Style"], Express),

        // City mart
        demo("3", "Fresh Vegetables Bundle", "Food & Beverages", (199, 249), pexels(1300972), (4.7, 45), true,
            "Fresh Mart Store", "Daily fresh vegetables bundle with seasonal produce",
            &["Farm Fresh", "Organic", "Same Day Delivery"], Citymart),
        demo("4", "Dairy Products Combo", "Food & Beverages", (159, 189), pexels(236010), (4.6, 67), true,
            "Daily Needs Store", "Fresh milk, yogurt, and cheese combo pack",
            &["Fresh Daily", "Local Dairy", "Quality Assured"], Citymart),

        // Nationwide
        demo("5", "Wireless Bluetooth Headphones", "Electronics", (2999, 3999), pexels(3394650), (4.5, 203), true,
            "TechWorld Electronics", "Premium wireless headphones with noise cancellation",
            &["Noise Cancellation", "20h Battery", "Quick Charge"], Nationwide),
        demo("6", "Cotton Casual T-Shirt", "Clothing", (599, 899), pexels(1020585), (4.2, 156), true,
            "Fashion Hub", "Comfortable cotton t-shirt for everyday wear",
            &["100% Cotton", "Machine Washable", "Multiple Colors"], Nationwide),
        demo("7", "LED Desk Lamp", "Home & Garden", (1299, 1699), pexels(1112598), (4.7, 89), true,
            "Home Essentials", "Adjustable LED desk lamp with touch control",
            &["Touch Control", "Adjustable", "Energy Efficient"], Nationwide),
        demo("8", "Fitness Tracker Watch", "Sports", (4999, 6999), pexels(393047), (4.3, 234), false,
            "SportsTech", "Advanced fitness tracker with heart rate monitoring",
            &["Heart Rate Monitor", "GPS Tracking", "Water Resistant"], Nationwide),
        demo("9", "Organic Green Tea", "Food & Beverages", (399, 499), pexels(1417945), (4.6, 78), true,
            "Organic Valley", "Premium organic green tea leaves",
            &["Organic Certified", "Antioxidant Rich", "100g Pack"], Citymart),
        demo("10", "Smartphone Stand", "Electronics", (799, 1099), pexels(147413), (4.1, 45), true,
            "Gadget Store", "Adjustable smartphone stand for desk",
            &["Adjustable Angle", "Stable Base", "Universal Fit"], Nationwide),

        // More express
        demo("11", "Butter Chicken", "Food & Beverages", (329, 379), pexels(2474661), (4.6, 156), true,
            "Punjabi Dhaba Restaurant", "Creamy butter chicken with naan bread",
            &["Authentic Recipe", "Creamy Gravy", "Served Hot"], Express),
        demo("12", "Veg Hakka Noodles", "Food & Beverages", (189, 229), pexels(1907244), (4.2, 92), true,
            "Chinese Corner Restaurant", "Stir-fried noodles with fresh vegetables",
            &["Fresh Vegetables", "Indo-Chinese", "Spicy"], Express),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grooso_core::ValidationError;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_fixture_catalog_is_valid_and_unique() {
        let catalog = FixtureCatalog::with_products(fixture_products()).unwrap();
        assert_eq!(catalog.len(), 16);
        assert_eq!(FixtureCatalog::new().len(), 16);
    }

    #[test]
    fn test_product_lookup() {
        let catalog = FixtureCatalog::new();

        let biryani = catalog.product("1").unwrap();
        assert_eq!(biryani.name, "Chicken Biryani");
        assert_eq!(biryani.price.rupees(), 299);
        assert_eq!(biryani.discount_percent(), 14);

        assert!(!catalog.product("8").unwrap().in_stock);
        assert!(catalog.product("99").is_none());
    }

    #[test]
    fn test_filter_by_order_type() {
        let catalog = FixtureCatalog::new();
        let filter = ProductFilter {
            order_type: Some(OrderType::Express),
            ..Default::default()
        };

        assert_eq!(ids(&catalog.filter(&filter)), vec!["1", "2", "11", "12"]);
    }

    #[test]
    fn test_filter_by_category_and_stock() {
        let catalog = FixtureCatalog::new();

        let sports = ProductFilter {
            category: Some("sports".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter(&sports)), vec!["8"]);

        let in_stock_sports = ProductFilter {
            in_stock_only: true,
            ..sports
        };
        assert!(catalog.filter(&in_stock_sports).is_empty());
    }

    #[test]
    fn test_filter_by_query_matches_name_vendor_category() {
        let catalog = FixtureCatalog::new();
        let query = |q: &str| ProductFilter {
            query: Some(q.to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&catalog.filter(&query("BIRYANI"))), vec!["1"]);
        assert_eq!(ids(&catalog.filter(&query("fashion hub"))), vec!["15", "6"]);
        assert_eq!(catalog.filter(&query("home & garden")).len(), 1);
        assert_eq!(catalog.filter(&query("")).len(), 16);
        assert!(catalog.filter(&query("sushi")).is_empty());
    }

    #[test]
    fn test_with_products_dedups_by_id() {
        let mut products = fixture_products();
        let mut duplicate = products[0].clone();
        duplicate.price = Money::from_rupees(1);
        products.push(duplicate);

        let catalog = FixtureCatalog::with_products(products).unwrap();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.product("13").unwrap().price.rupees(), 260);
    }

    #[test]
    fn test_with_products_rejects_invalid() {
        let mut products = fixture_products();
        products[3].price = Money::from_rupees(-5);

        let err = FixtureCatalog::with_products(products).unwrap_err();
        assert!(matches!(
            err,
            grooso_core::CoreError::Validation(ValidationError::MustNotBeNegative { .. })
        ));
    }
}
