//! # grooso-core: Pure Business Logic for the Grooso Storefront
//!
//! This crate holds the cart pricing model as pure functions and plain data.
//! It never touches storage; persistence lives in `grooso-store` and the
//! session-owned cart store lives in the storefront app.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grooso Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (CLI / UI shell)                  │   │
//! │  │    Catalog ──► Cart ──► Checkout ──► Order summary              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grooso-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  fee/tax  │  │   │
//! │  │   │  TaxRate  │  │           │  │ LineItem  │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              grooso-store (Durable key-value store)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate, OrderType)
//! - [`money`] - Whole-rupee money type with integer arithmetic
//! - [`cart`] - Line items and the cart collection
//! - [`pricing`] - Delivery fee, tax and totals
//! - [`order`] - Order snapshot built at checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use grooso_core::money::Money;
//! use grooso_core::pricing;
//!
//! let subtotal = Money::from_rupees(500);
//!
//! assert_eq!(pricing::delivery_fee(subtotal).rupees(), 50);
//! assert_eq!(pricing::tax(subtotal).rupees(), 90);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderLine, OrderStatus};
pub use pricing::CartTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Subtotal (in rupees) at or above which delivery is free.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::from_rupees(999);

/// Delivery fee charged below the free-delivery threshold.
pub const FLAT_DELIVERY_FEE: Money = Money::from_rupees(50);

/// GST applied to the subtotal: 18%.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(1800);

/// Key the cart snapshot is stored under in the durable key-value store.
///
/// Matches the key the browser storefront wrote, so snapshots carry over.
pub const CART_STORAGE_KEY: &str = "grooso-cart";

/// Prefix of human-readable order numbers (`GRO-2026-0042`).
pub const ORDER_NUMBER_PREFIX: &str = "GRO";
