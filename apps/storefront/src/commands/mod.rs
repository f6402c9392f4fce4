//! # Storefront Commands
//!
//! Every operation the storefront exposes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product listing and lookup
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Order placement
//! └── session.rs   ◄─── Logout
//! ```
//!
//! ## State Passing
//! Each command takes only the state it needs, by reference:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore)
//!
//! // Needs the catalog and the cart
//! fn add_to_cart(catalog: &dyn CatalogProvider, cart: &mut CartStore, ..)
//! ```
//! Results serialize to camelCase JSON; failures are [`ApiError`](crate::error::ApiError).

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;

pub use cart::CartResponse;
pub use catalog::ProductDto;
