//! # Application State
//!
//! State objects owned by the storefront session.
//!
//! ## State Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session State                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────────┐                     │
//! │  │      CartStore       │  │     ConfigState      │                     │
//! │  │                      │  │                      │                     │
//! │  │  • Cart (lines)      │  │  • store name        │                     │
//! │  │  • drawer open flag  │  │  • currency          │                     │
//! │  │  • persistence seam  │  │  • cart key, db path │                     │
//! │  │                      │  │                      │                     │
//! │  │  &mut, one owner     │  │  read-only           │                     │
//! │  └──────────────────────┘  └──────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod config;

pub use cart::CartStore;
pub use config::ConfigState;
