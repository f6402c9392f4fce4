//! # Grooso Storefront CLI
//!
//! Drives the storefront from a terminal. Each invocation is one session
//! event: the cart is restored from disk, one command runs, and the result
//! is printed as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Browse express (dine out) products that can be ordered
//! grooso catalog --type express --in-stock
//!
//! # Search across names, vendors and categories
//! grooso catalog --query "t-shirt"
//!
//! # Cart
//! grooso cart add 1 -q 2
//! grooso cart update 1 3
//! grooso cart remove 1
//! grooso cart show
//!
//! # Place the order and sign out
//! grooso checkout --address "12 MG Road, Bangalore"
//! grooso logout
//! ```
//!
//! Results go to stdout, logs to stderr (`RUST_LOG` controls verbosity).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use grooso_core::OrderType;
use serde::Serialize;

use grooso_storefront_lib::catalog::{FixtureCatalog, ProductFilter};
use grooso_storefront_lib::commands::{cart, catalog, checkout, session};
use grooso_storefront_lib::error::ApiError;
use grooso_storefront_lib::state::ConfigState;
use grooso_storefront_lib::StorageMode;

#[derive(Parser)]
#[command(name = "grooso")]
#[command(author, version, about = "Grooso storefront")]
struct Cli {
    /// Keep the cart in memory only (nothing is read from or written to disk)
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Storefront vertical (`express`, `citymart`, `nationwide`)
        #[arg(short = 't', long = "type")]
        order_type: Option<OrderType>,

        /// Exact category, e.g. "Electronics"
        #[arg(short, long)]
        category: Option<String>,

        /// Text to look for in name, vendor or category
        #[arg(short, long)]
        query: Option<String>,

        /// Hide products that are out of stock
        #[arg(long)]
        in_stock: bool,
    },
    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for the cart contents
    Checkout {
        /// Delivery address
        #[arg(short, long)]
        address: String,
    },
    /// Sign out and forget the cart
    Logout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show items and totals
    Show,
    /// Add a product
    Add {
        /// Catalog product id
        product_id: String,

        /// How many to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity (0 or less removes it)
    Update {
        product_id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove { product_id: String },
    /// Empty the cart
    Clear,
}

fn main() {
    grooso_storefront_lib::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(code = ?e.code, "Command failed: {}", e.message);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ApiError> {
    let config = ConfigState::from_env();
    let fixtures = FixtureCatalog::new();

    let mode = if cli.ephemeral {
        StorageMode::Ephemeral
    } else {
        StorageMode::Durable
    };

    match cli.command {
        Commands::Catalog {
            order_type,
            category,
            query,
            in_stock,
        } => {
            let filter = ProductFilter {
                order_type,
                category,
                query,
                in_stock_only: in_stock,
            };
            print_json(&catalog::list_products(&fixtures, filter)?)
        }
        Commands::Cart { action } => {
            let mut store = grooso_storefront_lib::open_cart_store(&config, mode)?;
            let response = match action {
                CartAction::Show => cart::get_cart(&store),
                CartAction::Add {
                    product_id,
                    quantity,
                } => cart::add_to_cart(&fixtures, &mut store, &product_id, Some(quantity))?,
                CartAction::Update {
                    product_id,
                    quantity,
                } => cart::update_cart_item(&mut store, &product_id, quantity)?,
                CartAction::Remove { product_id } => {
                    cart::remove_from_cart(&mut store, &product_id)?
                }
                CartAction::Clear => cart::clear_cart(&mut store),
            };
            eprintln!("{}", cart_summary(&config, &response));
            print_json(&response)
        }
        Commands::Checkout { address } => {
            let mut store = grooso_storefront_lib::open_cart_store(&config, mode)?;
            let order = checkout::place_order(&mut store, &address)?;
            eprintln!(
                "{}: order {} placed, {}",
                config.store_name,
                order.order_number,
                config.format_currency(order.totals.total)
            );
            print_json(&order)
        }
        Commands::Logout => {
            let mut store = grooso_storefront_lib::open_cart_store(&config, mode)?;
            session::logout(&mut store);
            Ok(())
        }
    }
}

/// One-line cart summary for stderr. Totals are not shown for an empty cart.
fn cart_summary(config: &ConfigState, response: &cart::CartResponse) -> String {
    if response.items.is_empty() {
        return "Cart is empty".to_string();
    }
    format!(
        "{} items, total {}",
        response.totals.item_count,
        config.format_currency(response.totals.total)
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
