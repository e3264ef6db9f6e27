//! Twenzee CLI - Command-line storefront surface.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! twz catalog list --category hoodies --sort price-low --page 1
//! twz catalog show 3
//!
//! # Manage the cart
//! twz cart add 3 --size M --quantity 2
//! twz cart show --shipping express
//! twz cart remove 3 --size M
//! twz cart clear
//!
//! # Check out
//! twz checkout --full-name "Ayesha Khan" --email ayesha@example.com \
//!     --phone 0300-1234567 --address "12 Mall Road" --city Lahore \
//!     --postal 54000 --country Pakistan --save-info
//!
//! # Review placed orders
//! twz orders list
//! ```
//!
//! The CLI is strictly a presentation layer: it renders catalog pages,
//! cart summaries, and validation errors produced by the storefront core
//! and never touches persisted state directly.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This is the rendering boundary; stdout is the terminal UI.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use twenzee_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "twz")]
#[command(author, version, about = "Twenzee storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order from the current cart
    Checkout(Box<commands::checkout::CheckoutArgs>),
    /// Review placed orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products with filters, sorting, and pagination
    List(commands::catalog::ListArgs),
    /// Show one product in full
    Show {
        /// Product id
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        id: ProductId,

        /// Size to add (e.g. S, M, L)
        #[arg(short, long)]
        size: String,

        /// How many units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id
        id: ProductId,

        /// Size of the line to remove
        #[arg(short, long)]
        size: String,
    },
    /// Show the cart with its pricing summary
    Show {
        /// Shipping method to quote (`standard`, `express`)
        #[arg(long, default_value = "standard")]
        shipping: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List all placed orders
    List,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> twenzee_storefront::error::Result<()> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List(args) => commands::catalog::list(&args)?,
            CatalogAction::Show { id } => commands::catalog::show(id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add { id, size, quantity } => commands::cart::add(id, &size, quantity)?,
            CartAction::Remove { id, size } => commands::cart::remove(id, &size)?,
            CartAction::Show { shipping } => commands::cart::show(&shipping)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Checkout(args) => commands::checkout::run(&args)?,
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list()?,
        },
    }
    Ok(())
}
