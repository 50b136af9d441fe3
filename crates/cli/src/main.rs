//! Aura CLI - the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the collection, optionally filtered by category
//! aura shop
//! aura shop --category suits
//!
//! # Product detail
//! aura product 1
//!
//! # Shopping bag
//! aura bag add 1 --size L --color Navy --quantity 2
//! aura bag list
//! aura bag update 1 --size L --color Navy --delta -1
//! aura bag remove 1 --size L --color Navy
//! aura bag clear
//!
//! # Wishlist
//! aura wishlist toggle 201
//! aura wishlist list
//! aura wishlist move 201
//!
//! # Checkout summary (promo code AURA20 takes 20% off)
//! aura checkout --promo AURA20
//! ```
//!
//! State lives under `AURA_DATA_DIR` (default `.aura`), one JSON file per
//! collection, so the bag and wishlist survive between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use aura_core::Size;
use aura_store::catalog::{Catalog, CategoryFilter};
use aura_store::{
    AddressBook, CartStore, ChangeNotifier, FileBackend, StorageBackend, WishlistStore,
};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about = "Aura storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the collection and accessories
    Shop {
        /// Category filter (e.g. suits, ethnic, shirts; default all)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Show one product in detail
    Product {
        /// Product id
        id: i32,
    },
    /// Manage the shopping bag
    Bag {
        #[command(subcommand)]
        action: BagAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show the order summary for the current bag
    Checkout {
        /// Promo code to apply
        #[arg(short, long)]
        promo: Option<String>,
    },
}

#[derive(Subcommand)]
enum BagAction {
    /// Add a product variant to the bag
    Add {
        /// Product id
        id: i32,

        /// Garment size
        #[arg(short, long, default_value = "M")]
        size: Size,

        /// Color name
        #[arg(short, long, default_value = "Standard")]
        color: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// List the bag contents
    List,
    /// Adjust a row's quantity (clamped at 1)
    Update {
        /// Product id
        id: i32,

        /// Garment size
        #[arg(short, long, default_value = "M")]
        size: Size,

        /// Color name
        #[arg(short, long, default_value = "Standard")]
        color: String,

        /// Quantity change, e.g. 1 or -1
        #[arg(short, long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a row from the bag
    Remove {
        /// Product id
        id: i32,

        /// Garment size
        #[arg(short, long, default_value = "M")]
        size: Size,

        /// Color name
        #[arg(short, long, default_value = "Standard")]
        color: String,
    },
    /// Empty the bag
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a product, or remove it if already saved
    Toggle {
        /// Product id
        id: i32,
    },
    /// List saved products
    List,
    /// Remove a saved product
    Remove {
        /// Product id
        id: i32,
    },
    /// Move a saved product into the bag
    Move {
        /// Product id
        id: i32,

        /// Garment size (default M when omitted)
        #[arg(short, long)]
        size: Option<Size>,

        /// Color name (default Standard when omitted)
        #[arg(short, long)]
        color: Option<String>,
    },
}

/// Everything a command needs: the catalog, the addresses, and both stores.
pub struct Stores {
    pub catalog: Catalog,
    pub addresses: AddressBook,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let backend: Arc<dyn StorageBackend> = Arc::new(FileBackend::open(config.data_dir)?);
    let notifier = Arc::new(ChangeNotifier::new());

    let stores = Stores {
        catalog: Catalog::seeded(),
        addresses: AddressBook::sample(),
        cart: CartStore::new(Arc::clone(&backend), Arc::clone(&notifier)),
        wishlist: WishlistStore::new(backend, notifier),
    };

    match cli.command {
        Commands::Shop { category } => commands::shop::list(&stores, category),
        Commands::Product { id } => commands::shop::detail(&stores, id.into()),
        Commands::Bag { action } => match action {
            BagAction::Add {
                id,
                size,
                color,
                quantity,
            } => commands::bag::add(&stores, id.into(), size, color, quantity)?,
            BagAction::List => commands::bag::list(&stores),
            BagAction::Update {
                id,
                size,
                color,
                delta,
            } => commands::bag::update(&stores, id.into(), size, color, delta)?,
            BagAction::Remove { id, size, color } => {
                commands::bag::remove(&stores, id.into(), size, color)?;
            }
            BagAction::Clear => commands::bag::clear(&stores)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&stores, id.into())?,
            WishlistAction::List => commands::wishlist::list(&stores),
            WishlistAction::Remove { id } => commands::wishlist::remove(&stores, id.into())?,
            WishlistAction::Move { id, size, color } => {
                commands::wishlist::move_to_bag(&stores, id.into(), size, color)?;
            }
        },
        Commands::Checkout { promo } => commands::checkout::summary(&stores, promo.as_deref())?,
    }

    Ok(())
}
