//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;
pub mod shell;
pub mod track;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show products in this category (by name).
    #[arg(long, conflicts_with = "new")]
    pub category: Option<String>,

    /// Only show the newest arrivals.
    #[arg(short, long)]
    pub new: bool,

    /// Search name and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Hide sold-out pieces.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order (featured, price-asc, price-desc, name-asc, newest, rating).
    #[arg(long, default_value = "featured")]
    pub sort: String,

    /// Page number.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Products per page.
    #[arg(long, default_value = "24")]
    pub per_page: usize,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: u64,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product ID.
        id: u64,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product ID.
        id: u64,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Buy this product now instead of checking out the cart.
    #[arg(short, long)]
    pub product: Option<u64>,

    /// Full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Street address.
    #[arg(long)]
    pub address: Option<String>,

    /// City.
    #[arg(long)]
    pub city: Option<String>,

    /// Postal code.
    #[arg(long)]
    pub zip: Option<String>,

    /// Never prompt; fail when details are missing.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the track command.
#[derive(Args)]
pub struct TrackArgs {
    /// Order ID (e.g., RTV-1001).
    pub order_id: String,
}

/// Arguments for the page command.
#[derive(Args)]
pub struct PageArgs {
    /// Page name: contact, faq, shipping or sizing.
    pub name: String,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: Option<AdminCommand>,
}

/// Product fields shared by add and edit.
#[derive(Args, Default)]
pub struct ProductFields {
    /// Product name.
    #[arg(long)]
    pub name: Option<String>,

    /// Description.
    #[arg(long)]
    pub description: Option<String>,

    /// Price in store currency units.
    #[arg(long)]
    pub price: Option<i64>,

    /// Image URL (repeatable).
    #[arg(long = "image")]
    pub images: Vec<String>,

    /// Category name.
    #[arg(long)]
    pub category: Option<String>,

    /// Size label.
    #[arg(long)]
    pub size: Option<String>,

    /// Measurements.
    #[arg(long)]
    pub size_details: Option<String>,

    /// Material.
    #[arg(long)]
    pub material: Option<String>,

    /// Condition.
    #[arg(long)]
    pub condition: Option<String>,

    /// Whether the piece is still available.
    #[arg(long)]
    pub in_stock: Option<bool>,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Revenue and inventory figures.
    Dashboard,
    /// List every product.
    Products,
    /// List orders.
    Orders {
        /// Only orders with this status.
        #[arg(short, long)]
        status: Option<String>,
    },
    /// List categories with product counts.
    Categories,
    /// Change an order's status.
    SetStatus {
        /// Order ID.
        order_id: String,
        /// New status: pending, paid, shipped or delivered.
        status: String,
    },
    /// Add a product.
    AddProduct(ProductFields),
    /// Edit a product; only the given fields change.
    EditProduct {
        /// Product ID.
        id: u64,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    DeleteProduct {
        /// Product ID.
        id: u64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a category.
    AddCategory {
        /// Category name.
        name: String,
        /// Image URL.
        #[arg(long)]
        image: String,
    },
    /// Rename a category or change its image.
    EditCategory {
        /// Category ID.
        id: u64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New image URL.
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a category with no products.
    DeleteCategory {
        /// Category ID.
        id: u64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default retrove.toml to the working directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
