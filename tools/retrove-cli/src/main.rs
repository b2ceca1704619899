//! Retrove CLI - terminal storefront and admin console.
//!
//! Commands:
//! - `retrove products` - Browse and search the catalog
//! - `retrove product` - Show one product
//! - `retrove categories` - List categories
//! - `retrove cart` - Show or change the cart
//! - `retrove checkout` - Check out the cart or buy one product
//! - `retrove track` - Track an order
//! - `retrove page` - Show an information page
//! - `retrove admin` - Admin console
//! - `retrove config` - Manage configuration
//! - `retrove shell` - Interactive session

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AdminArgs, CartArgs, CheckoutArgs, ConfigArgs, PageArgs, ProductArgs, ProductsArgs, TrackArgs,
};
use context::Context;

/// Retrove - vintage clothing storefront in the terminal
#[derive(Parser)]
#[command(name = "retrove")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Browse and search products
    Products(ProductsArgs),

    /// Show a product with related pieces
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Show or change the cart
    Cart(CartArgs),

    /// Check out the cart, or buy a single product
    #[command(alias = "buy")]
    Checkout(CheckoutArgs),

    /// Track an order by ID
    Track(TrackArgs),

    /// Show an information page (contact, faq, shipping, sizing)
    Page(PageArgs),

    /// Admin console
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Start an interactive session that keeps state between commands
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let mut ctx = Context::load(cli.config.as_deref(), output)?;
    init_tracing(cli.verbose, &ctx.config.logging.level);
    ctx.open_store()?;

    if let Err(e) = dispatch(cli.command, &mut ctx) {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Run one command against the context.
pub(crate) fn dispatch(command: Commands, ctx: &mut Context) -> Result<()> {
    match command {
        Commands::Products(args) => commands::products::list(args, ctx),
        Commands::Product(args) => commands::products::show(args, ctx),
        Commands::Categories => commands::products::categories(ctx),
        Commands::Cart(args) => commands::cart::run(args, ctx),
        Commands::Checkout(args) => commands::checkout::run(args, ctx),
        Commands::Track(args) => commands::track::run(args, ctx),
        Commands::Page(args) => commands::track::page(args, ctx),
        Commands::Admin(args) => commands::admin::run(args, ctx),
        Commands::Config(args) => commands::config::run(args, ctx),
        Commands::Shell => commands::shell::run(ctx),
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`, which wins over the
/// configured level.
fn init_tracing(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
