//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use retrove_storefront::config::{generate_default_config, CONFIG_FILE_NAMES};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("currency", config.store.currency.code());

    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("shipping_surcharge", &config.shipping().display());
    ctx.output.kv("order_prefix", &config.checkout.order_prefix);
    ctx.output.kv("order_base", &config.checkout.order_base.to_string());
    ctx.output.kv(
        "status_policy",
        &format!("{:?}", config.checkout.status_policy).to_lowercase(),
    );

    ctx.output.info("");
    ctx.output.info("[cart]");
    ctx.output.kv("key", &config.cart.key);
    match &config.cart.file {
        Some(file) => ctx.output.kv("file", &file.display().to_string()),
        None => ctx.output.kv("file", "(memory only)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("seed", &config.catalog.seed.to_string());
    ctx.output.kv("new_arrivals", &config.catalog.new_arrivals.to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(CONFIG_FILE_NAMES[0]);

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "created": path }));
        return Ok(());
    }

    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}
