//! Cart commands.

use anyhow::Result;
use retrove_commerce::ids::ProductId;
use retrove_storefront::{Command, Event};

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show) | None => show(ctx),
        Some(CartCommand::Add { id }) => add(ProductId::new(id), ctx),
        Some(CartCommand::Remove { id }) => remove(ProductId::new(id), ctx),
    }
}

fn show(ctx: &mut Context) -> Result<()> {
    ctx.store_mut()?.apply(Command::ViewCart)?;

    let store = ctx.store()?;
    let view = store.cart_view()?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header("Your Cart");
    if view.items.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let items: Vec<_> = view.items.iter().collect();
    ctx.output.products(&items);
    ctx.output.blank();
    ctx.output.summary(&view.summary);
    ctx.output.blank();
    ctx.output.info("Run `retrove checkout` to place your order.");

    Ok(())
}

fn add(id: ProductId, ctx: &mut Context) -> Result<()> {
    let event = ctx.store_mut()?.apply(Command::AddToCart(id))?;

    if ctx.output.is_json() {
        ctx.output.json(&event);
        return Ok(());
    }

    if let Some(notice) = event.notice() {
        ctx.output.success(&notice);
    }
    ctx.output.debug(&format!("Cart now holds {} item(s)", ctx.store()?.cart().len()));

    Ok(())
}

fn remove(id: ProductId, ctx: &mut Context) -> Result<()> {
    let event = ctx.store_mut()?.apply(Command::RemoveFromCart(id))?;

    if ctx.output.is_json() {
        ctx.output.json(&event);
        return Ok(());
    }

    match event {
        Event::RemovedFromCart { removed: true, .. } => {
            ctx.output.success(&format!("Removed product {} from cart", id))
        }
        _ => ctx.output.warn(&format!("Product {} was not in your cart", id)),
    }

    Ok(())
}
