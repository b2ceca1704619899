//! Order tracking and information pages.

use anyhow::{anyhow, Result};
use console::style;
use retrove_storefront::{Command, StaticPage};

use super::{PageArgs, TrackArgs};
use crate::context::Context;
use crate::output::status_badge;

/// Run the track command.
pub fn run(args: TrackArgs, ctx: &mut Context) -> Result<()> {
    ctx.store_mut()?.apply(Command::OpenTrackOrder)?;
    let result = print_tracking(&args.order_id, ctx);
    ctx.store_mut()?.apply(Command::CloseTrackOrder)?;
    result
}

fn print_tracking(input: &str, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let view = store.track_order(input)?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    let order = view.order;
    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("date", &order.date.to_string());
    ctx.output.kv("customer", &order.customer_name);
    ctx.output.kv("ship to", &order.address);
    ctx.output.kv("total", &order.total.display());
    ctx.output.kv("status", &status_badge(order.status));

    ctx.output.blank();
    for step in &view.timeline {
        let marker = if step.current {
            style("●").green().bold()
        } else if step.completed {
            style("●").green()
        } else {
            style("○").dim()
        };
        println!("  {} {}", marker, step.status.display_name());
    }

    if !order.items.is_empty() {
        ctx.output.header("Items");
        for item in &order.items {
            ctx.output.list_item(&format!("{} ({})", item.name, item.price.display()));
        }
    }

    Ok(())
}

/// Run the page command.
pub fn page(args: PageArgs, ctx: &mut Context) -> Result<()> {
    let page = StaticPage::from_str(&args.name).ok_or_else(|| {
        let names: Vec<&str> = StaticPage::ALL.iter().map(|p| p.as_str()).collect();
        anyhow!("Unknown page '{}' (expected one of: {})", args.name, names.join(", "))
    })?;
    ctx.store_mut()?.apply(Command::ViewStaticPage(page))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "page": page,
            "title": page.title(),
            "body": page.body(),
        }));
        return Ok(());
    }

    ctx.output.header(page.title());
    for paragraph in page.body() {
        ctx.output.blank();
        println!("  {}", paragraph);
    }

    Ok(())
}
