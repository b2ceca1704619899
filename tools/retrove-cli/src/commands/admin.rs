//! Admin console commands.

use anyhow::{anyhow, bail, Result};
use dialoguer::Confirm;
use retrove_commerce::catalog::{CategoryDraft, ProductDraft};
use retrove_commerce::checkout::{Order, OrderStatus};
use retrove_commerce::ids::{CategoryId, ProductId};
use retrove_commerce::Money;
use retrove_storefront::views::AdminView;
use retrove_storefront::{AdminPage, Command, Event, Storefront};

use super::{AdminArgs, AdminCommand, ProductFields};
use crate::context::Context;
use crate::output::status_badge;

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &mut Context) -> Result<()> {
    ctx.store_mut()?.apply(Command::EnterAdmin)?;

    match args.command {
        Some(AdminCommand::Dashboard) | None => show_page(AdminPage::Dashboard, ctx),
        Some(AdminCommand::Products) => show_page(AdminPage::Products, ctx),
        Some(AdminCommand::Categories) => show_page(AdminPage::Categories, ctx),
        Some(AdminCommand::Orders { status }) => list_orders(status.as_deref(), ctx),
        Some(AdminCommand::SetStatus { order_id, status }) => set_status(&order_id, &status, ctx),
        Some(AdminCommand::AddProduct(fields)) => add_product(fields, ctx),
        Some(AdminCommand::EditProduct { id, fields }) => {
            edit_product(ProductId::new(id), fields, ctx)
        }
        Some(AdminCommand::DeleteProduct { id, yes }) => {
            delete_product(ProductId::new(id), yes, ctx)
        }
        Some(AdminCommand::AddCategory { name, image }) => {
            let event = ctx
                .store_mut()?
                .apply(Command::AddCategory(CategoryDraft::new(name, image)))?;
            report(&event, ctx)
        }
        Some(AdminCommand::EditCategory { id, name, image }) => {
            edit_category(CategoryId::new(id), name, image, ctx)
        }
        Some(AdminCommand::DeleteCategory { id, yes }) => {
            delete_category(CategoryId::new(id), yes, ctx)
        }
    }
}

fn show_page(page: AdminPage, ctx: &mut Context) -> Result<()> {
    ctx.store_mut()?.apply(Command::SelectAdminPage(page))?;

    let store = ctx.store()?;
    let view = store.admin_view(page)?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    match view {
        AdminView::Dashboard(stats) => {
            ctx.output.header("Dashboard");
            ctx.output.kv("revenue", &stats.revenue.display_thousands());
            ctx.output.kv("orders", &stats.order_count.to_string());
            ctx.output.kv("pending", &stats.pending_count.to_string());
            ctx.output.kv(
                "products",
                &format!("{} ({} in stock)", stats.product_count, stats.in_stock_count),
            );
        }
        AdminView::Products(products) => {
            ctx.output.header(&format!("Products ({})", products.len()));
            let rows: Vec<_> = products.iter().collect();
            ctx.output.products(&rows);
        }
        AdminView::Orders(orders) => print_orders(orders.iter(), ctx),
        AdminView::Categories(categories) => {
            ctx.output.header("Categories");
            let widths = [5, 20, 10, 40];
            ctx.output.table_row(&["ID", "NAME", "PRODUCTS", "IMAGE"], &widths);
            ctx.output.rule(&widths);
            for usage in &categories {
                ctx.output.table_row(
                    &[
                        &usage.category.id.to_string(),
                        &usage.category.name,
                        &usage.products.to_string(),
                        &usage.category.image,
                    ],
                    &widths,
                );
            }
        }
    }

    Ok(())
}

fn list_orders(status: Option<&str>, ctx: &mut Context) -> Result<()> {
    let Some(status) = status else {
        return show_page(AdminPage::Orders, ctx);
    };
    let status = parse_status(status)?;

    ctx.store_mut()?.apply(Command::SelectAdminPage(AdminPage::Orders))?;
    let store = ctx.store()?;
    let orders: Vec<&Order> = store.orders().with_status(status).collect();

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    print_orders(orders.into_iter(), ctx);
    Ok(())
}

fn print_orders<'a>(orders: impl Iterator<Item = &'a Order>, ctx: &Context) {
    ctx.output.header("Orders");
    let widths = [10, 12, 24, 14, 10];
    ctx.output.table_row(&["ID", "DATE", "CUSTOMER", "TOTAL", "STATUS"], &widths);
    ctx.output.rule(&widths);

    let mut count = 0;
    for order in orders {
        count += 1;
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &order.date.to_string(),
                &order.customer_name,
                &order.total.display(),
                order.status.display_name(),
            ],
            &widths,
        );
    }
    if count == 0 {
        ctx.output.info("No orders.");
    }
}

fn set_status(order_id: &str, status: &str, ctx: &mut Context) -> Result<()> {
    let status = parse_status(status)?;
    let order_id = {
        let store = ctx.store()?;
        store.orders().find(order_id)?.id.clone()
    };

    let event = ctx
        .store_mut()?
        .apply(Command::UpdateOrderStatus { order_id, status })?;
    report(&event, ctx)
}

fn parse_status(s: &str) -> Result<OrderStatus> {
    OrderStatus::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = OrderStatus::ALL.iter().map(|status| status.as_str()).collect();
        anyhow!("Unknown status '{}' (expected one of: {})", s, names.join(", "))
    })
}

fn add_product(fields: ProductFields, ctx: &mut Context) -> Result<()> {
    let draft = draft_from(fields, ctx.store()?)?;
    let event = ctx.store_mut()?.apply(Command::AddProduct(draft))?;
    report(&event, ctx)
}

fn edit_product(id: ProductId, fields: ProductFields, ctx: &mut Context) -> Result<()> {
    let product = {
        let store = ctx.store()?;
        let mut product = store
            .catalog()
            .product(id)
            .cloned()
            .ok_or_else(|| anyhow!("Product not found: {}", id))?;
        draft_from(fields, store)?.apply_to(&mut product);
        product
    };

    let event = ctx.store_mut()?.apply(Command::UpdateProduct(product))?;
    report(&event, ctx)
}

/// Turn form flags into a draft, resolving the category by name.
fn draft_from(fields: ProductFields, store: &Storefront) -> Result<ProductDraft> {
    let category_id = match &fields.category {
        Some(name) => Some(
            store
                .catalog()
                .category_by_name(name)
                .map(|c| c.id)
                .ok_or_else(|| anyhow!("No category named '{}'", name))?,
        ),
        None => None,
    };

    if fields.price.is_some_and(|p| p < 0) {
        bail!("Price cannot be negative");
    }

    Ok(ProductDraft {
        name: fields.name,
        description: fields.description,
        price: fields.price.map(|p| Money::new(p, store.config().currency())),
        images: (!fields.images.is_empty()).then_some(fields.images),
        category_id,
        size: fields.size,
        size_details: fields.size_details,
        material: fields.material,
        condition: fields.condition,
        in_stock: fields.in_stock,
    })
}

fn delete_product(id: ProductId, yes: bool, ctx: &mut Context) -> Result<()> {
    if !yes && !ctx.output.is_json() {
        let name = ctx
            .store()?
            .catalog()
            .product(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("product {}", id));
        if !confirm(&format!("Delete '{}'?", name))? {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    let event = ctx.store_mut()?.apply(Command::DeleteProduct(id))?;
    report(&event, ctx)
}

fn edit_category(
    id: CategoryId,
    name: Option<String>,
    image: Option<String>,
    ctx: &mut Context,
) -> Result<()> {
    let draft = {
        let store = ctx.store()?;
        let current = store
            .catalog()
            .category(id)
            .ok_or_else(|| anyhow!("Category not found: {}", id))?;
        CategoryDraft::new(
            name.unwrap_or_else(|| current.name.clone()),
            image.unwrap_or_else(|| current.image.clone()),
        )
    };

    let event = ctx.store_mut()?.apply(Command::UpdateCategory { id, draft })?;
    report(&event, ctx)
}

fn delete_category(id: CategoryId, yes: bool, ctx: &mut Context) -> Result<()> {
    if !yes && !ctx.output.is_json() {
        let name = ctx
            .store()?
            .catalog()
            .category(id)
            .map(|c| c.name.clone())
            .ok_or_else(|| anyhow!("Category not found: {}", id))?;
        if !confirm(&format!("Delete category '{}'?", name))? {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    let event = ctx.store_mut()?.apply(Command::DeleteCategory(id))?;
    report(&event, ctx)
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Print what an admin command did.
fn report(event: &Event, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(event);
        return Ok(());
    }

    match event {
        Event::ProductAdded(id) => ctx.output.success(&format!("Added product {}", id)),
        Event::ProductUpdated(id) => ctx.output.success(&format!("Updated product {}", id)),
        Event::ProductDeleted { product_id, removed: true } => {
            ctx.output.success(&format!("Deleted product {}", product_id))
        }
        Event::ProductDeleted { product_id, removed: false } => {
            ctx.output.warn(&format!("No product with ID {}", product_id))
        }
        Event::CategoryAdded(id) => ctx.output.success(&format!("Added category {}", id)),
        Event::CategoryUpdated(id) => ctx.output.success(&format!("Updated category {}", id)),
        Event::CategoryDeleted(id) => ctx.output.success(&format!("Deleted category {}", id)),
        Event::OrderStatusUpdated { order_id, from, to } => ctx.output.success(&format!(
            "Order {}: {} → {}",
            order_id,
            status_badge(*from),
            status_badge(*to)
        )),
        other => ctx.output.debug(&format!("{:?}", other)),
    }

    Ok(())
}
