//! Catalog browsing commands.

use anyhow::{anyhow, bail, Result};
use retrove_commerce::ids::ProductId;
use retrove_commerce::search::{Listing, ProductQuery, SortOption};
use retrove_storefront::Command;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{format_rating, stock_badge};

/// Run the products command.
pub fn list(args: ProductsArgs, ctx: &mut Context) -> Result<()> {
    let listing = {
        let store = ctx.store()?;
        match (&args.category, args.new) {
            (Some(name), _) => {
                let category = store
                    .catalog()
                    .category_by_name(name)
                    .ok_or_else(|| anyhow!("No category named '{}'", name))?;
                Listing::Category(category.id)
            }
            (None, true) => Listing::NewArrivals,
            (None, false) => Listing::All,
        }
    };

    let Some(sort) = SortOption::from_str(&args.sort) else {
        bail!("Unknown sort '{}'", args.sort);
    };

    let mut query = ProductQuery::new(listing)
        .with_sort(sort)
        .with_pagination(args.page, args.per_page);
    if let Some(text) = args.search {
        query = query.with_text(text);
    }
    if args.in_stock {
        query = query.in_stock_only();
    }

    ctx.store_mut()?.apply(Command::SelectListing(listing))?;

    let store = ctx.store()?;
    let view = store.listing_view(&query);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&view.title);
    if view.results.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    ctx.output.products(&view.results.items);

    let page = &view.results.pagination;
    ctx.output.blank();
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{}, {})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages,
        sort.display_name()
    ));
    if page.total_pages > 1 {
        let pages: Vec<String> = page
            .page_numbers(7)
            .into_iter()
            .map(|n| if n == page.page { format!("[{}]", n) } else { n.to_string() })
            .collect();
        ctx.output.info(&format!("Pages: {}", pages.join(" ")));
    }

    Ok(())
}

/// Run the product command.
pub fn show(args: ProductArgs, ctx: &mut Context) -> Result<()> {
    let id = ProductId::new(args.id);
    ctx.store_mut()?.apply(Command::SelectProduct(id))?;

    let store = ctx.store()?;
    let view = store
        .product_view(id)
        .ok_or_else(|| anyhow!("Product not found: {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    let product = view.product;
    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("category", view.category_name);
    ctx.output.kv("size", &product.size);
    if let Some(details) = &product.size_details {
        ctx.output.kv("measurements", details);
    }
    ctx.output.kv("material", &product.material);
    ctx.output.kv("condition", &product.condition);
    ctx.output.kv("rating", &format_rating(product.rating));
    ctx.output.kv("status", &stock_badge(product.in_stock));
    ctx.output.kv("image", product.primary_image());
    if view.in_cart {
        ctx.output.kv("cart", "in your cart");
    }

    if !product.description.is_empty() {
        ctx.output.blank();
        println!("  {}", product.description);
    }

    if !product.reviews.is_empty() {
        ctx.output.header(&format!("Reviews ({})", product.reviews.len()));
        for review in &product.reviews {
            ctx.output.list_item(&format!(
                "{} ({}, {}/5): {}",
                review.author, review.date, review.rating, review.comment
            ));
        }
    }

    if !view.related.is_empty() {
        ctx.output.header("You may also like");
        ctx.output.products(&view.related);
    }

    Ok(())
}

/// Run the categories command.
pub fn categories(ctx: &mut Context) -> Result<()> {
    let store = ctx.store()?;
    let categories = store.catalog().categories();

    if ctx.output.is_json() {
        ctx.output.json(categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in categories {
        ctx.output.list_item(&format!(
            "{} ({} products)",
            category.name,
            store.catalog().product_count(category.id)
        ));
    }

    Ok(())
}
