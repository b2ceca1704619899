//! Checkout command.

use anyhow::Result;
use dialoguer::{Confirm, Input};
use retrove_commerce::checkout::{CheckoutSource, CustomerDetails};
use retrove_commerce::ids::ProductId;
use retrove_storefront::{Command, Event};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &mut Context) -> Result<()> {
    let start = match args.product {
        Some(id) => Command::BuyNow(ProductId::new(id)),
        None => Command::CheckoutCart,
    };
    ctx.store_mut()?.apply(start)?;

    let interactive = !args.yes && !ctx.output.is_json();

    if !ctx.output.is_json() {
        let store = ctx.store()?;
        if let Some(view) = store.checkout_view()? {
            let title = match view.source {
                CheckoutSource::Cart => "Checkout".to_string(),
                CheckoutSource::BuyNow(id) => format!("Buy Now: product {}", id),
            };
            ctx.output.header(&title);
            let items: Vec<_> = view.items.iter().collect();
            ctx.output.products(&items);
            ctx.output.blank();
            ctx.output.summary(&view.summary);
        }
    }

    let details = collect_details(&args, interactive)?;

    if interactive {
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order not placed");
            return Ok(());
        }
    }

    let event = ctx.store_mut()?.apply(Command::PlaceOrder(details))?;

    if ctx.output.is_json() {
        ctx.output.json(&event);
        return Ok(());
    }

    if let Some(notice) = event.notice() {
        ctx.output.success(&notice);
    }
    if let Event::OrderPlaced { order_id, .. } = &event {
        ctx.output.info(&format!("Track it with `retrove track {}`", order_id));
    }

    Ok(())
}

/// Take customer details from flags, prompting for anything required that
/// is missing.
fn collect_details(args: &CheckoutArgs, interactive: bool) -> Result<CustomerDetails> {
    let name = field(args.name.as_deref(), "Full name", interactive)?;
    let email = field(args.email.as_deref(), "Email", interactive)?;
    let address = field(args.address.as_deref(), "Address", interactive)?;

    let mut details = CustomerDetails::new(name, email, address);

    let city = optional_field(args.city.as_deref(), "City", interactive)?;
    if !city.is_empty() {
        details = details.with_city(city);
    }
    let zip = optional_field(args.zip.as_deref(), "Postal code", interactive)?;
    if !zip.is_empty() {
        details = details.with_zip(zip);
    }

    Ok(details)
}

fn field(value: Option<&str>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?),
        // Left empty so validation names every missing field at once.
        _ => Ok(String::new()),
    }
}

fn optional_field(value: Option<&str>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value.to_string()),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CheckoutArgs {
        CheckoutArgs {
            product: None,
            name: Some("Dewi".into()),
            email: Some("dewi@example.com".into()),
            address: Some("Jl. Merdeka 17".into()),
            city: Some("Bandung".into()),
            zip: None,
            yes: true,
        }
    }

    #[test]
    fn test_details_from_flags() {
        let details = collect_details(&args(), false).unwrap();
        assert!(details.validate().is_ok());
        assert!(details.one_line_address().contains("Bandung"));
    }

    #[test]
    fn test_missing_flags_fail_validation() {
        let mut args = args();
        args.email = None;
        args.address = Some("   ".into());
        let details = collect_details(&args, false).unwrap();
        assert_eq!(details.missing_fields(), vec!["email", "address"]);
    }
}
