//! Output formatting for the CLI.

use console::{style, Term};
use retrove_commerce::catalog::Product;
use retrove_commerce::cart::PriceSummary;
use retrove_commerce::checkout::OrderStatus;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a blank line.
    pub fn blank(&self) {
        if !self.json {
            println!();
        }
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize + ?Sized>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", truncate(col, *width), width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print a horizontal rule as wide as the given table.
    pub fn rule(&self, widths: &[usize]) {
        if self.json {
            return;
        }
        let width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        println!("  {}", style("-".repeat(width.min(self.term_width()))).dim());
    }

    /// Print product rows as a table.
    pub fn products(&self, products: &[&Product]) {
        let widths = [5, 44, 14, 8, 10];
        self.table_row(&["ID", "NAME", "PRICE", "SIZE", "STATUS"], &widths);
        self.rule(&widths);
        for product in products {
            self.table_row(
                &[
                    &product.id.to_string(),
                    &product.name,
                    &product.price.display(),
                    &product.size,
                    if product.in_stock { "in stock" } else { "sold out" },
                ],
                &widths,
            );
        }
    }

    /// Print a price breakdown.
    pub fn summary(&self, summary: &PriceSummary) {
        self.kv("items", &summary.item_count.to_string());
        self.kv("subtotal", &summary.subtotal.display());
        self.kv("shipping", &summary.shipping.display());
        self.kv("total", &style(summary.total.display()).bold().to_string());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        match self.term.size().1 as usize {
            0 => 80,
            width => width,
        }
    }
}

/// Status badge for order states.
pub fn status_badge(status: OrderStatus) -> String {
    let name = status.display_name();
    match status {
        OrderStatus::Delivered => style(name).green().to_string(),
        OrderStatus::Shipped => style(name).cyan().to_string(),
        OrderStatus::Paid => style(name).blue().to_string(),
        OrderStatus::Pending => style(name).yellow().to_string(),
    }
}

/// Badge for a product's stock state.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("in stock").green().to_string()
    } else {
        style("sold out").red().to_string()
    }
}

/// Shorten text to `width` characters, ending with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

/// Render a rating as stars, e.g. `★★★★☆ 4.3`.
pub fn format_rating(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Jaket", 10), "Jaket");
        assert_eq!(truncate("Jaket Denim Levi's", 8), "Jaket D…");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.8), "★★★★★ 4.8");
        assert_eq!(format_rating(4.2), "★★★★☆ 4.2");
        assert_eq!(format_rating(0.0), "☆☆☆☆☆ 0.0");
    }
}
