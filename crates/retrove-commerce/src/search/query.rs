//! In-memory product queries over a listing.

use crate::catalog::{Catalog, Product};
use crate::search::{Listing, Pagination, SearchResults};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for product lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Keep the listing's own order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by newest first.
    Newest,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Highest Rated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "featured" => Some(SortOption::Featured),
            "price-asc" => Some(SortOption::PriceAsc),
            "price-desc" => Some(SortOption::PriceDesc),
            "name" | "name-asc" => Some(SortOption::NameAsc),
            "newest" => Some(SortOption::Newest),
            "rating" => Some(SortOption::Rating),
            _ => None,
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::PriceAsc => a.price.amount.cmp(&b.price.amount),
            SortOption::PriceDesc => b.price.amount.cmp(&a.price.amount),
            SortOption::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::Newest => b.id.cmp(&a.id),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

/// A product query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductQuery {
    /// Which products to start from.
    pub listing: Listing,
    /// Case-insensitive text matched against name and description.
    pub text: Option<String>,
    /// Hide sold pieces.
    pub in_stock_only: bool,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new(Listing::All)
    }
}

impl ProductQuery {
    /// Create a new query over a listing.
    pub fn new(listing: Listing) -> Self {
        Self {
            listing,
            text: None,
            in_stock_only: false,
            sort: SortOption::Featured,
            page: 1,
            per_page: 24,
        }
    }

    /// Set the text query.
    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.text = if q.trim().is_empty() { None } else { Some(q) };
        self
    }

    /// Only show available pieces.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Run the query against the catalog.
    pub fn run<'a>(&self, catalog: &'a Catalog, new_arrivals_limit: usize) -> SearchResults<&'a Product> {
        let needle = self.text.as_ref().map(|t| t.trim().to_lowercase());

        let mut matched: Vec<&Product> = self
            .listing
            .select(catalog, new_arrivals_limit)
            .into_iter()
            .filter(|p| !self.in_stock_only || p.in_stock)
            .filter(|p| match &needle {
                Some(needle) => {
                    p.name.to_lowercase().contains(needle)
                        || p.description.to_lowercase().contains(needle)
                }
                None => true,
            })
            .collect();

        // Stable sort keeps listing order for ties.
        matched.sort_by(|a, b| self.sort.compare(a, b));

        let pagination = Pagination::new(self.page, self.per_page, matched.len());
        let items = matched
            .into_iter()
            .skip(pagination.offset())
            .take(self.per_page)
            .collect();

        SearchResults::new(items, pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        for (name, price, in_stock) in [
            ("Jaket Denim", 450_000, true),
            ("Kemeja Flanel", 220_000, true),
            ("Celana Kargo", 350_000, false),
        ] {
            catalog
                .add_product(
                    ProductDraft {
                        name: Some(name.to_string()),
                        price: Some(Money::idr(price)),
                        in_stock: Some(in_stock),
                        ..Default::default()
                    },
                    Currency::IDR,
                )
                .unwrap();
        }
        catalog
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = catalog();
        let results = ProductQuery::default()
            .with_sort(SortOption::PriceAsc)
            .run(&catalog, 12);
        let prices: Vec<i64> = results.items.iter().map(|p| p.price.amount).collect();
        assert_eq!(prices, vec![220_000, 350_000, 450_000]);
    }

    #[test]
    fn test_text_and_stock_filters() {
        let catalog = catalog();
        let results = ProductQuery::default().with_text("KEMEJA").run(&catalog, 12);
        assert_eq!(results.len(), 1);

        let results = ProductQuery::default().in_stock_only().run(&catalog, 12);
        assert_eq!(results.pagination.total, 2);
    }

    #[test]
    fn test_pagination() {
        let catalog = catalog();
        let results = ProductQuery::default()
            .with_sort(SortOption::Newest)
            .with_pagination(2, 2)
            .run(&catalog, 12);
        assert_eq!(results.len(), 1);
        assert_eq!(results.items[0].id.get(), 1);
        assert!(results.pagination.has_prev);
        assert!(!results.pagination.has_next);
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!(SortOption::from_str("price_desc"), Some(SortOption::PriceDesc));
        assert_eq!(SortOption::from_str("bogus"), None);
    }
}
