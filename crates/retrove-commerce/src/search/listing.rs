//! Which slice of the catalog a product list shows.

use crate::catalog::{Catalog, Product};
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Number of products on the "new arrivals" listing.
pub const NEW_ARRIVALS_LIMIT: usize = 12;

/// Number of new arrivals featured on the home page.
pub const HOME_FEATURED_LIMIT: usize = 4;

/// A product listing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Listing {
    /// Every product.
    #[default]
    All,
    /// Products in one category.
    Category(CategoryId),
    /// The newest products, highest ID first.
    NewArrivals,
}

impl Listing {
    /// Select the products for this listing.
    pub fn select<'a>(&self, catalog: &'a Catalog, new_arrivals_limit: usize) -> Vec<&'a Product> {
        match self {
            Listing::All => catalog.products().iter().collect(),
            Listing::Category(id) => catalog
                .products()
                .iter()
                .filter(|p| p.is_in(*id))
                .collect(),
            Listing::NewArrivals => catalog.newest(new_arrivals_limit),
        }
    }

    /// Heading for the listing page.
    pub fn title(&self, catalog: &Catalog) -> String {
        match self {
            Listing::All => "Semua Produk".to_string(),
            Listing::Category(id) => format!("Koleksi {}", catalog.category_name(Some(*id))),
            Listing::NewArrivals => "Koleksi Baru Masuk".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ProductDraft};
    use crate::money::{Currency, Money};

    fn catalog(count: u64) -> Catalog {
        let mut catalog = Catalog::new(
            Vec::new(),
            vec![
                Category::new(CategoryId::new(1), "Jaket", "img"),
                Category::new(CategoryId::new(2), "Kemeja", "img"),
            ],
        );
        for i in 0..count {
            catalog
                .add_product(
                    ProductDraft {
                        price: Some(Money::idr(1000)),
                        category_id: Some(CategoryId::new(1 + i % 2)),
                        ..Default::default()
                    },
                    Currency::IDR,
                )
                .unwrap();
        }
        catalog
    }

    #[test]
    fn test_all_and_category() {
        let catalog = catalog(6);
        assert_eq!(Listing::All.select(&catalog, NEW_ARRIVALS_LIMIT).len(), 6);

        let kemeja = Listing::Category(CategoryId::new(2)).select(&catalog, NEW_ARRIVALS_LIMIT);
        assert_eq!(kemeja.len(), 3);
        assert!(kemeja.iter().all(|p| p.is_in(CategoryId::new(2))));
    }

    #[test]
    fn test_new_arrivals_are_newest_first_and_capped() {
        let catalog = catalog(20);
        let ids: Vec<u64> = Listing::NewArrivals
            .select(&catalog, NEW_ARRIVALS_LIMIT)
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(ids[0], 20);
        assert_eq!(ids[11], 9);
    }

    #[test]
    fn test_titles() {
        let catalog = catalog(1);
        assert_eq!(Listing::All.title(&catalog), "Semua Produk");
        assert_eq!(Listing::Category(CategoryId::new(1)).title(&catalog), "Koleksi Jaket");
        assert_eq!(Listing::NewArrivals.title(&catalog), "Koleksi Baru Masuk");
    }
}
