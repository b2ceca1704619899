//! The in-memory catalog: products plus the categories they reference.

use crate::catalog::{Category, CategoryDraft, Product, ProductDraft};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Label shown for products without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Products and categories, kept in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from seed data.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// All products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a product by ID.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get a category by ID.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find a category by name, ignoring case.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.has_name(name))
    }

    /// Display name of a product's category.
    pub fn category_name(&self, id: Option<CategoryId>) -> &str {
        id.and_then(|id| self.category(id))
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Number of products referencing a category.
    pub fn product_count(&self, category_id: CategoryId) -> usize {
        self.products.iter().filter(|p| p.is_in(category_id)).count()
    }

    /// Number of products still available.
    pub fn in_stock_count(&self) -> usize {
        self.products.iter().filter(|p| p.in_stock).count()
    }

    /// Products with the highest IDs, newest first.
    pub fn newest(&self, limit: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.iter().collect();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        products.truncate(limit);
        products
    }

    /// Available products from the same category, excluding the product itself.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == product.category_id && p.id != product.id && p.in_stock)
            .take(limit)
            .collect()
    }

    /// Create a product from a draft and put it at the front of the list.
    ///
    /// The new ID is one above the highest existing ID (1 for an empty catalog).
    /// Without an explicit category the first category is used.
    pub fn add_product(
        &mut self,
        draft: ProductDraft,
        currency: Currency,
    ) -> Result<&Product, CommerceError> {
        if let Some(category_id) = draft.category_id {
            self.ensure_category(category_id)?;
        }
        if let Some(price) = draft.price.filter(|p| p.currency != currency) {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency,
                found: price.currency,
            });
        }

        let id = ProductId::next_after(self.products.iter().map(|p| p.id));
        let default_category = self.categories.first().map(|c| c.id);
        let product = draft.into_product(id, default_category, currency);

        self.products.insert(0, product);
        Ok(&self.products[0])
    }

    /// Replace a product with the same ID.
    pub fn update_product(&mut self, product: Product) -> Result<(), CommerceError> {
        if let Some(category_id) = product.category_id {
            self.ensure_category(category_id)?;
        }

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(CommerceError::ProductNotFound(product.id))?;
        *slot = product;
        Ok(())
    }

    /// Remove a product. Returns the removed product, if it existed.
    pub fn delete_product(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Flip the stock flag off for every listed product.
    pub fn mark_sold(&mut self, ids: &[ProductId]) {
        for product in self.products.iter_mut().filter(|p| ids.contains(&p.id)) {
            product.mark_sold();
        }
    }

    /// Add a category. Names must be unique ignoring case.
    pub fn add_category(&mut self, draft: CategoryDraft) -> Result<&Category, CommerceError> {
        draft.validate()?;
        if self.category_by_name(&draft.name).is_some() {
            return Err(CommerceError::DuplicateCategory(draft.name.trim().to_string()));
        }

        let id = CategoryId::next_after(self.categories.iter().map(|c| c.id));
        self.categories
            .push(Category::new(id, draft.name.trim(), draft.image.trim()));
        let index = self.categories.len() - 1;
        Ok(&self.categories[index])
    }

    /// Update a category's name and image.
    ///
    /// Products reference the ID, so a rename keeps them attached. The new
    /// name must not collide with a different category.
    pub fn update_category(
        &mut self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> Result<(), CommerceError> {
        draft.validate()?;
        if self
            .categories
            .iter()
            .any(|c| c.id != id && c.has_name(&draft.name))
        {
            return Err(CommerceError::DuplicateCategory(draft.name.trim().to_string()));
        }

        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CommerceError::CategoryNotFound(id))?;
        category.name = draft.name.trim().to_string();
        category.image = draft.image.trim().to_string();
        Ok(())
    }

    /// Remove a category that no product references.
    pub fn delete_category(&mut self, id: CategoryId) -> Result<Category, CommerceError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(CommerceError::CategoryNotFound(id))?;

        let in_use = self.product_count(id);
        if in_use > 0 {
            return Err(CommerceError::CategoryInUse {
                name: self.categories[index].name.clone(),
                products: in_use,
            });
        }

        Ok(self.categories.remove(index))
    }

    fn ensure_category(&self, id: CategoryId) -> Result<(), CommerceError> {
        self.category(id)
            .map(|_| ())
            .ok_or(CommerceError::CategoryNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        let jaket = Category::new(CategoryId::new(1), "Jaket", "https://img/jackets");
        let kemeja = Category::new(CategoryId::new(2), "Kemeja", "https://img/shirts");
        let mut catalog = Catalog::new(Vec::new(), vec![jaket, kemeja]);
        for (name, category) in [("Denim", 1), ("Bomber", 1), ("Flanel", 2)] {
            catalog
                .add_product(
                    ProductDraft {
                        name: Some(name.to_string()),
                        price: Some(Money::idr(100_000)),
                        category_id: Some(CategoryId::new(category)),
                        ..Default::default()
                    },
                    Currency::IDR,
                )
                .unwrap();
        }
        catalog
    }

    #[test]
    fn test_add_product_to_empty_catalog_gets_id_one() {
        let mut catalog = Catalog::default();
        let product = catalog
            .add_product(ProductDraft::default(), Currency::IDR)
            .unwrap();
        let (id, category_id) = (product.id, product.category_id);
        assert_eq!(id, ProductId::new(1));
        assert_eq!(category_id, None);
        assert_eq!(catalog.category_name(category_id), UNCATEGORIZED);
    }

    #[test]
    fn test_add_product_goes_first_with_next_id() {
        let mut catalog = catalog();
        let id = catalog
            .add_product(ProductDraft::default(), Currency::IDR)
            .unwrap()
            .id;
        assert_eq!(id, ProductId::new(4));
        assert_eq!(catalog.products()[0].id, id);
        assert_eq!(catalog.products()[0].category_id, Some(CategoryId::new(1)));
    }

    #[test]
    fn test_add_product_with_unknown_category() {
        let mut catalog = catalog();
        let result = catalog.add_product(
            ProductDraft {
                category_id: Some(CategoryId::new(99)),
                ..Default::default()
            },
            Currency::IDR,
        );
        assert_eq!(result.unwrap_err(), CommerceError::CategoryNotFound(CategoryId::new(99)));
        assert_eq!(catalog.products().len(), 3);
    }

    #[test]
    fn test_add_product_in_foreign_currency_is_rejected() {
        let mut catalog = catalog();
        let result = catalog.add_product(
            ProductDraft {
                price: Some(Money::new(40, Currency::USD)),
                ..Default::default()
            },
            Currency::IDR,
        );
        assert_eq!(
            result.unwrap_err(),
            CommerceError::CurrencyMismatch {
                expected: Currency::IDR,
                found: Currency::USD,
            }
        );
        assert_eq!(catalog.products().len(), 3);
    }

    #[test]
    fn test_update_product() {
        let mut catalog = catalog();
        let mut product = catalog.product(ProductId::new(2)).unwrap().clone();
        product.name = "Bomber Hijau".to_string();
        catalog.update_product(product).unwrap();
        assert_eq!(catalog.product(ProductId::new(2)).unwrap().name, "Bomber Hijau");

        let mut missing = catalog.product(ProductId::new(2)).unwrap().clone();
        missing.id = ProductId::new(42);
        assert_eq!(
            catalog.update_product(missing).unwrap_err(),
            CommerceError::ProductNotFound(ProductId::new(42))
        );
    }

    #[test]
    fn test_delete_product() {
        let mut catalog = catalog();
        assert!(catalog.delete_product(ProductId::new(1)).is_some());
        assert!(catalog.delete_product(ProductId::new(1)).is_none());
        assert_eq!(catalog.products().len(), 2);
    }

    #[test]
    fn test_mark_sold() {
        let mut catalog = catalog();
        catalog.mark_sold(&[ProductId::new(1), ProductId::new(3)]);
        assert!(!catalog.product(ProductId::new(1)).unwrap().in_stock);
        assert!(catalog.product(ProductId::new(2)).unwrap().in_stock);
        assert!(!catalog.product(ProductId::new(3)).unwrap().in_stock);
        assert_eq!(catalog.in_stock_count(), 1);
    }

    #[test]
    fn test_add_category_rejects_duplicate_ignoring_case() {
        let mut catalog = catalog();
        let result = catalog.add_category(CategoryDraft::new("jaket", "https://img"));
        assert_eq!(result.unwrap_err(), CommerceError::DuplicateCategory("jaket".to_string()));
        assert_eq!(catalog.categories().len(), 2);

        let added = catalog
            .add_category(CategoryDraft::new("Rok", "https://img/skirts"))
            .unwrap();
        assert_eq!(added.id, CategoryId::new(3));
    }

    #[test]
    fn test_rename_category_keeps_products_attached() {
        let mut catalog = catalog();
        catalog
            .update_category(CategoryId::new(1), CategoryDraft::new("Jacket", "https://img"))
            .unwrap();
        assert_eq!(catalog.category_name(Some(CategoryId::new(1))), "Jacket");
        assert_eq!(catalog.product_count(CategoryId::new(1)), 2);

        let collision =
            catalog.update_category(CategoryId::new(1), CategoryDraft::new("KEMEJA", "https://img"));
        assert!(matches!(collision, Err(CommerceError::DuplicateCategory(_))));

        // Changing only the image keeps its own name.
        catalog
            .update_category(CategoryId::new(1), CategoryDraft::new("jacket", "https://new"))
            .unwrap();
    }

    #[test]
    fn test_delete_category_in_use() {
        let mut catalog = catalog();
        let result = catalog.delete_category(CategoryId::new(2));
        assert_eq!(
            result.unwrap_err(),
            CommerceError::CategoryInUse {
                name: "Kemeja".to_string(),
                products: 1
            }
        );
        assert_eq!(catalog.categories().len(), 2);

        catalog.delete_product(ProductId::new(3));
        let removed = catalog.delete_category(CategoryId::new(2)).unwrap();
        assert_eq!(removed.name, "Kemeja");
        assert_eq!(catalog.categories().len(), 1);
    }

    #[test]
    fn test_newest_and_related() {
        let catalog = catalog();
        let newest: Vec<_> = catalog.newest(2).iter().map(|p| p.id.get()).collect();
        assert_eq!(newest, vec![3, 2]);

        let denim = catalog.product(ProductId::new(1)).unwrap();
        let related: Vec<_> = catalog.related(denim, 4).iter().map(|p| p.id.get()).collect();
        assert_eq!(related, vec![2]);
    }
}
