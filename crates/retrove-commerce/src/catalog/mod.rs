//! Product catalog module.
//!
//! Contains types for products, categories, reviews and the catalog itself.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, UNCATEGORIZED};
pub use category::{Category, CategoryDraft};
pub use product::{Product, ProductDraft, Review, PLACEHOLDER_IMAGE};
