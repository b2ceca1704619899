//! Product and review types.

use crate::ids::{CategoryId, ProductId, ReviewId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Image used when a new product is created without any.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/id/500/800/800";

/// A product in the catalog.
///
/// Every product is a single physical piece, so stock is a flag rather
/// than a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Price.
    pub price: Money,
    /// Image URLs, first one is the primary image.
    pub images: Vec<String>,
    /// Category this product belongs to (None when uncategorized).
    pub category_id: Option<CategoryId>,
    /// Size label (e.g., "L", "32", "One Size").
    pub size: String,
    /// Measurements (e.g., "P 68cm, L 55cm").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_details: Option<String>,
    /// Main material.
    pub material: String,
    /// Condition grade (e.g., "9/10 - Great").
    pub condition: String,
    /// Whether the piece is still available.
    pub in_stock: bool,
    /// Aggregate rating, 0 to 5.
    pub rating: f32,
    /// Customer reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Primary image URL.
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Check if the product can be bought.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Mark the piece as sold.
    pub fn mark_sold(&mut self) {
        self.in_stock = false;
    }

    /// Check if the product belongs to a category.
    pub fn is_in(&self, category_id: CategoryId) -> bool {
        self.category_id == Some(category_id)
    }
}

/// Partial product data from the admin form.
///
/// Omitted fields take defaults when the product is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub images: Option<Vec<String>>,
    pub category_id: Option<CategoryId>,
    pub size: Option<String>,
    pub size_details: Option<String>,
    pub material: Option<String>,
    pub condition: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductDraft {
    /// Build a product, filling omitted fields with defaults.
    pub fn into_product(
        self,
        id: ProductId,
        default_category: Option<CategoryId>,
        currency: Currency,
    ) -> Product {
        let images = self
            .images
            .filter(|images| !images.is_empty())
            .unwrap_or_else(|| vec![PLACEHOLDER_IMAGE.to_string()]);

        Product {
            id,
            name: self.name.unwrap_or_else(|| "New Product".to_string()),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_else(|| Money::zero(currency)),
            images,
            category_id: self.category_id.or(default_category),
            size: self.size.unwrap_or_else(|| "One Size".to_string()),
            size_details: self.size_details,
            material: self.material.unwrap_or_else(|| "Unknown".to_string()),
            condition: self.condition.unwrap_or_else(|| "New".to_string()),
            in_stock: self.in_stock.unwrap_or(true),
            rating: 0.0,
            reviews: Vec::new(),
        }
    }

    /// Apply the fields present in this draft to an existing product.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(images) = self.images.filter(|images| !images.is_empty()) {
            product.images = images;
        }
        if self.category_id.is_some() {
            product.category_id = self.category_id;
        }
        if let Some(size) = self.size {
            product.size = size;
        }
        if self.size_details.is_some() {
            product.size_details = self.size_details;
        }
        if let Some(material) = self.material {
            product.material = material;
        }
        if let Some(condition) = self.condition {
            product.condition = condition;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}

/// A customer review. Reviews are seeded and read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    /// Display date (e.g., "12 April 2024").
    pub date: String,
    /// Rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
}
