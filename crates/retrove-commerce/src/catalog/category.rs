//! Category types for product organization.

use crate::error::CommerceError;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// The id is stable; the name is a display attribute and may be renamed
/// without breaking product references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name, unique case-insensitively.
    pub name: String,
    /// Representative image URL.
    pub image: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: CategoryId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Category form data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub image: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Both name and image are required.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::InvalidCategory("name is required".to_string()));
        }
        if self.image.trim().is_empty() {
            return Err(CommerceError::InvalidCategory("image is required".to_string()));
        }
        Ok(())
    }
}
