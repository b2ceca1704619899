//! Customer details collected at checkout.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// The checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl CustomerDetails {
    /// Create details with the required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            city: None,
            zip: None,
        }
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the postal code.
    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = Some(zip.into());
        self
    }

    /// Required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }

    /// Check that name, email and address are filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing.join(", ")))
        }
    }

    /// Format the shipping address as a single line.
    pub fn one_line_address(&self) -> String {
        let mut parts = vec![self.address.trim().to_string()];
        let locality = [self.city.as_deref(), self.zip.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !locality.is_empty() {
            parts.push(locality);
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_details() {
        let details = CustomerDetails::new("Dewi", "dewi@example.com", "Jl. Merdeka 17");
        assert!(details.validate().is_ok());
        assert_eq!(details.one_line_address(), "Jl. Merdeka 17");
    }

    #[test]
    fn test_missing_fields() {
        let details = CustomerDetails::new("Dewi", " ", "");
        assert_eq!(details.missing_fields(), vec!["email", "address"]);
        assert_eq!(
            details.validate().unwrap_err(),
            CommerceError::CheckoutIncomplete("email, address".to_string())
        );
    }

    #[test]
    fn test_address_with_city_and_zip() {
        let details = CustomerDetails::new("Eko", "eko@example.com", "Jl. Sudirman 22")
            .with_city("Bandung")
            .with_zip("40111");
        assert_eq!(details.one_line_address(), "Jl. Sudirman 22, Bandung 40111");

        let city_only = CustomerDetails::new("Eko", "eko@example.com", "Jl. Sudirman 22")
            .with_city("Bandung");
        assert_eq!(city_only.one_line_address(), "Jl. Sudirman 22, Bandung");
    }
}
