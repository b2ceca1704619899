//! Storefront configuration.

use std::path::{Path, PathBuf};

use retrove_commerce::checkout::StatusPolicy;
use retrove_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File names searched for when no config path is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["retrove.toml", ".retrove.toml", "retrove.json"];

/// Errors loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout and order settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Cart persistence.
    #[serde(default)]
    pub cart: CartConfig,

    /// Seed catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if is_json(path) {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        };

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find and load a config file from `start` or any of its parents.
    ///
    /// Returns the path that was loaded alongside the config. The first
    /// file found must load; a broken one is an error, not a fallthrough.
    pub fn discover(start: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    let config = Self::load(&candidate)?;
                    return Ok(Some((candidate, config)));
                }
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Flat shipping surcharge in the store currency.
    pub fn shipping(&self) -> Money {
        Money::new(self.checkout.shipping_surcharge, self.store.currency)
    }

    pub fn currency(&self) -> Currency {
        self.store.currency
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Currency every price is in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_store_name() -> String {
    "Retrove".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: Currency::IDR,
        }
    }
}

/// Checkout and order settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Flat surcharge added once per order, in currency units.
    #[serde(default = "default_shipping")]
    pub shipping_surcharge: i64,

    /// Order ID prefix (e.g., "RTV").
    #[serde(default = "default_order_prefix")]
    pub order_prefix: String,

    /// Number of the first order; later orders add the order count.
    #[serde(default = "default_order_base")]
    pub order_base: u64,

    /// Which status changes admins may make.
    #[serde(default)]
    pub status_policy: StatusPolicy,
}

fn default_shipping() -> i64 {
    25_000
}

fn default_order_prefix() -> String {
    "RTV".to_string()
}

fn default_order_base() -> u64 {
    1001
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_surcharge: default_shipping(),
            order_prefix: default_order_prefix(),
            order_base: default_order_base(),
            status_policy: StatusPolicy::Free,
        }
    }
}

/// Cart persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartConfig {
    /// Key the cart is stored under.
    #[serde(default = "default_cart_key")]
    pub key: String,

    /// Storage file. Without one the cart lives only in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_cart_key() -> String {
    "retroveCart".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            key: default_cart_key(),
            file: None,
        }
    }
}

/// Seed catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// RNG seed for the generated products.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// How many products the "new arrivals" listing shows.
    #[serde(default = "default_new_arrivals")]
    pub new_arrivals: usize,
}

fn default_seed() -> u64 {
    1001
}

fn default_new_arrivals() -> usize {
    12
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            new_arrivals: default_new_arrivals(),
        }
    }
}

/// Logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Generate a default retrove.toml config file.
pub fn generate_default_config() -> String {
    r#"# Retrove storefront configuration

[store]
name = "Retrove"
currency = "IDR"

[checkout]
shipping_surcharge = 25000
order_prefix = "RTV"
order_base = 1001
# "free" allows any status change, "strict" only one step forward
status_policy = "free"

[cart]
key = "retroveCart"
file = ".retrove/storage.json"

[catalog]
seed = 1001
new_arrivals = 12

[logging]
level = "warn"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.shipping(), Money::idr(25_000));
        assert_eq!(config.checkout.order_prefix, "RTV");
        assert_eq!(config.checkout.order_base, 1001);
        assert_eq!(config.cart.key, "retroveCart");
        assert_eq!(config.catalog.new_arrivals, 12);
        assert_eq!(config.checkout.status_policy, StatusPolicy::Free);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [checkout]
            shipping_surcharge = 30000
            status_policy = "strict"
            "#,
        )
        .unwrap();
        assert_eq!(config.checkout.shipping_surcharge, 30_000);
        assert_eq!(config.checkout.status_policy, StatusPolicy::Strict);
        assert_eq!(config.checkout.order_prefix, "RTV");
        assert_eq!(config.store.name, "Retrove");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.cart.file, Some(PathBuf::from(".retrove/storage.json")));
        assert_eq!(config.store.currency, Currency::IDR);
    }

    #[test]
    fn test_json_config() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"store": {"currency": "USD"}}"#).unwrap();
        assert_eq!(config.currency(), Currency::USD);
        assert_eq!(config.shipping().currency, Currency::USD);
    }

    #[test]
    fn test_save_and_load_round_trip_through_disk() {
        let dir = std::env::temp_dir().join(format!("retrove-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("retrove.toml");

        let mut config = StorefrontConfig::default();
        config.store.name = "Retrove Bandung".to_string();
        config.save(&path).unwrap();

        let (found, loaded) = StorefrontConfig::discover(&dir).unwrap().unwrap();
        assert_eq!(found, path);
        assert_eq!(loaded.store.name, "Retrove Bandung");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_discover_fails_on_malformed_file() {
        let dir = std::env::temp_dir().join(format!("retrove-bad-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("retrove.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let result = StorefrontConfig::discover(&dir);
        assert!(
            matches!(&result, Err(ConfigError::Toml { path: p, .. }) if p == &path),
            "got {:?}",
            result.map(|found| found.map(|(p, _)| p))
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
