//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use retrove_storefront::{CartPersistence, Storefront, StorefrontConfig};

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Where the configuration was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    store: Option<Storefront>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config_path, config) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            let config = StorefrontConfig::load(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (Some(path), config)
        } else {
            match StorefrontConfig::discover(&cwd).context("Failed to load discovered config")? {
                Some((path, config)) => (Some(path), config),
                None => (None, StorefrontConfig::default()),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            store: None,
        })
    }

    /// Build the storefront, restoring the persisted cart.
    ///
    /// A relative cart file is taken relative to the config file's
    /// directory, or the working directory without one.
    pub fn open_store(&mut self) -> Result<()> {
        let mut config = self.config.clone();
        if let Some(file) = &config.cart.file {
            let base = self
                .config_path
                .as_deref()
                .and_then(Path::parent)
                .unwrap_or(self.cwd.as_path());
            config.cart.file = Some(resolve(base, file));
        }

        let persistence = CartPersistence::from_config(&config.cart)
            .context("Failed to open cart storage")?;
        self.output.debug(&format!("Cart stored under key '{}'", persistence.key()));

        self.store = Some(Storefront::new(config).with_persistence(persistence));
        Ok(())
    }

    pub fn store(&self) -> Result<&Storefront> {
        self.store.as_ref().ok_or_else(|| anyhow!("Storefront not opened"))
    }

    pub fn store_mut(&mut self) -> Result<&mut Storefront> {
        self.store.as_mut().ok_or_else(|| anyhow!("Storefront not opened"))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, Path::new(path))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let base = Path::new("/srv/shop");
        assert_eq!(resolve(base, Path::new("/tmp/cart.json")), PathBuf::from("/tmp/cart.json"));
        assert_eq!(
            resolve(base, Path::new(".retrove/storage.json")),
            PathBuf::from("/srv/shop/.retrove/storage.json")
        );
    }
}
