//! Seeding settings derived from [`crate::settings::AppSettings`].

use std::path::PathBuf;

use example_data::{CatalogueRegistry, RegistryError};

/// Configuration values controlling reference data seeding at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleDataSettings {
    /// Seed on startup.
    pub enabled: bool,
    /// Registry file override; the bundled registry is used when unset.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Whether seeding should run.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Load the configured registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or fails
    /// validation.
    pub fn load_registry(&self) -> Result<CatalogueRegistry, RegistryError> {
        match &self.registry_path {
            Some(path) => CatalogueRegistry::from_file(path),
            None => CatalogueRegistry::embedded(),
        }
    }
}
