//! Startup seeding orchestration.

use std::sync::Arc;

use example_data::RegistryError;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::SeedReport;
use crate::domain::{CatalogueSeedError, CatalogueSeeder};
use crate::example_data::config::ExampleDataSettings;
use crate::outbound::persistence::{DbPool, DieselCatalogueSeedRepository};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry could not be read or parsed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Conversion or persistence failed.
    #[error("reference data seeding error: {0}")]
    Seeding(#[from] CatalogueSeedError),
}

/// Apply reference data on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled or no database is configured;
/// the in-memory adapters always carry the bundled data.
///
/// # Examples
///
/// ```rust,no_run
/// use pokedex_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: false,
///     registry_path: None,
/// };
/// let outcome = seed_example_data_on_startup(&settings, None).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<SeedReport>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let Some(db_pool) = db_pool else {
        warn!("example data seeding enabled but no database is configured; skipping");
        return Ok(None);
    };

    let registry = settings.load_registry()?;
    let seeder = CatalogueSeeder::new(Arc::new(DieselCatalogueSeedRepository::new(
        db_pool.clone(),
    )));
    let report = seeder.seed_from_registry(&registry).await?;

    if report.is_noop() {
        info!("example data already present; nothing inserted");
    } else {
        info!(
            pokemon_inserted = report.pokemon_inserted,
            users_inserted = report.users_inserted,
            "example data seeding applied"
        );
    }

    Ok(Some(report))
}
