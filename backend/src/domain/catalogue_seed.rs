//! Reference data seeding.
//!
//! Converts the bundled catalogue registry into domain records and hands them
//! to the seeding repository port. The same conversion feeds the in-memory
//! adapters, so both storage modes serve identical data.

use std::sync::Arc;

use example_data::CatalogueRegistry;
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{
    CatalogueSeed, CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedReport, UserAccount,
};
use crate::domain::{
    Pokemon, PokemonId, PokemonValidationError, User, UserId, UserValidationError, Username,
};

/// Errors raised while preparing or applying reference data.
#[derive(Debug, Error)]
pub enum CatalogueSeedError {
    /// A registry entry failed catalogue validation.
    #[error("seed pokemon {id} is invalid: {source}")]
    InvalidPokemon {
        /// Rejected id.
        id: i32,
        /// Validation failure.
        #[source]
        source: PokemonValidationError,
    },
    /// A registry user failed identity validation.
    #[error("seed user {username} is invalid: {source}")]
    InvalidUser {
        /// Rejected username.
        username: String,
        /// Validation failure.
        #[source]
        source: UserValidationError,
    },
    /// Persistence adapter failed while seeding.
    #[error("reference data persistence error: {0}")]
    Persistence(#[from] CatalogueSeedRepositoryError),
}

/// Convert a registry into validated domain records.
///
/// # Examples
/// ```
/// use example_data::CatalogueRegistry;
/// use pokedex_backend::domain::seed_from_registry;
///
/// let registry = CatalogueRegistry::embedded().expect("bundled registry");
/// let seed = seed_from_registry(&registry).expect("valid seed");
/// assert_eq!(seed.pokemon.len(), registry.pokemon().len());
/// ```
pub fn seed_from_registry(
    registry: &CatalogueRegistry,
) -> Result<CatalogueSeed, CatalogueSeedError> {
    let pokemon = registry
        .pokemon()
        .iter()
        .map(|entry| {
            let id = PokemonId::new(entry.id()).map_err(|source| {
                CatalogueSeedError::InvalidPokemon {
                    id: entry.id(),
                    source,
                }
            })?;
            Ok(Pokemon {
                id,
                name: entry.name().to_owned(),
                primary_type: entry.primary_type().to_owned(),
                secondary_type: entry.secondary_type().map(str::to_owned),
                image_url: entry.image_url().map(str::to_owned),
            })
        })
        .collect::<Result<Vec<_>, CatalogueSeedError>>()?;

    let accounts = registry
        .users()
        .iter()
        .map(|seed| {
            let invalid = |source| CatalogueSeedError::InvalidUser {
                username: seed.username().to_owned(),
                source,
            };
            let id = UserId::new(seed.id()).map_err(invalid)?;
            let username = Username::new(seed.username()).map_err(invalid)?;
            Ok(UserAccount {
                user: User::new(id, username),
                password_sha256: seed.password_sha256().to_owned(),
            })
        })
        .collect::<Result<Vec<_>, CatalogueSeedError>>()?;

    Ok(CatalogueSeed { pokemon, accounts })
}

/// Applies bundled reference data through a [`CatalogueSeedRepository`].
#[derive(Clone)]
pub struct CatalogueSeeder<R> {
    repository: Arc<R>,
}

impl<R> CatalogueSeeder<R> {
    /// Create a seeder writing through `repository`.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CatalogueSeeder<R>
where
    R: CatalogueSeedRepository,
{
    /// Validate `registry` and insert whatever the store is missing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueSeedError`] when a registry entry fails domain
    /// validation or the repository rejects the write.
    pub async fn seed_from_registry(
        &self,
        registry: &CatalogueRegistry,
    ) -> Result<SeedReport, CatalogueSeedError> {
        let seed = seed_from_registry(registry)?;
        debug!(
            pokemon = seed.pokemon.len(),
            users = seed.accounts.len(),
            "applying reference data"
        );
        Ok(self.repository.seed(&seed).await?)
    }
}
