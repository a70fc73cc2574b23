//! PostgreSQL-backed reference data seeding.
//!
//! Users and catalogue entries are inserted in one transaction with
//! `ON CONFLICT DO NOTHING`, so repeated startups are no-ops and existing rows
//! are never overwritten.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{
    CatalogueSeed, CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedReport,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewPokemonRow, NewUserRow};
use super::pool::DbPool;
use super::schema::{pokemon, users};

/// Diesel implementation of the seeding port.
///
/// # Examples
///
/// ```rust,no_run
/// use pokedex_backend::outbound::persistence::{
///     DbPool, DieselCatalogueSeedRepository, PoolConfig,
/// };
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/pokedex")).await?;
/// let repository = DieselCatalogueSeedRepository::new(pool);
/// # let _ = repository;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DieselCatalogueSeedRepository {
    pool: DbPool,
}

impl DieselCatalogueSeedRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn user_rows(seed: &CatalogueSeed) -> Vec<NewUserRow<'_>> {
    seed.accounts
        .iter()
        .map(|account| NewUserRow {
            id: account.user.id().get(),
            username: account.user.username().as_ref(),
            password_sha256: account.password_sha256.as_str(),
        })
        .collect()
}

fn pokemon_rows(seed: &CatalogueSeed) -> Vec<NewPokemonRow<'_>> {
    seed.pokemon
        .iter()
        .map(|entry| NewPokemonRow {
            id: entry.id.get(),
            name: entry.name.as_str(),
            primary_type: entry.primary_type.as_str(),
            secondary_type: entry.secondary_type.as_deref(),
            image_url: entry.image_url.as_deref(),
        })
        .collect()
}

#[async_trait]
impl CatalogueSeedRepository for DieselCatalogueSeedRepository {
    async fn seed(&self, seed: &CatalogueSeed) -> Result<SeedReport, CatalogueSeedRepositoryError> {
        let user_rows = user_rows(seed);
        let pokemon_rows = pokemon_rows(seed);
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, CatalogueSeedRepositoryError::connection))?;

        conn.transaction(|conn| {
            async move {
                let users_inserted = if user_rows.is_empty() {
                    0
                } else {
                    diesel::insert_into(users::table)
                        .values(&user_rows)
                        .on_conflict_do_nothing()
                        .execute(conn)
                        .await?
                };

                let pokemon_inserted = if pokemon_rows.is_empty() {
                    0
                } else {
                    diesel::insert_into(pokemon::table)
                        .values(&pokemon_rows)
                        .on_conflict_do_nothing()
                        .execute(conn)
                        .await?
                };

                Ok::<_, diesel::result::Error>(SeedReport {
                    pokemon_inserted,
                    users_inserted,
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| {
            map_basic_diesel_error(
                err,
                CatalogueSeedRepositoryError::query,
                CatalogueSeedRepositoryError::connection,
            )
        })
    }
}
