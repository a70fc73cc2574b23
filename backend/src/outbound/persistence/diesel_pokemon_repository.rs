//! PostgreSQL-backed `PokemonRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{PokemonRepository, PokemonRepositoryError};
use crate::domain::{PageRequest, Pokemon, PokemonId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::PokemonRow;
use super::pool::{DbPool, PoolError};
use super::schema::pokemon;

/// Diesel implementation of the catalogue port.
#[derive(Clone)]
pub struct DieselPokemonRepository {
    pool: DbPool,
}

impl DieselPokemonRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PokemonRepositoryError {
    map_basic_pool_error(error, PokemonRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PokemonRepositoryError {
    map_basic_diesel_error(
        error,
        PokemonRepositoryError::query,
        PokemonRepositoryError::connection,
    )
}

fn row_to_pokemon(row: PokemonRow) -> Result<Pokemon, PokemonRepositoryError> {
    let id = PokemonId::new(row.id).map_err(|err| {
        warn!(id = row.id, "stored pokemon id failed validation");
        PokemonRepositoryError::query(format!("invalid stored pokemon id: {err}"))
    })?;
    Ok(Pokemon {
        id,
        name: row.name,
        primary_type: row.primary_type,
        secondary_type: row.secondary_type,
        image_url: row.image_url,
    })
}

#[async_trait]
impl PokemonRepository for DieselPokemonRepository {
    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, PokemonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = pokemon::table
            .filter(pokemon::id.eq(id.get()))
            .select(PokemonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_pokemon).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<(Vec<Pokemon>, u64), PokemonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PokemonRow> = pokemon::table
            .order(pokemon::id.asc())
            .limit(i64::from(page.limit()))
            .offset(i64::from(page.offset()))
            .select(PokemonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let total: i64 = pokemon::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(row_to_pokemon)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((items, u64::try_from(total).unwrap_or(0)))
    }
}
