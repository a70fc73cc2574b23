//! PostgreSQL-backed `FavouriteRepository`.
//!
//! Inserts use `ON CONFLICT DO NOTHING` against the composite primary key and
//! inspect the affected row count: zero rows means another request already
//! stored the pair, which is reported as
//! [`FavouriteRepositoryError::Duplicate`]. Concurrent adds therefore never
//! surface as unique-violation errors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FavouriteRepository, FavouriteRepositoryError};
use crate::domain::{Favourite, PokemonId, PokemonSummary, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewFavouriteRow, PokemonSummaryRow};
use super::pool::{DbPool, PoolError};
use super::schema::{favourites, pokemon};

/// Diesel implementation of the favourites port.
#[derive(Clone)]
pub struct DieselFavouriteRepository {
    pool: DbPool,
}

impl DieselFavouriteRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FavouriteRepositoryError {
    map_basic_pool_error(error, FavouriteRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FavouriteRepositoryError {
    map_basic_diesel_error(
        error,
        FavouriteRepositoryError::query,
        FavouriteRepositoryError::connection,
    )
}

/// Interpret the affected row count of a conflict-tolerant insert.
fn insert_outcome(
    affected: usize,
    favourite: &Favourite,
) -> Result<(), FavouriteRepositoryError> {
    if affected == 0 {
        debug!(
            user_id = favourite.user_id.get(),
            pokemon_id = favourite.pokemon_id.get(),
            "favourite insert skipped by conflict"
        );
        return Err(FavouriteRepositoryError::duplicate(
            favourite.user_id.get(),
            favourite.pokemon_id.get(),
        ));
    }
    Ok(())
}

fn row_to_summary(row: PokemonSummaryRow) -> Result<PokemonSummary, FavouriteRepositoryError> {
    let id = PokemonId::new(row.id)
        .map_err(|err| FavouriteRepositoryError::query(format!("invalid stored pokemon id: {err}")))?;
    Ok(PokemonSummary { id, name: row.name })
}

#[async_trait]
impl FavouriteRepository for DieselFavouriteRepository {
    async fn insert(&self, favourite: &Favourite) -> Result<(), FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewFavouriteRow {
            user_id: favourite.user_id.get(),
            pokemon_id: favourite.pokemon_id.get(),
            created_at: favourite.created_at,
        };

        let affected = diesel::insert_into(favourites::table)
            .values(&row)
            .on_conflict((favourites::user_id, favourites::pokemon_id))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        insert_outcome(affected, favourite)
    }

    async fn delete(
        &self,
        user_id: UserId,
        pokemon_id: PokemonId,
    ) -> Result<bool, FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(
            favourites::table
                .filter(favourites::user_id.eq(user_id.get()))
                .filter(favourites::pokemon_id.eq(pokemon_id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn exists(
        &self,
        user_id: UserId,
        pokemon_id: PokemonId,
    ) -> Result<bool, FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            favourites::table
                .filter(favourites::user_id.eq(user_id.get()))
                .filter(favourites::pokemon_id.eq(pokemon_id.get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PokemonSummary>, FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PokemonSummaryRow> = favourites::table
            .inner_join(pokemon::table)
            .filter(favourites::user_id.eq(user_id.get()))
            .order(pokemon::id.asc())
            .select(PokemonSummaryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_summary).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for insert outcome handling.
    use super::*;
    use rstest::rstest;

    fn favourite() -> Favourite {
        Favourite::new(
            UserId::new(7).expect("valid user id"),
            PokemonId::new(25).expect("valid pokemon id"),
        )
    }

    #[rstest]
    fn one_affected_row_is_success() {
        assert!(insert_outcome(1, &favourite()).is_ok());
    }

    #[rstest]
    fn zero_affected_rows_is_duplicate() {
        let err = insert_outcome(0, &favourite()).expect_err("conflict");
        assert_eq!(err, FavouriteRepositoryError::duplicate(7_i64, 25_i32));
    }

    #[rstest]
    fn summaries_reject_invalid_ids() {
        let err = row_to_summary(PokemonSummaryRow {
            id: -1,
            name: "Missingno".to_owned(),
        })
        .expect_err("invalid id");
        assert!(matches!(err, FavouriteRepositoryError::Query { .. }));
    }
}
