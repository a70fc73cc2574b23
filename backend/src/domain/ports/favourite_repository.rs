//! Driven port for favourite persistence.
//!
//! The `(user_id, pokemon_id)` pair is unique. Adapters enforce this with the
//! store's own constraint and report a losing insert as
//! [`FavouriteRepositoryError::Duplicate`], which keeps concurrent adds for
//! the same pair race-free: exactly one insert wins.

use async_trait::async_trait;

use crate::domain::{Favourite, PokemonId, PokemonSummary, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by favourite repository adapters.
    pub enum FavouriteRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "favourite repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "favourite repository query failed: {message}",
        /// A favourite already exists for the pair.
        Duplicate { user_id: i64, pokemon_id: i32 } =>
            "user {user_id} already favourited pokemon {pokemon_id}",
    }
}

/// Port for favourite storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouriteRepository: Send + Sync {
    /// Insert a favourite.
    ///
    /// Fails with [`FavouriteRepositoryError::Duplicate`] when the pair is
    /// already stored; no second row is ever written.
    async fn insert(&self, favourite: &Favourite) -> Result<(), FavouriteRepositoryError>;

    /// Delete the favourite for the pair, returning whether a row existed.
    async fn delete(
        &self,
        user_id: UserId,
        pokemon_id: PokemonId,
    ) -> Result<bool, FavouriteRepositoryError>;

    /// Whether the pair is currently favourited.
    async fn exists(
        &self,
        user_id: UserId,
        pokemon_id: PokemonId,
    ) -> Result<bool, FavouriteRepositoryError>;

    /// Entries the user has favourited, joined with the catalogue and ordered
    /// by pokemon id.
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PokemonSummary>, FavouriteRepositoryError>;
}
