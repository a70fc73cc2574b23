//! Driving port for reading a user's favourites.

use async_trait::async_trait;

use crate::domain::{Error, FavouritesListing, PokemonId, UserId};

/// Domain use-case port for favourite lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouritesQuery: Send + Sync {
    /// List the user's favourites, ascending by pokemon id.
    async fn list_favourites(&self, user_id: UserId) -> Result<FavouritesListing, Error>;

    /// Whether the user has favourited the entry.
    async fn is_favourite(&self, user_id: UserId, pokemon_id: PokemonId) -> Result<bool, Error>;
}
