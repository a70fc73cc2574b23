//! Driving port for favourite mutations.
//!
//! Inbound adapters call this port to add or remove a favourite for the
//! authenticated user without touching persistence directly.

use async_trait::async_trait;

use crate::domain::{Error, Favourite, PokemonId, UserId};

/// Domain use-case port for changing a user's favourites.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouritesCommand: Send + Sync {
    /// Favourite a catalogue entry.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::ErrorCode::NotFound`] when the entry does not exist.
    /// - [`crate::domain::ErrorCode::Conflict`] when the pair is already
    ///   favourited.
    async fn add_favourite(&self, user_id: UserId, pokemon_id: PokemonId)
    -> Result<Favourite, Error>;

    /// Remove a favourite.
    ///
    /// # Errors
    ///
    /// [`crate::domain::ErrorCode::NotFound`] when the pair was not
    /// favourited.
    async fn remove_favourite(&self, user_id: UserId, pokemon_id: PokemonId) -> Result<(), Error>;
}
