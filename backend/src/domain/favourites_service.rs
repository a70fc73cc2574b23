//! Favourites domain service.
//!
//! Implements the favourites driving ports on top of the catalogue, favourite
//! and user repositories. Repository failures are translated into domain
//! errors here so adapters never leak storage details to callers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    FavouriteRepository, FavouriteRepositoryError, FavouritesCommand, FavouritesQuery,
    PokemonRepository, PokemonRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    EmptyFavouritesPolicy, Error, Favourite, FavouritesListing, PokemonId, UserId,
};

/// `details.code` attached to the not-found raised for an empty listing
/// under [`EmptyFavouritesPolicy::NotFound`].
///
/// Lets callers tell "nothing favourited yet" apart from other 404s such as
/// an unknown user.
pub const NO_FAVOURITES_DETAIL: &str = "no_favourites";

/// Favourites service implementing [`FavouritesCommand`] and
/// [`FavouritesQuery`].
#[derive(Clone)]
pub struct FavouritesService<P, F, U> {
    pokemon_repo: Arc<P>,
    favourite_repo: Arc<F>,
    user_repo: Arc<U>,
    empty_policy: EmptyFavouritesPolicy,
}

impl<P, F, U> FavouritesService<P, F, U> {
    /// Create a service using the default empty-list policy.
    pub fn new(pokemon_repo: Arc<P>, favourite_repo: Arc<F>, user_repo: Arc<U>) -> Self {
        Self {
            pokemon_repo,
            favourite_repo,
            user_repo,
            empty_policy: EmptyFavouritesPolicy::default(),
        }
    }

    /// Choose how an empty favourites list is reported.
    #[must_use]
    pub fn with_empty_policy(mut self, policy: EmptyFavouritesPolicy) -> Self {
        self.empty_policy = policy;
        self
    }
}

fn map_pokemon_error(error: PokemonRepositoryError) -> Error {
    match error {
        PokemonRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("pokemon repository unavailable: {message}"))
        }
        PokemonRepositoryError::Query { message } => {
            Error::internal(format!("pokemon repository error: {message}"))
        }
    }
}

fn map_favourite_error(error: FavouriteRepositoryError) -> Error {
    match error {
        FavouriteRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("favourite repository unavailable: {message}"))
        }
        FavouriteRepositoryError::Query { message } => {
            Error::internal(format!("favourite repository error: {message}"))
        }
        FavouriteRepositoryError::Duplicate {
            user_id,
            pokemon_id,
        } => already_favourited(user_id, pokemon_id),
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn already_favourited(user_id: i64, pokemon_id: i32) -> Error {
    Error::conflict("pokemon is already a favourite").with_details(json!({
        "userId": user_id,
        "pokemonId": pokemon_id,
    }))
}

#[async_trait]
impl<P, F, U> FavouritesCommand for FavouritesService<P, F, U>
where
    P: PokemonRepository,
    F: FavouriteRepository,
    U: UserRepository,
{
    async fn add_favourite(
        &self,
        user_id: UserId,
        pokemon_id: PokemonId,
    ) -> Result<Favourite, Error> {
        if self
            .pokemon_repo
            .find_by_id(pokemon_id)
            .await
            .map_err(map_pokemon_error)?
            .is_none()
        {
            return Err(Error::not_found(format!("pokemon {pokemon_id} not found")));
        }

        let favourite = Favourite::new(user_id, pokemon_id);
        self.favourite_repo
            .insert(&favourite)
            .await
            .map_err(map_favourite_error)?;
        debug!(%user_id, %pokemon_id, "favourite added");
        Ok(favourite)
    }

    async fn remove_favourite(&self, user_id: UserId, pokemon_id: PokemonId) -> Result<(), Error> {
        let removed = self
            .favourite_repo
            .delete(user_id, pokemon_id)
            .await
            .map_err(map_favourite_error)?;
        if !removed {
            return Err(Error::not_found(format!(
                "pokemon {pokemon_id} is not a favourite"
            )));
        }
        debug!(%user_id, %pokemon_id, "favourite removed");
        Ok(())
    }
}

#[async_trait]
impl<P, F, U> FavouritesQuery for FavouritesService<P, F, U>
where
    P: PokemonRepository,
    F: FavouriteRepository,
    U: UserRepository,
{
    async fn list_favourites(&self, user_id: UserId) -> Result<FavouritesListing, Error> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))?;

        let favourites = self
            .favourite_repo
            .list_for_user(user_id)
            .await
            .map_err(map_favourite_error)?;

        if favourites.is_empty() && self.empty_policy == EmptyFavouritesPolicy::NotFound {
            return Err(Error::not_found("no favourites found")
                .with_details(json!({ "code": NO_FAVOURITES_DETAIL })));
        }

        Ok(FavouritesListing { user, favourites })
    }

    async fn is_favourite(&self, user_id: UserId, pokemon_id: PokemonId) -> Result<bool, Error> {
        self.favourite_repo
            .exists(user_id, pokemon_id)
            .await
            .map_err(map_favourite_error)
    }
}
