//! Builders for the HTTP state from database or in-memory adapters.

use std::sync::Arc;

use pokedex_backend::domain::ports::{
    CatalogueQuery, FavouriteRepository, FavouritesCommand, FavouritesQuery, PokemonRepository,
    UserRepository,
};
use pokedex_backend::domain::{
    AccountLoginService, CatalogueService, EmptyFavouritesPolicy, FavouritesService,
};
use pokedex_backend::inbound::http::state::HttpState;
use pokedex_backend::outbound::memory::{InMemoryStore, InMemoryStoreError};
use pokedex_backend::outbound::persistence::{
    DbPool, DieselFavouriteRepository, DieselPokemonRepository, DieselUserRepository,
};
use tracing::info;

use super::ServerConfig;

/// Wire login, catalogue and favourites services over one set of
/// repositories.
fn build_state<P, F, U>(
    pokemon: Arc<P>,
    favourites: Arc<F>,
    users: Arc<U>,
    policy: EmptyFavouritesPolicy,
) -> HttpState
where
    P: PokemonRepository + 'static,
    F: FavouriteRepository + 'static,
    U: UserRepository + 'static,
{
    let login = Arc::new(AccountLoginService::new(Arc::clone(&users)));
    let catalogue: Arc<dyn CatalogueQuery> =
        Arc::new(CatalogueService::new(Arc::clone(&pokemon)));
    let service =
        Arc::new(FavouritesService::new(pokemon, favourites, users).with_empty_policy(policy));
    let command: Arc<dyn FavouritesCommand> = service.clone();
    let query: Arc<dyn FavouritesQuery> = service;
    HttpState::new(login, catalogue, command, query)
}

fn build_diesel_state(pool: &DbPool, policy: EmptyFavouritesPolicy) -> HttpState {
    build_state(
        Arc::new(DieselPokemonRepository::new(pool.clone())),
        Arc::new(DieselFavouriteRepository::new(pool.clone())),
        Arc::new(DieselUserRepository::new(pool.clone())),
        policy,
    )
}

fn build_memory_state(policy: EmptyFavouritesPolicy) -> Result<HttpState, InMemoryStoreError> {
    let store = InMemoryStore::seeded()?;
    Ok(build_state(
        store.pokemon(),
        store.favourites(),
        store.users(),
        policy,
    ))
}

/// Build HTTP state using Diesel adapters when a pool is configured and the
/// seeded in-memory store otherwise.
///
/// # Errors
///
/// Returns [`std::io::Error`] if the bundled registry cannot seed the
/// in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "building HTTP state");
            Ok(build_diesel_state(pool, config.empty_policy))
        }
        None => {
            info!(storage = "memory", "building HTTP state");
            build_memory_state(config.empty_policy)
                .map_err(|err| std::io::Error::other(format!("in-memory store: {err}")))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the in-memory wiring path.
    use super::*;
    use pokedex_backend::domain::{LoginCredentials, PageRequest, UserId};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn memory_state_serves_catalogue_and_seeded_login() {
        let state =
            build_memory_state(EmptyFavouritesPolicy::EmptyList).expect("memory state builds");

        let page = state
            .catalogue
            .list_pokemon(PageRequest::default())
            .await
            .expect("catalogue lists");
        assert_eq!(page.total, 151);

        let creds = LoginCredentials::try_from_parts("ash", "pikachu").expect("credentials");
        let user = state.login.authenticate(&creds).await.expect("seeded login");
        assert_eq!(user, UserId::new(7).expect("valid id"));

        let listing = state
            .favourites_query
            .list_favourites(user)
            .await
            .expect("empty list allowed");
        assert!(listing.favourites.is_empty());
    }

    #[rstest]
    #[case("ash", "pikachu", 7)]
    #[case("misty", "starmie", 8)]
    #[tokio::test]
    async fn memory_state_accepts_every_seeded_account(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: i64,
    ) {
        let state =
            build_memory_state(EmptyFavouritesPolicy::EmptyList).expect("memory state builds");
        let creds = LoginCredentials::try_from_parts(username, password).expect("credentials");

        let user = state.login.authenticate(&creds).await.expect("seeded login");

        assert_eq!(user, UserId::new(expected).expect("valid id"));
    }

    #[rstest]
    #[tokio::test]
    async fn memory_state_rejects_a_wrong_password() {
        let state =
            build_memory_state(EmptyFavouritesPolicy::EmptyList).expect("memory state builds");
        let creds = LoginCredentials::try_from_parts("misty", "pikachu").expect("credentials");

        let err = state.login.authenticate(&creds).await.expect_err("rejected");

        assert_eq!(err.code(), pokedex_backend::domain::ErrorCode::Unauthorized);
    }
}
