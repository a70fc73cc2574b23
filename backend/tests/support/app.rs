//! Application wiring shared by the HTTP integration suites.

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite};
use pokedex_backend::domain::{
    AccountLoginService, CatalogueService, EmptyFavouritesPolicy, FavouritesService,
};
use pokedex_backend::inbound::http::state::HttpState;
use pokedex_backend::outbound::memory::InMemoryStore;

pub(crate) fn test_session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// State over a freshly seeded in-memory store and its demo accounts.
pub(crate) fn seeded_state(policy: EmptyFavouritesPolicy) -> HttpState {
    let store = InMemoryStore::seeded().expect("bundled registry seeds the store");
    let favourites = Arc::new(
        FavouritesService::new(store.pokemon(), store.favourites(), store.users())
            .with_empty_policy(policy),
    );
    HttpState::new(
        Arc::new(AccountLoginService::new(store.users())),
        Arc::new(CatalogueService::new(store.pokemon())),
        favourites.clone(),
        favourites,
    )
}
