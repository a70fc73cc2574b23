//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::domain::{
    AccountLoginService, CatalogueService, EmptyFavouritesPolicy, FavouritesService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the `session` cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// HTTP state backed by a freshly seeded in-memory store.
pub fn seeded_state(policy: EmptyFavouritesPolicy) -> HttpState {
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
