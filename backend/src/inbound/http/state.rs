//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CatalogueQuery, FavouritesCommand, FavouritesQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check for `POST /login`.
    pub login: Arc<dyn LoginService>,
    /// Catalogue browsing.
    pub catalogue: Arc<dyn CatalogueQuery>,
    /// Favourite mutations.
    pub favourites: Arc<dyn FavouritesCommand>,
    /// Favourite reads.
    pub favourites_query: Arc<dyn FavouritesQuery>,
}

impl HttpState {
    /// Bundle the port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use pokedex_backend::domain::ports::FixtureLoginService;
    /// use pokedex_backend::domain::{CatalogueService, FavouritesService};
    /// use pokedex_backend::inbound::http::state::HttpState;
    /// use pokedex_backend::outbound::memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::seeded().expect("bundled registry");
    /// let favourites = Arc::new(FavouritesService::new(
    ///     store.pokemon(),
    ///     store.favourites(),
    ///     store.users(),
    /// ));
    /// let state = HttpState::new(
    ///     Arc::new(FixtureLoginService),
    ///     Arc::new(CatalogueService::new(store.pokemon())),
    ///     favourites.clone(),
    ///     favourites,
    /// );
    /// let _login = state.login.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        catalogue: Arc<dyn CatalogueQuery>,
        favourites: Arc<dyn FavouritesCommand>,
        favourites_query: Arc<dyn FavouritesQuery>,
    ) -> Self {
        Self {
            login,
            catalogue,
            favourites,
            favourites_query,
        }
    }
}
