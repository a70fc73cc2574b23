//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`, [`LoginService`]) are called by inbound
//! adapters and implemented by domain services.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod catalogue_seed_repository;
mod favourite_repository;
mod favourites_command;
mod favourites_query;
mod login_service;
mod pokemon_repository;
mod user_repository;

#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use catalogue_seed_repository::MockCatalogueSeedRepository;
pub use catalogue_seed_repository::{
    CatalogueSeed, CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedReport,
};
#[cfg(test)]
pub use favourite_repository::MockFavouriteRepository;
pub use favourite_repository::{FavouriteRepository, FavouriteRepositoryError};
#[cfg(test)]
pub use favourites_command::MockFavouritesCommand;
pub use favourites_command::FavouritesCommand;
#[cfg(test)]
pub use favourites_query::MockFavouritesQuery;
pub use favourites_query::FavouritesQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_PASSWORD, FIXTURE_USER_ID, FIXTURE_USERNAME, FixtureLoginService, LoginService,
};
#[cfg(test)]
pub use pokemon_repository::MockPokemonRepository;
pub use pokemon_repository::{PokemonRepository, PokemonRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserAccount, UserRepository, UserRepositoryError};
