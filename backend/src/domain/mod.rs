//! Domain primitives, services and ports.
//!
//! Types here are transport agnostic: HTTP and persistence adapters convert
//! to and from them at the edges.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: failure payload shared by every adapter.
//! - [`UserId`], [`PokemonId`]: validated identifiers.
//! - [`Pokemon`], [`Favourite`], [`User`]: typed records.
//! - [`FavouritesService`], [`CatalogueService`], [`AccountLoginService`]:
//!   driving port implementations.
//! - [`CatalogueSeeder`]: converts bundled reference data for persistence.

pub mod account_login_service;
pub mod auth;
pub mod catalogue_seed;
pub mod catalogue_service;
pub mod error;
pub mod favourite;
pub mod favourites_service;
pub mod pokemon;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account_login_service::{AccountLoginService, password_sha256};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::catalogue_seed::{CatalogueSeedError, CatalogueSeeder, seed_from_registry};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode};
pub use self::favourite::{EmptyFavouritesPolicy, Favourite, FavouritesListing};
pub use self::favourites_service::{FavouritesService, NO_FAVOURITES_DETAIL};
pub use self::pokemon::{
    CataloguePage, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, PageRequest, PageRequestError, Pokemon,
    PokemonId, PokemonSummary, PokemonValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, User, UserId, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use pokedex_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("login required"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
