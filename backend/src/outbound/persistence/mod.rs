//! PostgreSQL persistence adapters built on Diesel.
//!
//! Repositories implement the domain's driven ports over a `bb8` pool of
//! `diesel-async` connections. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module; only domain types
//! cross the boundary.
//!
//! # Example
//!
//! ```rust,no_run
//! use pokedex_backend::outbound::persistence::{DbPool, DieselFavouriteRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/pokedex")).await?;
//! let favourites = DieselFavouriteRepository::new(pool);
//! # let _ = favourites;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_catalogue_seed_repository;
mod diesel_favourite_repository;
mod diesel_pokemon_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_seed_repository::DieselCatalogueSeedRepository;
pub use diesel_favourite_repository::DieselFavouriteRepository;
pub use diesel_pokemon_repository::DieselPokemonRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
