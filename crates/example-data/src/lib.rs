//! Deterministic catalogue and demo account seed data.
//!
//! This crate ships the first-generation catalogue and a pair of demo
//! accounts as an embedded JSON registry. It is independent of backend domain
//! types so that the backend, tests and tooling can all share it.
//!
//! # Example
//!
//! ```
//! use example_data::CatalogueRegistry;
//!
//! let registry = CatalogueRegistry::embedded().expect("embedded registry is valid");
//! let pikachu = registry.find_pokemon(25).expect("pikachu is catalogued");
//!
//! assert_eq!(pikachu.name(), "Pikachu");
//! assert_eq!(registry.pokemon().len(), 151);
//! ```

mod error;
mod registry;
mod seed;
mod validation;

pub use error::RegistryError;
pub use registry::{CatalogueRegistry, EMBEDDED_REGISTRY};
pub use seed::{PokemonSeed, UserSeed};
pub use validation::{USERNAME_MAX, is_valid_username};
