//! Driven port for reading the catalogue.
//!
//! Catalogue entries are immutable reference data; this port is read-only.

use async_trait::async_trait;

use crate::domain::{PageRequest, Pokemon, PokemonId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by catalogue repository adapters.
    pub enum PokemonRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "pokemon repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "pokemon repository query failed: {message}",
    }
}

/// Port for catalogue lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Fetch one entry, or `None` when the id is not in the catalogue.
    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, PokemonRepositoryError>;

    /// Fetch a page of entries ordered by id, plus the catalogue size.
    async fn list(&self, page: PageRequest) -> Result<(Vec<Pokemon>, u64), PokemonRepositoryError>;
}
