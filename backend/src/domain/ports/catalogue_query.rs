//! Driving port for browsing the catalogue.

use async_trait::async_trait;

use crate::domain::{CataloguePage, Error, PageRequest, Pokemon, PokemonId};

/// Domain use-case port for catalogue reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Fetch one page of the catalogue ordered by id.
    async fn list_pokemon(&self, page: PageRequest) -> Result<CataloguePage, Error>;

    /// Fetch a single entry.
    ///
    /// # Errors
    ///
    /// [`crate::domain::ErrorCode::NotFound`] when the id is not catalogued.
    async fn get_pokemon(&self, id: PokemonId) -> Result<Pokemon, Error>;
}
