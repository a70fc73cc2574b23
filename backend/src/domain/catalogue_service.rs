//! Catalogue browsing service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CatalogueQuery, PokemonRepository, PokemonRepositoryError};
use crate::domain::{CataloguePage, Error, PageRequest, Pokemon, PokemonId};

/// Read-only service implementing [`CatalogueQuery`].
#[derive(Clone)]
pub struct CatalogueService<P> {
    pokemon_repo: Arc<P>,
}

impl<P> CatalogueService<P> {
    /// Create a service over the given repository.
    pub fn new(pokemon_repo: Arc<P>) -> Self {
        Self { pokemon_repo }
    }
}

fn map_repository_error(error: PokemonRepositoryError) -> Error {
    match error {
        PokemonRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("pokemon repository unavailable: {message}"))
        }
        PokemonRepositoryError::Query { message } => {
            Error::internal(format!("pokemon repository error: {message}"))
        }
    }
}

#[async_trait]
impl<P> CatalogueQuery for CatalogueService<P>
where
    P: PokemonRepository,
{
    async fn list_pokemon(&self, page: PageRequest) -> Result<CataloguePage, Error> {
        let (items, total) = self
            .pokemon_repo
            .list(page)
            .await
            .map_err(map_repository_error)?;
        Ok(CataloguePage { items, total, page })
    }

    async fn get_pokemon(&self, id: PokemonId) -> Result<Pokemon, Error> {
        self.pokemon_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("pokemon {id} not found")))
    }
}
