//! In-memory adapters used when no database is configured.
//!
//! The store is seeded from the bundled catalogue registry and keeps
//! favourites in a mutex-guarded ordered map. The map key is the
//! `(user_id, pokemon_id)` pair, so the uniqueness rule holds under
//! concurrent inserts: the first writer wins and later writers observe
//! [`FavouriteRepositoryError::Duplicate`].

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use example_data::{CatalogueRegistry, RegistryError};
use thiserror::Error;

use crate::domain::ports::{
    CatalogueSeed, FavouriteRepository, FavouriteRepositoryError, PokemonRepository,
    PokemonRepositoryError, UserAccount, UserRepository, UserRepositoryError,
};
use crate::domain::{
    CatalogueSeedError, Favourite, PageRequest, Pokemon, PokemonId, PokemonSummary, User, UserId,
    seed_from_registry,
};

/// Errors raised while building a seeded store.
#[derive(Debug, Error)]
pub enum InMemoryStoreError {
    /// Bundled registry failed to parse.
    #[error("bundled registry is invalid: {0}")]
    Registry(#[from] RegistryError),
    /// Registry entries failed domain validation.
    #[error(transparent)]
    Seed(#[from] CatalogueSeedError),
}

type Catalogue = BTreeMap<PokemonId, Pokemon>;
type Accounts = BTreeMap<UserId, UserAccount>;

/// Owner of the in-memory repositories.
///
/// Each accessor hands out a shared handle onto the same data, so services
/// built from one store observe each other's writes.
#[derive(Clone)]
pub struct InMemoryStore {
    pokemon: Arc<InMemoryPokemonRepository>,
    favourites: Arc<InMemoryFavouriteRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryStore {
    /// Build a store holding the bundled catalogue and demo accounts.
    ///
    /// # Errors
    ///
    /// Returns [`InMemoryStoreError`] if the bundled registry is invalid.
    pub fn seeded() -> Result<Self, InMemoryStoreError> {
        let registry = CatalogueRegistry::embedded()?;
        Ok(Self::from_seed(seed_from_registry(&registry)?))
    }

    /// Build a store holding exactly the records in `seed` and no favourites.
    #[must_use]
    pub fn from_seed(seed: CatalogueSeed) -> Self {
        let catalogue: Arc<Catalogue> = Arc::new(
            seed.pokemon
                .into_iter()
                .map(|pokemon| (pokemon.id, pokemon))
                .collect(),
        );
        let accounts: Arc<Accounts> = Arc::new(
            seed.accounts
                .into_iter()
                .map(|account| (account.user.id(), account))
                .collect(),
        );
        Self {
            pokemon: Arc::new(InMemoryPokemonRepository {
                catalogue: Arc::clone(&catalogue),
            }),
            favourites: Arc::new(InMemoryFavouriteRepository {
                catalogue,
                accounts: Arc::clone(&accounts),
                rows: Mutex::new(BTreeMap::new()),
            }),
            users: Arc::new(InMemoryUserRepository { accounts }),
        }
    }

    /// Catalogue repository handle.
    #[must_use]
    pub fn pokemon(&self) -> Arc<InMemoryPokemonRepository> {
        Arc::clone(&self.pokemon)
    }

    /// Favourite repository handle.
    #[must_use]
    pub fn favourites(&self) -> Arc<InMemoryFavouriteRepository> {
        Arc::clone(&self.favourites)
    }

    /// User repository handle.
    #[must_use]
    pub fn users(&self) -> Arc<InMemoryUserRepository> {
        Arc::clone(&self.users)
    }
}

/// Read-only catalogue backed by an ordered map.
pub struct InMemoryPokemonRepository {
    catalogue: Arc<Catalogue>,
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, PokemonRepositoryError> {
        Ok(self.catalogue.get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<(Vec<Pokemon>, u64), PokemonRepositoryError> {
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let items = self
            .catalogue
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        let total = u64::try_from(self.catalogue.len()).unwrap_or(u64::MAX);
        Ok((items, total))
    }
}

/// Favourite rows keyed by `(user_id, pokemon_id)`.
pub struct InMemoryFavouriteRepository {
    catalogue: Arc<Catalogue>,
    accounts: Arc<Accounts>,
    rows: Mutex<BTreeMap<(UserId, PokemonId), DateTime<Utc>>>,
}

impl InMemoryFavouriteRepository {
    fn lock_rows(
        &self,
    ) -> Result<MutexGuard<'_, BTreeMap<(UserId, PokemonId), DateTime<Utc>>>, FavouriteRepositoryError>
    {
        self.rows
            .lock()
            .map_err(|_| FavouriteRepositoryError::query("favourite store lock poisoned"))
    }

    /// Number of stored rows across all users.
    ///
    /// # Errors
    ///
    /// Returns [`FavouriteRepositoryError::Query`] if the store lock is
    /// poisoned.
    pub fn row_count(&self) -> Result<usize, FavouriteRepositoryError> {
        Ok(self.lock_rows()?.len())
    }
}

#[async_trait]
impl FavouriteRepository for InMemoryFavouriteRepository {
    async fn insert(&self, favourite: &Favourite) -> Result<(), FavouriteRepositoryError> {
        // Mirror the foreign keys of the relational schema.
        if !self.accounts.contains_key(&favourite.user_id) {
            return Err(FavouriteRepositoryError::query(format!(
                "user {} does not exist",
                favourite.user_id
            )));
        }
        if !self.catalogue.contains_key(&favourite.pokemon_id) {
            return Err(FavouriteRepositoryError::query(format!(
                "pokemon {} does not exist",
                favourite.pokemon_id
            )));
        }

        let mut rows = self.lock_rows()?;
        match rows.entry((favourite.user_id, favourite.pokemon_id)) {
            Entry::Occupied(_) => Err(FavouriteRepositoryError::duplicate(
                favourite.user_id.get(),
                favourite.pokemon_id.get(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(favourite.created_at);
                Ok(())
            }
        }
    }

    async fn delete(
        &self,
        user_id: UserId,
        pokemon_id: PokemonId,
    ) -> Result<bool, FavouriteRepositoryError> {
        Ok(self.lock_rows()?.remove(&(user_id, pokemon_id)).is_some())
    }

    async fn exists(
        &self,
        user_id: UserId,
        pokemon_id: PokemonId,
    ) -> Result<bool, FavouriteRepositoryError> {
        Ok(self.lock_rows()?.contains_key(&(user_id, pokemon_id)))
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PokemonSummary>, FavouriteRepositoryError> {
        let rows = self.lock_rows()?;
        Ok(rows
            .keys()
            .filter(|(owner, _)| *owner == user_id)
            .filter_map(|(_, pokemon_id)| self.catalogue.get(pokemon_id))
            .map(Pokemon::summary)
            .collect())
    }
}

/// Demo accounts loaded from the registry.
pub struct InMemoryUserRepository {
    accounts: Arc<Accounts>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.accounts.get(&id).map(|account| account.user.clone()))
    }

    async fn find_account(
        &self,
        username: &str,
    ) -> Result<Option<UserAccount>, UserRepositoryError> {
        Ok(self
            .accounts
            .values()
            .find(|account| account.user.username().as_ref() == username)
            .cloned())
    }
}
