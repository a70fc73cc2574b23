//! Driven port for loading reference data into the store.
//!
//! Seeding is idempotent: rows that already exist are left untouched and
//! reported as skipped rather than failing the run.

use async_trait::async_trait;

use crate::domain::Pokemon;

use super::{UserAccount, define_port_error};

define_port_error! {
    /// Errors raised by seeding adapters.
    pub enum CatalogueSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "seed repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "seed repository query failed: {message}",
    }
}

/// Validated reference data ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogueSeed {
    /// Catalogue entries, ascending by id.
    pub pokemon: Vec<Pokemon>,
    /// Demo accounts with their password digests.
    pub accounts: Vec<UserAccount>,
}

/// Rows written by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    /// Catalogue rows inserted by this run.
    pub pokemon_inserted: usize,
    /// User rows inserted by this run.
    pub users_inserted: usize,
}

impl SeedReport {
    /// Whether the store already held every seeded row.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.pokemon_inserted == 0 && self.users_inserted == 0
    }
}

/// Port for persisting reference data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueSeedRepository: Send + Sync {
    /// Insert missing rows from `seed`, leaving existing rows unchanged.
    async fn seed(&self, seed: &CatalogueSeed) -> Result<SeedReport, CatalogueSeedRepositoryError>;
}
