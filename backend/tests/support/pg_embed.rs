//! Embedded PostgreSQL bootstrap for the Diesel adapter suites.
//!
//! Every test gets its own temporary database cloned from `template0`, so it
//! starts empty and is dropped with the returned [`TemporaryDatabase`].
//! Schema setup goes through the backend's own embedded migrations.
//!
//! Set `SKIP_TEST_CLUSTER=1` where the cluster cannot start; tests then print
//! a skip marker instead of failing.

use std::time::Duration;

use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use pokedex_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use tokio::runtime::Runtime;
use uuid::Uuid;

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes".
fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when `SKIP_TEST_CLUSTER` is set, otherwise fail loudly.
pub(crate) fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// `postgresql_embedded` picks a random password per process; a reused data
/// directory keeps the first one, so later processes must present the same.
fn ensure_stable_password() {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the cluster bootstrap spawns any threads and the
        // shared handle serialises its own initialisation.
        unsafe {
            std::env::set_var("PG_PASSWORD", "pokedex_embedded_test");
        }
    }
}

fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    ensure_stable_password();
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt < SHARED_CLUSTER_RETRIES => {
                eprintln!("pg-embed: attempt {attempt} failed, retrying: {error:?}");
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
            Err(error) => return Err(format!("shared cluster: {error:?}")),
        }
    }
}

fn empty_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let name = format!("pokedex_test_{}", Uuid::new_v4().simple());
    cluster
        .temporary_database_from_template(name.as_str(), "template0")
        .map_err(|error| format!("create database {name}: {error:?}"))
}

/// A fresh database plus the runtime used to drive async adapters against it.
pub(crate) struct PgContext {
    pub(crate) runtime: Runtime,
    pub(crate) url: String,
    _database: TemporaryDatabase,
}

impl PgContext {
    /// An empty database with no schema.
    pub(crate) fn empty() -> Result<Self, String> {
        let runtime = Runtime::new().map_err(|error| error.to_string())?;
        let database = empty_database(shared_cluster()?)?;
        Ok(Self {
            runtime,
            url: database.url().to_owned(),
            _database: database,
        })
    }

    /// A database with every migration applied.
    pub(crate) fn migrated() -> Result<Self, String> {
        let context = Self::empty()?;
        context
            .runtime
            .block_on(run_pending_migrations(&context.url))
            .map_err(|error| error.to_string())?;
        Ok(context)
    }

    /// Pool over this database sized for `max_size` concurrent checkouts.
    pub(crate) fn pool(&self, max_size: u32) -> Result<DbPool, String> {
        let config = PoolConfig::new(self.url.as_str())
            .with_max_size(max_size)
            .with_min_idle(Some(1));
        self.runtime
            .block_on(DbPool::new(config))
            .map_err(|error| error.to_string())
    }
}
