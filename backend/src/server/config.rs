//! HTTP server configuration object and session key loading.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use actix_web::cookie::{Key, SameSite};
use pokedex_backend::domain::EmptyFavouritesPolicy;
use pokedex_backend::outbound::persistence::DbPool;
use tracing::warn;
use zeroize::Zeroize;

/// Minimum key material accepted by [`Key::try_from`].
const SESSION_KEY_MIN_LEN: usize = 64;

/// Errors raised while loading the session key.
#[derive(Debug, thiserror::Error)]
pub enum SessionKeyError {
    /// The key file could not be read and ephemeral keys are not allowed.
    #[error("failed to read session key at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file holds too little material.
    #[error("session key at {path} too short: need >= {SESSION_KEY_MIN_LEN} bytes, got {length}")]
    TooShort { path: PathBuf, length: usize },
}

/// Read the signing key from `path`.
///
/// A missing file yields a throwaway key in debug builds or when
/// `allow_ephemeral` is set; sessions then do not survive a restart.
pub fn load_session_key(path: &Path, allow_ephemeral: bool) -> Result<Key, SessionKeyError> {
    match std::fs::read(path) {
        Ok(mut bytes) => {
            let key = Key::try_from(bytes.as_slice()).map_err(|_| SessionKeyError::TooShort {
                path: path.to_path_buf(),
                length: bytes.len(),
            });
            bytes.zeroize();
            key
        }
        Err(source) if cfg!(debug_assertions) || allow_ephemeral => {
            warn!(
                path = %path.display(),
                error = %source,
                "using temporary session key (dev only)"
            );
            Ok(Key::generate())
        }
        Err(source) => Err(SessionKeyError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) empty_policy: EmptyFavouritesPolicy,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration without a database.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            empty_policy: EmptyFavouritesPolicy::default(),
            db_pool: None,
        }
    }

    /// Attach a database pool; Diesel adapters replace the in-memory ones.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Select how an empty favourites list is reported.
    #[must_use]
    pub fn with_empty_policy(mut self, policy: EmptyFavouritesPolicy) -> Self {
        self.empty_policy = policy;
        self
    }
}
