//! `LoginService` over any [`UserRepository`].
//!
//! Looks the account up by username and compares the lower-case hex SHA-256
//! digest of the supplied password with the stored digest. Unknown users and
//! wrong passwords produce the same `401` so callers cannot probe for
//! usernames.
//!
//! Digests are unsalted, matching the demo accounts shipped in the bundled
//! registry; they identify demo credentials and are not a password store.
//! The comparison is constant time so response latency does not reveal how
//! many leading digest bytes matched.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::domain::ports::{LoginService, UserRepository, UserRepositoryError};
use crate::domain::{Error, LoginCredentials, UserId};

/// Lower-case hex SHA-256 digest of `password`.
///
/// # Examples
/// ```
/// use pokedex_backend::domain::password_sha256;
///
/// assert_eq!(
///     password_sha256("pikachu"),
///     "43999461d22f67840fcd9b8824293eaa4f18146e57b2c651bcd925e3b3e4e429"
/// );
/// ```
#[must_use]
pub fn password_sha256(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

fn digest_matches(stored: &str, password: &str) -> bool {
    let supplied = password_sha256(password);
    stored.as_bytes().ct_eq(supplied.as_bytes()).into()
}

/// Authenticates against accounts held by a user repository.
#[derive(Clone)]
pub struct AccountLoginService<U> {
    user_repo: Arc<U>,
}

impl<U> AccountLoginService<U> {
    /// Create a service reading accounts from `user_repo`.
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<U> LoginService for AccountLoginService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let account = self
            .user_repo
            .find_account(credentials.username())
            .await
            .map_err(map_user_repository_error)?;

        match account {
            Some(account) if digest_matches(&account.password_sha256, credentials.password()) => {
                Ok(account.user.id())
            }
            Some(_) => {
                debug!(username = credentials.username(), "password mismatch");
                Err(Error::unauthorized("invalid credentials"))
            }
            None => {
                debug!(username = credentials.username(), "unknown username");
                Err(Error::unauthorized("invalid credentials"))
            }
        }
    }
}
