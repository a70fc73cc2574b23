//! Driven port for user lookups.
//!
//! Users are only read here: favourites listings need the username and the
//! login adapter needs the stored password digest.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
    }
}

/// A user together with the credential digest used to authenticate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Public identity.
    pub user: User,
    /// Lower-case hex SHA-256 of the password.
    pub password_sha256: String,
}

/// Port for user retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch an account by username for credential checks.
    async fn find_account(&self, username: &str)
    -> Result<Option<UserAccount>, UserRepositoryError>;
}
