//! Error types for the example-data crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a catalogue registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no catalogue entries.
    #[error("registry contains no pokemon")]
    EmptyCatalogue,

    /// A catalogue id is zero or negative.
    #[error("pokemon at index {index} has non-positive id {id}")]
    NonPositivePokemonId {
        /// Index of the entry in the array.
        index: usize,
        /// The rejected id.
        id: i32,
    },

    /// Two catalogue entries share an id.
    #[error("pokemon id {id} appears more than once")]
    DuplicatePokemonId {
        /// The repeated id.
        id: i32,
    },

    /// A catalogue entry has a blank name or type.
    #[error("pokemon {id} has an empty {field}")]
    BlankPokemonField {
        /// Entry id.
        id: i32,
        /// Offending field name.
        field: &'static str,
    },

    /// A user id is zero or negative.
    #[error("user at index {index} has non-positive id {id}")]
    NonPositiveUserId {
        /// Index of the user in the array.
        index: usize,
        /// The rejected id.
        id: i64,
    },

    /// Two users share an id or username.
    #[error("user {value} appears more than once")]
    DuplicateUser {
        /// The repeated id or username.
        value: String,
    },

    /// A username does not satisfy the backend's username rules.
    #[error("invalid username '{username}'")]
    InvalidUsername {
        /// The rejected username.
        username: String,
    },

    /// A password digest is not 64 lower-case hex characters.
    #[error("user {username} has a malformed password digest")]
    InvalidPasswordDigest {
        /// Owner of the digest.
        username: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_pokemon_formats_correctly() {
        let err = RegistryError::DuplicatePokemonId { id: 25 };
        assert_eq!(err.to_string(), "pokemon id 25 appears more than once");
    }

    #[test]
    fn blank_field_names_the_field() {
        let err = RegistryError::BlankPokemonField {
            id: 4,
            field: "name",
        };
        assert_eq!(err.to_string(), "pokemon 4 has an empty name");
    }

    #[test]
    fn version_formats_correctly() {
        let err = RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported registry version: expected 1, found 2"
        );
    }
}
