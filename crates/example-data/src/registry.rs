//! Catalogue registry types and JSON parsing.
//!
//! The registry lists catalogue entries and demo accounts:
//!
//! ```json
//! {
//!   "version": 1,
//!   "imageUrlTemplate": "https://example.test/art/{id}.png",
//!   "pokemon": [{"id": 25, "name": "Pikachu", "primaryType": "electric"}],
//!   "users": [{"id": 7, "username": "ash", "passwordSha256": "…"}]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::{PokemonSeed, UserSeed};
use crate::validation::{is_sha256_hex, is_valid_username};

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// Placeholder replaced by the entry id in `imageUrlTemplate`.
const ID_PLACEHOLDER: &str = "{id}";

/// The registry bundled with this crate: the 151 first-generation entries
/// plus the `ash` and `misty` demo accounts.
pub const EMBEDDED_REGISTRY: &str = include_str!("../data/catalogue.json");

/// A validated catalogue registry, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueRegistry {
    version: u32,
    pokemon: Vec<PokemonSeed>,
    users: Vec<UserSeed>,
}

impl CatalogueRegistry {
    /// Parse the registry embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the bundled data fails validation.
    pub fn embedded() -> Result<Self, RegistryError> {
        Self::from_json(EMBEDDED_REGISTRY)
    }

    /// Parses a registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - The catalogue is empty or contains invalid or repeated ids
    /// - A user has an invalid username, id or password digest
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawRegistry = serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
            message: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    /// Loads a registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    fn from_raw(raw: RawRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }
        if raw.pokemon.is_empty() {
            return Err(RegistryError::EmptyCatalogue);
        }

        let template = raw.image_url_template.as_deref();
        let mut seen_ids = HashSet::new();
        let mut pokemon = raw
            .pokemon
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let seed = entry.into_seed(index, template)?;
                if !seen_ids.insert(seed.id) {
                    return Err(RegistryError::DuplicatePokemonId { id: seed.id });
                }
                Ok(seed)
            })
            .collect::<Result<Vec<_>, _>>()?;
        pokemon.sort_by_key(|seed| seed.id);

        let mut seen_user_ids = HashSet::new();
        let mut seen_usernames = HashSet::new();
        let users = raw
            .users
            .into_iter()
            .enumerate()
            .map(|(index, user)| {
                let seed = user.into_seed(index)?;
                if !seen_user_ids.insert(seed.id) || !seen_usernames.insert(seed.username.clone()) {
                    return Err(RegistryError::DuplicateUser {
                        value: seed.username,
                    });
                }
                Ok(seed)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: raw.version,
            pokemon,
            users,
        })
    }

    /// Registry format version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Catalogue entries ascending by id.
    #[must_use]
    pub fn pokemon(&self) -> &[PokemonSeed] {
        &self.pokemon
    }

    /// Demo accounts.
    #[must_use]
    pub fn users(&self) -> &[UserSeed] {
        &self.users
    }

    /// Look up a catalogue entry by id.
    #[must_use]
    pub fn find_pokemon(&self, id: i32) -> Option<&PokemonSeed> {
        self.pokemon
            .binary_search_by_key(&id, PokemonSeed::id)
            .ok()
            .and_then(|index| self.pokemon.get(index))
    }

    /// Look up a demo account by username.
    #[must_use]
    pub fn find_user(&self, username: &str) -> Option<&UserSeed> {
        self.users.iter().find(|user| user.username == username)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegistry {
    version: u32,
    #[serde(default)]
    image_url_template: Option<String>,
    pokemon: Vec<RawPokemon>,
    #[serde(default)]
    users: Vec<RawUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPokemon {
    id: i32,
    name: String,
    primary_type: String,
    #[serde(default)]
    secondary_type: Option<String>,
}

impl RawPokemon {
    fn into_seed(self, index: usize, template: Option<&str>) -> Result<PokemonSeed, RegistryError> {
        let id = self.id;
        if id <= 0 {
            return Err(RegistryError::NonPositivePokemonId { index, id });
        }
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(RegistryError::BlankPokemonField { id, field: "name" });
        }
        let primary_type = self.primary_type.trim().to_ascii_lowercase();
        if primary_type.is_empty() {
            return Err(RegistryError::BlankPokemonField {
                id,
                field: "primaryType",
            });
        }
        let secondary_type = self
            .secondary_type
            .map(|value| value.trim().to_ascii_lowercase())
            .filter(|value| !value.is_empty());

        Ok(PokemonSeed {
            id,
            name,
            primary_type,
            secondary_type,
            image_url: template.map(|t| t.replace(ID_PLACEHOLDER, &id.to_string())),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    id: i64,
    username: String,
    password_sha256: String,
}

impl RawUser {
    fn into_seed(self, index: usize) -> Result<UserSeed, RegistryError> {
        if self.id <= 0 {
            return Err(RegistryError::NonPositiveUserId { index, id: self.id });
        }
        if !is_valid_username(&self.username) {
            return Err(RegistryError::InvalidUsername {
                username: self.username,
            });
        }
        if !is_sha256_hex(&self.password_sha256) {
            return Err(RegistryError::InvalidPasswordDigest {
                username: self.username,
            });
        }
        Ok(UserSeed {
            id: self.id,
            username: self.username,
            password_sha256: self.password_sha256,
        })
    }
}
