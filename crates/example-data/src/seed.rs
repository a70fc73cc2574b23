//! Seed records produced by the registry.

/// A catalogue entry ready to be written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonSeed {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) primary_type: String,
    pub(crate) secondary_type: Option<String>,
    pub(crate) image_url: Option<String>,
}

impl PokemonSeed {
    /// National dex number.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary elemental type.
    #[must_use]
    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    /// Secondary elemental type, when present.
    #[must_use]
    pub fn secondary_type(&self) -> Option<&str> {
        self.secondary_type.as_deref()
    }

    /// Artwork URL rendered from the registry template.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// A demo account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeed {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) password_sha256: String,
}

impl UserSeed {
    /// User id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Login handle.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Lower-case hex SHA-256 digest of the account password.
    #[must_use]
    pub fn password_sha256(&self) -> &str {
        &self.password_sha256
    }
}
