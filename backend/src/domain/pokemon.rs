//! Catalogue entries.
//!
//! Pokémon are pre-seeded reference records. Nothing in the favourites flow
//! mutates them; they are read for existence checks and listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors for catalogue primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonValidationError {
    /// National dex numbers start at 1.
    NonPositiveId,
    /// Identifier text was not an integer.
    InvalidId,
}

impl fmt::Display for PokemonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "pokemon id must be a positive integer"),
            Self::InvalidId => write!(f, "pokemon id must be an integer"),
        }
    }
}

impl std::error::Error for PokemonValidationError {}

/// National dex number identifying a catalogue entry.
///
/// # Examples
/// ```
/// use pokedex_backend::domain::PokemonId;
///
/// let pikachu: PokemonId = "25".parse().expect("valid id");
/// assert_eq!(pikachu.get(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PokemonId(i32);

impl PokemonId {
    /// Validate and construct a [`PokemonId`].
    pub fn new(id: i32) -> Result<Self, PokemonValidationError> {
        if id <= 0 {
            return Err(PokemonValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PokemonId {
    type Err = PokemonValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<i32>()
            .map_err(|_| PokemonValidationError::InvalidId)?;
        Self::new(id)
    }
}

impl From<PokemonId> for i32 {
    fn from(value: PokemonId) -> Self {
        value.0
    }
}

impl TryFrom<i32> for PokemonId {
    type Error = PokemonValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Full catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number.
    pub id: PokemonId,
    /// Display name, e.g. `Pikachu`.
    pub name: String,
    /// Primary elemental type, e.g. `electric`.
    pub primary_type: String,
    /// Optional secondary type.
    pub secondary_type: Option<String>,
    /// Artwork reference rendered by clients.
    pub image_url: Option<String>,
}

impl Pokemon {
    /// Project the entry to the `{id, name}` pair used by favourites listings.
    #[must_use]
    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Identifier plus name projection of a catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    /// National dex number.
    pub id: PokemonId,
    /// Display name.
    pub name: String,
}

/// Default number of entries per catalogue page.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
/// Largest page a client may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Validation errors for page requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequestError {
    /// `limit` was outside `1..=MAX_PAGE_LIMIT`.
    LimitOutOfRange {
        /// Rejected value.
        limit: u32,
    },
}

impl fmt::Display for PageRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimitOutOfRange { limit } => {
                write!(f, "limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}")
            }
        }
    }
}

impl std::error::Error for PageRequestError {}

/// Offset-based page request over the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    offset: u32,
}

impl PageRequest {
    /// Validate paging parameters, applying defaults for missing values.
    ///
    /// # Examples
    /// ```
    /// use pokedex_backend::domain::PageRequest;
    ///
    /// let page = PageRequest::new(None, Some(40)).expect("valid page");
    /// assert_eq!(page.limit(), 20);
    /// assert_eq!(page.offset(), 40);
    /// assert!(PageRequest::new(Some(0), None).is_err());
    /// ```
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Result<Self, PageRequestError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(PageRequestError::LimitOutOfRange { limit });
        }
        Ok(Self {
            limit,
            offset: offset.unwrap_or(0),
        })
    }

    /// Maximum number of entries to return.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Number of entries to skip.
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// A page of catalogue entries ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CataloguePage {
    /// Entries on this page.
    pub items: Vec<Pokemon>,
    /// Total number of entries in the catalogue.
    pub total: u64,
    /// Requested page bounds.
    pub page: PageRequest,
}
