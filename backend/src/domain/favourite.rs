//! Favourite join records.
//!
//! A favourite links one user to one catalogue entry. At most one exists per
//! `(user_id, pokemon_id)` pair; records are created and deleted, never
//! updated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PokemonId, PokemonSummary, User, UserId};

/// A stored favourite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourite {
    /// Owning user.
    pub user_id: UserId,
    /// Favourited catalogue entry.
    pub pokemon_id: PokemonId,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

impl Favourite {
    /// Build a favourite stamped with the current time.
    #[must_use]
    pub fn new(user_id: UserId, pokemon_id: PokemonId) -> Self {
        Self {
            user_id,
            pokemon_id,
            created_at: Utc::now(),
        }
    }
}

/// The acting user together with the entries they have favourited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavouritesListing {
    /// The user whose favourites are listed.
    pub user: User,
    /// Favourited entries, ascending by id.
    pub favourites: Vec<PokemonSummary>,
}

/// How listing a user with no favourites is reported.
///
/// Older clients treat `404` as "no favourites yet" and can opt back into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyFavouritesPolicy {
    /// An empty list is a successful result.
    #[default]
    EmptyList,
    /// An empty list fails with [`super::ErrorCode::NotFound`].
    NotFound,
}

impl EmptyFavouritesPolicy {
    /// Select the policy from the compatibility flag.
    #[must_use]
    pub const fn from_flag(empty_is_not_found: bool) -> Self {
        if empty_is_not_found {
            Self::NotFound
        } else {
            Self::EmptyList
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, EmptyFavouritesPolicy::EmptyList)]
    #[case(true, EmptyFavouritesPolicy::NotFound)]
    fn policy_follows_flag(#[case] flag: bool, #[case] expected: EmptyFavouritesPolicy) {
        assert_eq!(EmptyFavouritesPolicy::from_flag(flag), expected);
    }

    #[rstest]
    fn default_policy_returns_empty_list() {
        assert_eq!(
            EmptyFavouritesPolicy::default(),
            EmptyFavouritesPolicy::EmptyList
        );
    }
}
