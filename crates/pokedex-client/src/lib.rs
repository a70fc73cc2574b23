//! Client-side state for browsing the catalogue and toggling favourites.
//!
//! The crate separates three concerns:
//!
//! - [`state`] holds the immutable [`PokedexState`] and the pure [`reduce`]
//!   function mapping an [`Action`] to the next state.
//! - [`api`] defines the [`FavouritesApi`] seam and its HTTP implementation,
//!   [`HttpFavouritesApi`].
//! - [`store`] owns the state, runs API calls and notifies subscribers after
//!   every emission.
//!
//! # Example
//!
//! ```
//! use pokedex_client::{Action, CatalogueEntry, LoadStatus, PokedexState, reduce};
//!
//! let loaded = reduce(
//!     PokedexState::initial(),
//!     Action::Loaded {
//!         entries: vec![CatalogueEntry::new(25, "Pikachu")],
//!         favourite_ids: vec![],
//!     },
//! );
//! let toggled = reduce(loaded, Action::ToggleRequested(25));
//!
//! assert_eq!(toggled.status, LoadStatus::Success);
//! assert_eq!(toggled.favourite(25), Some(true));
//! ```

pub mod api;
pub mod state;
pub mod store;

pub use api::{ApiError, CatalogueEntry, FavouritesApi, HttpFavouritesApi};
pub use state::{Action, EntryView, LoadStatus, PokedexState, reduce};
pub use store::Store;
