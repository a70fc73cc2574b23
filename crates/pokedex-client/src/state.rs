//! Catalogue state and the reducer that advances it.
//!
//! [`reduce`] never performs I/O. The [`Store`](crate::Store) feeds it the
//! actions produced by user input and API responses.

use crate::api::CatalogueEntry;

/// Progress of the catalogue load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Initial,
    /// A load is in flight.
    Loading,
    /// Entries are available.
    Success,
    /// The last load failed; see [`PokedexState::message`].
    Failure,
}

/// One catalogue entry as rendered, with the caller's favourite flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// National dex number.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Whether the signed-in user favourited the entry.
    pub favourite: bool,
}

/// Snapshot consumed by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokedexState {
    /// Load progress.
    pub status: LoadStatus,
    /// Entries in catalogue order.
    pub entries: Vec<EntryView>,
    /// Last failure message, cleared by the next successful load.
    pub message: Option<String>,
}

impl PokedexState {
    /// State before any load.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            status: LoadStatus::Initial,
            entries: Vec::new(),
            message: None,
        }
    }

    /// Favourite flag for `id`, or `None` when the entry is not loaded.
    #[must_use]
    pub fn favourite(&self, id: i32) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.favourite)
    }

    fn entry_mut(&mut self, id: i32) -> Option<&mut EntryView> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}

/// Inputs to [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A catalogue load started.
    LoadRequested,
    /// Catalogue and favourites arrived.
    Loaded {
        /// Catalogue entries in display order.
        entries: Vec<CatalogueEntry>,
        /// Ids the signed-in user has favourited.
        favourite_ids: Vec<i32>,
    },
    /// The catalogue load failed.
    LoadFailed(String),
    /// The user toggled the favourite flag of an entry.
    ToggleRequested(i32),
    /// The server accepted a toggle.
    FavouriteConfirmed {
        /// Entry id.
        id: i32,
        /// Flag now stored server-side.
        favourite: bool,
    },
    /// The server rejected a toggle; the flag reverts to `previous`.
    ToggleFailed {
        /// Entry id.
        id: i32,
        /// Flag before the optimistic flip.
        previous: bool,
        /// Failure reported to the user.
        message: String,
    },
}

/// Compute the state that follows `action`.
///
/// Actions naming an id that is not loaded return `state` unchanged. A
/// confirmed toggle clears any earlier failure message, so `message` only
/// ever describes the most recent outcome.
#[must_use]
pub fn reduce(mut state: PokedexState, action: Action) -> PokedexState {
    match action {
        Action::LoadRequested => {
            state.status = LoadStatus::Loading;
            state.message = None;
        }
        Action::Loaded {
            entries,
            favourite_ids,
        } => {
            state.entries = entries
                .into_iter()
                .map(|entry| EntryView {
                    favourite: favourite_ids.contains(&entry.id),
                    id: entry.id,
                    name: entry.name,
                })
                .collect();
            state.status = LoadStatus::Success;
            state.message = None;
        }
        Action::LoadFailed(message) => {
            state.status = LoadStatus::Failure;
            state.message = Some(message);
        }
        Action::ToggleRequested(id) => {
            if let Some(entry) = state.entry_mut(id) {
                entry.favourite = !entry.favourite;
            }
        }
        Action::FavouriteConfirmed { id, favourite } => {
            if let Some(entry) = state.entry_mut(id) {
                entry.favourite = favourite;
                state.message = None;
            }
        }
        Action::ToggleFailed {
            id,
            previous,
            message,
        } => {
            if let Some(entry) = state.entry_mut(id) {
                entry.favourite = previous;
                state.message = Some(message);
            }
        }
    }
    state
}
