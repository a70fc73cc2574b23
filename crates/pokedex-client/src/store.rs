//! State container driving [`reduce`] from API calls.

use tracing::{debug, warn};

use crate::api::FavouritesApi;
use crate::state::{Action, PokedexState, reduce};

type Subscriber = Box<dyn FnMut(&PokedexState) + Send>;

/// Owns the current [`PokedexState`] and the API used to refresh it.
///
/// Actions are applied one at a time through `&mut self`. Subscribers run
/// synchronously after each emitted state.
pub struct Store<A> {
    api: A,
    state: PokedexState,
    subscribers: Vec<Subscriber>,
}

impl<A> Store<A> {
    /// Wrap `api` with an initial state and no subscribers.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self {
            api,
            state: PokedexState::initial(),
            subscribers: Vec::new(),
        }
    }

    /// The latest state.
    #[must_use]
    pub const fn state(&self) -> &PokedexState {
        &self.state
    }

    /// The API this store calls.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Register `listener` to receive every subsequent state.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&PokedexState) + Send + 'static,
    {
        self.subscribers.push(Box::new(listener));
    }

    /// Reduce `action` into the current state and notify subscribers.
    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl<A: FavouritesApi> Store<A> {
    /// Fetch the catalogue and the user's favourites.
    ///
    /// Emits `Loading`, then either `Success` or `Failure` with the error
    /// message.
    pub async fn load(&mut self) {
        self.dispatch(Action::LoadRequested);
        let fetched = match self.api.catalogue().await {
            Ok(entries) => self
                .api
                .favourite_ids()
                .await
                .map(|favourite_ids| (entries, favourite_ids)),
            Err(error) => Err(error),
        };
        match fetched {
            Ok((entries, favourite_ids)) => {
                debug!(
                    entries = entries.len(),
                    favourites = favourite_ids.len(),
                    "catalogue loaded"
                );
                self.dispatch(Action::Loaded {
                    entries,
                    favourite_ids,
                });
            }
            Err(error) => {
                warn!(%error, "catalogue load failed");
                self.dispatch(Action::LoadFailed(error.to_string()));
            }
        }
    }

    /// Flip the favourite flag for `id`, optimistically, then confirm or
    /// roll back once the server answers.
    ///
    /// Ids that are not loaded are ignored without calling the API.
    pub async fn toggle_favourite(&mut self, id: i32) {
        let Some(previous) = self.state.favourite(id) else {
            debug!(id, "toggle ignored for unloaded entry");
            return;
        };
        self.dispatch(Action::ToggleRequested(id));

        let result = if previous {
            self.api.remove_favourite(id).await
        } else {
            self.api.add_favourite(id).await
        };
        match result {
            Ok(()) => self.dispatch(Action::FavouriteConfirmed {
                id,
                favourite: !previous,
            }),
            Err(error) => {
                warn!(id, %error, "favourite toggle rejected");
                self.dispatch(Action::ToggleFailed {
                    id,
                    previous,
                    message: error.to_string(),
                });
            }
        }
    }
}
