//! HTTP access to the catalogue and favourites endpoints.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Largest page the server accepts for `GET /pokemon`.
pub const PAGE_LIMIT: u32 = 100;

/// `details.code` on the 404 a server returns for an empty favourites list
/// when it runs the not-found policy.
pub const NO_FAVOURITES_DETAIL: &str = "no_favourites";

/// `{id, name}` pair shared by catalogue pages and favourites listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogueEntry {
    /// National dex number.
    pub id: i32,
    /// Display name.
    pub name: String,
}

impl CatalogueEntry {
    /// Build an entry from its parts.
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Failures surfaced by [`FavouritesApi`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code from the body, when present.
        code: Option<String>,
        /// Finer-grained `details.code` from the body, when present.
        detail: Option<String>,
        /// Server-provided message, or the status reason.
        message: String,
    },
    /// The request could not be sent or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }

    /// Whether this is the server's "no favourites yet" not-found.
    #[must_use]
    pub fn is_empty_favourites(&self) -> bool {
        matches!(
            self,
            Self::Status { status: 404, detail: Some(detail), .. } if detail == NO_FAVOURITES_DETAIL
        )
    }
}

/// Backend operations the [`Store`](crate::Store) relies on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouritesApi: Send + Sync {
    /// Every catalogue entry in id order.
    async fn catalogue(&self) -> Result<Vec<CatalogueEntry>, ApiError>;

    /// Ids favourited by the signed-in user.
    async fn favourite_ids(&self) -> Result<Vec<i32>, ApiError>;

    /// Mark `id` as a favourite.
    async fn add_favourite(&self, id: i32) -> Result<(), ApiError>;

    /// Clear the favourite flag for `id`.
    async fn remove_favourite(&self, id: i32) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct CataloguePage {
    items: Vec<CatalogueEntry>,
    total: u64,
}

#[derive(Deserialize)]
struct FavouritesListing {
    favourites: Vec<CatalogueEntry>,
}

#[derive(Deserialize)]
struct ErrorDetails {
    code: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<ErrorDetails>,
}

/// Translate a non-success response body into [`ApiError::Status`].
fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
    let code = parsed.as_ref().and_then(|error| error.code.clone());
    let detail = parsed
        .as_ref()
        .and_then(|error| error.details.as_ref())
        .and_then(|details| details.code.clone());
    let message = parsed
        .and_then(|error| error.message)
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| status.as_str().to_owned());
    ApiError::Status {
        status: status.as_u16(),
        code,
        detail,
        message,
    }
}

/// [`FavouritesApi`] over `reqwest` with a cookie store holding the session.
#[derive(Debug, Clone)]
pub struct HttpFavouritesApi {
    client: Client,
    base_url: String,
}

impl HttpFavouritesApi {
    /// Create a client for the server at `base_url`, e.g.
    /// `http://localhost:8080`.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.base_url))
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await?;
        let error = status_error(status, &body);
        debug!(status = status.as_u16(), %error, "request rejected");
        Err(error)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::send(self.request(Method::GET, path)).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Sign in; the session cookie is kept for later calls.
    ///
    /// # Errors
    /// Returns [`ApiError::Status`] with status 401 for bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        Self::send(self.request(Method::POST, "/login").json(&body)).await?;
        Ok(())
    }
}

#[async_trait]
impl FavouritesApi for HttpFavouritesApi {
    async fn catalogue(&self) -> Result<Vec<CatalogueEntry>, ApiError> {
        let mut entries: Vec<CatalogueEntry> = Vec::new();
        loop {
            let path = format!("/pokemon?limit={PAGE_LIMIT}&offset={}", entries.len());
            let page: CataloguePage = self.get_data(&path).await?;
            let exhausted = page.items.is_empty();
            entries.extend(page.items);
            let complete = u64::try_from(entries.len()).is_ok_and(|count| count >= page.total);
            if exhausted || complete {
                return Ok(entries);
            }
        }
    }

    async fn favourite_ids(&self) -> Result<Vec<i32>, ApiError> {
        match self.get_data::<FavouritesListing>("/favourites").await {
            Ok(listing) => Ok(listing.favourites.into_iter().map(|entry| entry.id).collect()),
            Err(error) if error.is_empty_favourites() => Ok(Vec::new()),
            Err(error) => Err(error),
        }
    }

    async fn add_favourite(&self, id: i32) -> Result<(), ApiError> {
        let path = format!("/pokemon/{id}/favourite");
        Self::send(self.request(Method::POST, &path)).await?;
        Ok(())
    }

    async fn remove_favourite(&self, id: i32) -> Result<(), ApiError> {
        let path = format!("/pokemon/{id}/favourite");
        Self::send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
