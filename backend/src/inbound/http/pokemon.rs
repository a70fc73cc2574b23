//! Catalogue HTTP handlers.
//!
//! ```text
//! GET /pokemon?limit=20&offset=0
//! GET /pokemon/{pokemon_id}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CataloguePage, Pokemon};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, success};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_page, parse_pokemon_id};

/// Paging parameters for `GET /pokemon`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page size, `1..=100`; defaults to 20.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// Entries to skip; defaults to 0.
    #[param(value_type = Option<u32>)]
    pub offset: Option<String>,
}

/// Catalogue entry as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PokemonResponse {
    /// National dex number.
    #[schema(example = 25)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Pikachu")]
    pub name: String,
    /// Primary type.
    #[schema(example = "electric")]
    pub primary_type: String,
    /// Secondary type, when the entry has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_type: Option<String>,
    /// Artwork URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the signed-in user favourited this entry. Absent when signed
    /// out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourite: Option<bool>,
}

impl From<Pokemon> for PokemonResponse {
    fn from(value: Pokemon) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            primary_type: value.primary_type,
            secondary_type: value.secondary_type,
            image_url: value.image_url,
            favourite: None,
        }
    }
}

/// One page of the catalogue.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PokemonPageResponse {
    /// Entries ordered by id.
    pub items: Vec<PokemonResponse>,
    /// Catalogue size.
    pub total: u64,
    /// Applied page size.
    pub limit: u32,
    /// Applied offset.
    pub offset: u32,
}

impl From<CataloguePage> for PokemonPageResponse {
    fn from(value: CataloguePage) -> Self {
        Self {
            items: value.items.into_iter().map(PokemonResponse::from).collect(),
            total: value.total,
            limit: value.page.limit(),
            offset: value.page.offset(),
        }
    }
}

/// List catalogue entries ordered by national dex number.
#[utoipa::path(
    get,
    path = "/pokemon",
    params(PageQuery),
    responses(
        (status = 200, description = "Catalogue page", body = Envelope<PokemonPageResponse>),
        (status = 400, description = "Invalid paging parameters", body = ErrorBody),
        (status = 503, description = "Catalogue unavailable", body = ErrorBody)
    ),
    tags = ["pokemon"],
    operation_id = "listPokemon",
    security([])
)]
#[get("/pokemon")]
pub async fn list_pokemon(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let page = parse_page(query.limit.as_deref(), query.offset.as_deref())?;
    let result = state.catalogue.list_pokemon(page).await?;
    Ok(HttpResponse::Ok().json(success(PokemonPageResponse::from(result))))
}

/// Fetch one catalogue entry, flagged with the caller's favourite status when
/// signed in.
#[utoipa::path(
    get,
    path = "/pokemon/{pokemon_id}",
    params(("pokemon_id" = i32, Path, description = "National dex number")),
    responses(
        (status = 200, description = "Catalogue entry", body = Envelope<PokemonResponse>),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such pokemon", body = ErrorBody)
    ),
    tags = ["pokemon"],
    operation_id = "getPokemon",
    security((), ("SessionCookie" = []))
)]
#[get("/pokemon/{pokemon_id}")]
pub async fn get_pokemon(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let pokemon_id = parse_pokemon_id(&path.into_inner())?;
    let pokemon = state.catalogue.get_pokemon(pokemon_id).await?;
    let mut body = PokemonResponse::from(pokemon);
    if let Some(user_id) = session.user_id()? {
        body.favourite = Some(
            state
                .favourites_query
                .is_favourite(user_id, pokemon_id)
                .await?,
        );
    }
    Ok(HttpResponse::Ok().json(success(body)))
}
