//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every handler annotated with `#[utoipa::path]` plus the
//! wire DTOs, and adds the session cookie security scheme. Swagger UI serves
//! it in debug builds; `cargo run --bin openapi-dump` prints it for tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::favourites::{
    FavouriteEntryResponse, FavouriteResponse, FavouritesResponse, UserResponse,
};
use crate::inbound::http::pokemon::{PokemonPageResponse, PokemonResponse};
use crate::inbound::http::users::{LoginRequest, LoginResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Pokédex favourites API",
        description = "Catalogue browsing and per-user favourites behind a cookie session."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::pokemon::list_pokemon,
        crate::inbound::http::pokemon::get_pokemon,
        crate::inbound::http::favourites::add_favourite,
        crate::inbound::http::favourites::remove_favourite,
        crate::inbound::http::favourites::list_favourites,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorBody,
        LoginRequest,
        LoginResponse,
        PokemonResponse,
        PokemonPageResponse,
        FavouriteResponse,
        FavouriteEntryResponse,
        FavouritesResponse,
        UserResponse,
    )),
    tags(
        (name = "users", description = "Session login"),
        (name = "pokemon", description = "Catalogue browsing"),
        (name = "favourites", description = "Per-user favourites"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
