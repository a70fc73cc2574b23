//! Favourites HTTP handlers.
//!
//! ```text
//! POST   /pokemon/{pokemon_id}/favourite
//! DELETE /pokemon/{pokemon_id}/favourite
//! GET    /favourites
//! ```
//!
//! Every route requires a signed-in session.

use actix_web::{HttpResponse, delete, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Favourite, FavouritesListing, PokemonSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, success};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_pokemon_id;

/// Stored favourite returned by `POST /pokemon/{pokemon_id}/favourite`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavouriteResponse {
    /// Owning user.
    #[schema(example = 7)]
    pub user_id: i64,
    /// Favourited entry.
    #[schema(example = 25)]
    pub pokemon_id: i32,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
}

impl From<Favourite> for FavouriteResponse {
    fn from(value: Favourite) -> Self {
        Self {
            user_id: value.user_id.get(),
            pokemon_id: value.pokemon_id.get(),
            created_at: value.created_at,
        }
    }
}

/// Public user identity embedded in favourites listings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// User id.
    #[schema(example = 7)]
    pub id: i64,
    /// Login handle.
    #[schema(example = "ash")]
    pub username: String,
}

/// `{id, name}` projection of a favourited entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavouriteEntryResponse {
    /// National dex number.
    #[schema(example = 25)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Pikachu")]
    pub name: String,
}

impl From<PokemonSummary> for FavouriteEntryResponse {
    fn from(value: PokemonSummary) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
        }
    }
}

/// Body of `GET /favourites`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavouritesResponse {
    /// The signed-in user.
    pub user: UserResponse,
    /// Favourited entries ascending by id.
    pub favourites: Vec<FavouriteEntryResponse>,
}

impl From<FavouritesListing> for FavouritesResponse {
    fn from(value: FavouritesListing) -> Self {
        Self {
            user: UserResponse {
                id: value.user.id().get(),
                username: value.user.username().to_string(),
            },
            favourites: value
                .favourites
                .into_iter()
                .map(FavouriteEntryResponse::from)
                .collect(),
        }
    }
}

/// Favourite a catalogue entry for the signed-in user.
#[utoipa::path(
    post,
    path = "/pokemon/{pokemon_id}/favourite",
    params(("pokemon_id" = i32, Path, description = "National dex number")),
    responses(
        (status = 201, description = "Favourite stored", body = Envelope<FavouriteResponse>),
        (status = 400, description = "Already favourited or malformed id", body = ErrorBody),
        (status = 401, description = "Login required", body = ErrorBody),
        (status = 404, description = "No such pokemon", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["favourites"],
    operation_id = "addFavourite"
)]
#[post("/pokemon/{pokemon_id}/favourite")]
pub async fn add_favourite(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let pokemon_id = parse_pokemon_id(&path.into_inner())?;
    let favourite = state.favourites.add_favourite(user_id, pokemon_id).await?;
    Ok(HttpResponse::Created().json(success(FavouriteResponse::from(favourite))))
}

/// Remove a favourite for the signed-in user.
#[utoipa::path(
    delete,
    path = "/pokemon/{pokemon_id}/favourite",
    params(("pokemon_id" = i32, Path, description = "National dex number")),
    responses(
        (status = 204, description = "Favourite removed"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 401, description = "Login required", body = ErrorBody),
        (status = 404, description = "Not a favourite", body = ErrorBody)
    ),
    tags = ["favourites"],
    operation_id = "removeFavourite"
)]
#[delete("/pokemon/{pokemon_id}/favourite")]
pub async fn remove_favourite(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let pokemon_id = parse_pokemon_id(&path.into_inner())?;
    state
        .favourites
        .remove_favourite(user_id, pokemon_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the signed-in user's favourites.
#[utoipa::path(
    get,
    path = "/favourites",
    responses(
        (status = 200, description = "User and favourites", body = Envelope<FavouritesResponse>),
        (status = 401, description = "Login required", body = ErrorBody),
        (status = 404, description = "No favourites (compatibility mode only)", body = ErrorBody)
    ),
    tags = ["favourites"],
    operation_id = "listFavourites"
)]
#[get("/favourites")]
pub async fn list_favourites(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let listing = state.favourites_query.list_favourites(user_id).await?;
    Ok(HttpResponse::Ok().json(success(FavouritesResponse::from(listing))))
}

#[cfg(test)]
mod tests {
    //! Favourites handlers over mocked driving ports.
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        FixtureLoginService, MockCatalogueQuery, MockFavouritesCommand, MockFavouritesQuery,
    };
    use crate::domain::{EmptyFavouritesPolicy, Error};
    use crate::inbound::http::test_utils::{
        seeded_state, session_cookie, test_session_middleware,
    };
    use crate::inbound::http::users::login;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .service(login)
            .service(add_favourite)
            .service(remove_favourite)
            .service(list_favourites)
    }

    async fn sign_in<S>(app: &S) -> Cookie<'static>
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/login")
                .set_json(json!({"username": "ash", "password": "pikachu"}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response)
    }

    #[rstest]
    #[case(actix_test::TestRequest::post().uri("/pokemon/25/favourite"))]
    #[case(actix_test::TestRequest::delete().uri("/pokemon/25/favourite"))]
    #[case(actix_test::TestRequest::get().uri("/favourites"))]
    #[actix_web::test]
    async fn routes_require_a_session(#[case] request: actix_test::TestRequest) {
        let app =
            actix_test::init_service(test_app(seeded_state(EmptyFavouritesPolicy::default())))
                .await;

        let response = actix_test::call_service(&app, request.to_request()).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "unauthorized");
    }

    #[actix_web::test]
    async fn favourite_lifecycle_for_pikachu() {
        let app =
            actix_test::init_service(test_app(seeded_state(EmptyFavouritesPolicy::default())))
                .await;
        let cookie = sign_in(&app).await;
        let request = |req: actix_test::TestRequest| req.cookie(cookie.clone()).to_request();

        let added = actix_test::call_service(
            &app,
            request(actix_test::TestRequest::post().uri("/pokemon/25/favourite")),
        )
        .await;
        assert_eq!(added.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(added).await;
        assert_eq!(body["status"], "Success");
        assert_eq!(body["data"]["user_id"], 7);
        assert_eq!(body["data"]["pokemon_id"], 25);

        let repeated = actix_test::call_service(
            &app,
            request(actix_test::TestRequest::post().uri("/pokemon/25/favourite")),
        )
        .await;
        assert_eq!(repeated.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(repeated).await;
        assert_eq!(body["code"], "conflict");

        let listed = actix_test::call_service(
            &app,
            request(actix_test::TestRequest::get().uri("/favourites")),
        )
        .await;
        assert_eq!(listed.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(listed).await;
        assert_eq!(body["data"]["user"]["id"], 7);
        assert_eq!(
            body["data"]["favourites"],
            json!([{"id": 25, "name": "Pikachu"}])
        );

        let removed = actix_test::call_service(
            &app,
            request(actix_test::TestRequest::delete().uri("/pokemon/25/favourite")),
        )
        .await;
        assert_eq!(removed.status(), StatusCode::NO_CONTENT);
        assert!(actix_test::read_body(removed).await.is_empty());

        let removed_again = actix_test::call_service(
            &app,
            request(actix_test::TestRequest::delete().uri("/pokemon/25/favourite")),
        )
        .await;
        assert_eq!(removed_again.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case(EmptyFavouritesPolicy::EmptyList, StatusCode::OK)]
    #[case(EmptyFavouritesPolicy::NotFound, StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn empty_listing_status_follows_policy(
        #[case] policy: EmptyFavouritesPolicy,
        #[case] expected: StatusCode,
    ) {
        let app = actix_test::init_service(test_app(seeded_state(policy))).await;
        let cookie = sign_in(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/favourites")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), expected);
    }

    #[actix_web::test]
    async fn adding_unknown_pokemon_is_not_found() {
        let app =
            actix_test::init_service(test_app(seeded_state(EmptyFavouritesPolicy::default())))
                .await;
        let cookie = sign_in(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/pokemon/9999/favourite")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn service_outage_surfaces_as_unavailable() {
        let mut command = MockFavouritesCommand::new();
        command
            .expect_add_favourite()
            .return_once(|_, _| Err(Error::service_unavailable("database unreachable")));
        let state = HttpState::new(
            Arc::new(FixtureLoginService),
            Arc::new(MockCatalogueQuery::new()),
            Arc::new(command),
            Arc::new(MockFavouritesQuery::new()),
        );
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = sign_in(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/pokemon/25/favourite")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["status"], "error");
    }
}
