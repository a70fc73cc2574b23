//! In-process coverage of the public routes registered by `configure_api`.

#[path = "support/app.rs"]
mod app;

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use pokedex_backend::Trace;
use pokedex_backend::domain::EmptyFavouritesPolicy;
use pokedex_backend::inbound::http::configure_api;
use rstest::rstest;
use serde_json::{Value, json};

async fn service(
    policy: EmptyFavouritesPolicy,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(app::seeded_state(policy)))
            .wrap(app::test_session_middleware(Key::generate()))
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

async fn login<S>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    login_as(app, "ash", "pikachu").await
}

async fn login_as<S>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": username, "password": password}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie")
}

#[actix_web::test]
async fn catalogue_page_follows_limit_and_offset() {
    let app = service(EmptyFavouritesPolicy::EmptyList).await;
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/pokemon?limit=3&offset=24")
            .to_request(),
    )
    .await;

    let names: Vec<&str> = body["data"]["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, ["Pikachu", "Raichu", "Sandshrew"]);
    assert_eq!(body["data"]["total"], 151);
    assert_eq!(body["data"]["offset"], 24);
}

#[rstest]
#[case("/pokemon?limit=0", "limit_out_of_range")]
#[case("/pokemon?limit=101", "limit_out_of_range")]
#[case("/pokemon?offset=-1", "invalid_integer")]
#[case("/pokemon/abc", "invalid_pokemon_id")]
#[case("/pokemon/0", "invalid_pokemon_id")]
#[actix_web::test]
async fn malformed_input_is_a_structured_bad_request(#[case] uri: &str, #[case] detail: &str) {
    let app = service(EmptyFavouritesPolicy::EmptyList).await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], detail);
}

#[actix_web::test]
async fn entry_reports_favourite_flag_only_for_signed_in_callers() {
    let app = service(EmptyFavouritesPolicy::EmptyList).await;

    let anonymous: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/pokemon/25").to_request(),
    )
    .await;
    assert_eq!(anonymous["data"]["name"], "Pikachu");
    assert!(anonymous["data"].get("favourite").is_none());

    let cookie = login(&app).await;
    let added = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/pokemon/25/favourite")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(added.status(), StatusCode::CREATED);

    let signed_in: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/pokemon/25")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(signed_in["data"]["favourite"], true);
}

#[actix_web::test]
async fn wrong_password_is_unauthorised() {
    let app = service(EmptyFavouritesPolicy::EmptyList).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "ash", "password": "raichu"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(
        response
            .response()
            .cookies()
            .all(|cookie| cookie.name() != "session")
    );
}

#[actix_web::test]
async fn second_demo_account_keeps_separate_favourites() {
    let app = service(EmptyFavouritesPolicy::EmptyList).await;
    let ash = login(&app).await;
    let added = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/pokemon/25/favourite")
            .cookie(ash)
            .to_request(),
    )
    .await;
    assert_eq!(added.status(), StatusCode::CREATED);

    let misty = login_as(&app, "misty", "starmie").await;
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/favourites")
            .cookie(misty)
            .to_request(),
    )
    .await;

    assert_eq!(body["data"]["user"]["username"], "misty");
    assert_eq!(body["data"]["favourites"], json!([]));
}

#[actix_web::test]
async fn malformed_login_body_is_a_bad_request() {
    let app = service(EmptyFavouritesPolicy::EmptyList).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"username\":")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[case(EmptyFavouritesPolicy::EmptyList, StatusCode::OK)]
#[case(EmptyFavouritesPolicy::NotFound, StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn empty_favourites_follow_the_configured_policy(
    #[case] policy: EmptyFavouritesPolicy,
    #[case] expected: StatusCode,
) {
    let app = service(policy).await;
    let cookie = login(&app).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/favourites")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), expected);
}
