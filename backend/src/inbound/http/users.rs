//! Login handler.
//!
//! ```text
//! POST /login {"username":"ash","password":"pikachu"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, success};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /login`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    /// Account handle.
    #[schema(example = "ash")]
    pub username: String,
    /// Plain-text password; only compared, never stored by this handler.
    #[schema(example = "pikachu")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Identity established by a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Authenticated user id.
    #[schema(example = 7)]
    pub user_id: i64,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Authenticate a user and establish a session cookie.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = Envelope<LoginResponse>,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(user_id)?;
    info!(%user_id, "user signed in");
    Ok(HttpResponse::Ok().json(success(LoginResponse {
        user_id: user_id.get(),
    })))
}

#[cfg(test)]
mod tests {
    //! Login handler: session issue, rejection and payload validation.
    use super::*;
    use crate::domain::EmptyFavouritesPolicy;
    use crate::inbound::http::test_utils::{seeded_state, test_session_middleware};
    use crate::inbound::http::validation::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(seeded_state(EmptyFavouritesPolicy::default())))
            .app_data(json_config())
            .wrap(test_session_middleware())
            .service(login)
    }

    async fn post_login(body: Value) -> (StatusCode, Value, bool) {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/login")
            .set_json(&body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let has_cookie = response
            .response()
            .cookies()
            .any(|cookie| cookie.name() == "session");
        let value: Value = actix_test::read_body_json(response).await;
        (status, value, has_cookie)
    }

    #[actix_web::test]
    async fn login_sets_session_and_returns_user_id() {
        let (status, body, has_cookie) =
            post_login(json!({"username": "ash", "password": "pikachu"})).await;

        assert_eq!(status, StatusCode::OK);
        assert!(has_cookie);
        assert_eq!(body["status"], "Success");
        assert_eq!(body["data"]["user_id"], 7);
    }

    #[rstest]
    #[case("   ", "pikachu", "username must not be empty", "empty_username")]
    #[case("ash", "", "password must not be empty", "empty_password")]
    #[actix_web::test]
    async fn login_rejects_blank_fields(
        #[case] username: &str,
        #[case] password: &str,
        #[case] message: &str,
        #[case] detail_code: &str,
    ) {
        let (status, body, has_cookie) =
            post_login(json!({"username": username, "password": password})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!has_cookie);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["message"], message);
        assert_eq!(body["details"]["code"], detail_code);
    }

    #[actix_web::test]
    async fn login_rejects_wrong_password() {
        let (status, body, _) =
            post_login(json!({"username": "ash", "password": "charmander"})).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "unauthorized");
        assert_eq!(body["message"], "invalid credentials");
    }

    #[actix_web::test]
    async fn malformed_body_uses_standard_error_shape() {
        let (status, body, _) = post_login(json!({"username": "ash"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], "malformed_body");
    }
}
