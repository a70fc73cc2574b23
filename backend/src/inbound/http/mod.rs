//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod envelope;
pub mod error;
pub mod favourites;
pub mod health;
pub mod pokemon;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register the REST endpoints and the JSON extractor configuration.
///
/// Session middleware, [`state::HttpState`] and the health state are wired by
/// the caller.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use pokedex_backend::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(users::login)
        .service(pokemon::list_pokemon)
        .service(pokemon::get_pokemon)
        .service(favourites::add_favourite)
        .service(favourites::remove_favourite)
        .service(favourites::list_favourites);
}
