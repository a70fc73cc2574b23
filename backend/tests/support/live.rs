//! A real listener on an ephemeral port for tests that speak HTTP.
//!
//! Must be called from inside an Actix-compatible runtime because the server
//! future is handed to `actix_web::rt::spawn`.

use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use pokedex_backend::Trace;
use pokedex_backend::domain::EmptyFavouritesPolicy;
use pokedex_backend::inbound::http::configure_api;

use crate::app;

pub(crate) struct LiveServer {
    pub(crate) base_url: String,
    pub(crate) handle: ServerHandle,
}

pub(crate) fn spawn_server(policy: EmptyFavouritesPolicy) -> LiveServer {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    let state = web::Data::new(app::seeded_state(policy));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(app::test_session_middleware(key.clone()))
            .wrap(Trace)
            .configure(configure_api)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen")
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    LiveServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}
