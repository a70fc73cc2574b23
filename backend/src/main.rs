//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pokedex_backend::example_data::seed_example_data_on_startup;
use pokedex_backend::inbound::http::health::HealthState;
use pokedex_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use ortho_config::OrthoConfig;
use pokedex_backend::settings::AppSettings;
use server::{ServerConfig, create_server, load_session_key};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let key = load_session_key(
        &settings.session_key_file(),
        settings.allow_ephemeral_session_key,
    )?;

    let db_pool = match settings.database_url() {
        Some(url) => {
            run_pending_migrations(url)
                .await
                .wrap_err("database migrations failed")?;
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .wrap_err("database pool setup failed")?;
            Some(pool)
        }
        None => {
            warn!("no database configured; using in-memory storage");
            None
        }
    };

    seed_example_data_on_startup(&settings.example_data(), db_pool.as_ref())
        .await
        .wrap_err("example data seeding failed")?;

    let mut config = ServerConfig::new(key, settings.cookie_secure, SameSite::Lax, bind_addr)
        .with_empty_policy(settings.empty_favourites_policy());
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    health_state.mark_ready();
    info!(%bind_addr, "pokedex backend listening");

    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
