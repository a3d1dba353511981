//! Service entry-point: loads settings, wires the user directory adapter and
//! starts the HTTP server.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hello_kit::inbound::http::health::HealthState;
use hello_kit::outbound::users::UserHttpSource;
use hello_kit::settings::AppSettings;
use server::{ServerConfig, create_server};

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

    let settings = AppSettings::load().wrap_err("load configuration")?;
    let bind_addr = settings.bind_addr()?;
    let users_base_url = settings.users_base_url()?;
    let users =
        UserHttpSource::new(users_base_url.clone()).wrap_err("build user directory client")?;

    let config = ServerConfig::new(bind_addr).with_user_source(Arc::new(users));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;

    info!(%bind_addr, users_base_url = %users_base_url, "server listening");
    server.await?;
    Ok(())
}
