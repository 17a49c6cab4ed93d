//! Snippets backend entry-point: loads settings and runs the HTTP server.

mod server;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{AdminAccount, ServerConfig, ServerSettings, create_server};
use snippets::inbound::http::health::HealthState;

const DEV_ADMIN_PASSWORD: &str = "password";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let key = load_session_key(&settings)?;
    let mut config = ServerConfig::new(
        key,
        settings.cookie_secure(),
        SameSite::Lax,
        settings.bind_addr()?,
    )
    .with_representation(settings.representation()?);
    if let Some(admin) = admin_account(&settings) {
        config = config.with_admin(admin);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).await?;
    server.await
}

fn load_session_key(settings: &ServerSettings) -> std::io::Result<Key> {
    let key_path = settings.session_key_file();
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            if cfg!(debug_assertions) || settings.allow_ephemeral_session_key {
                warn!(
                    path = %key_path.display(),
                    error = %e,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {}: {e}",
                    key_path.display()
                )))
            }
        }
    }
}

fn admin_account(settings: &ServerSettings) -> Option<AdminAccount> {
    let username = settings.admin_username();
    match settings.admin_password.as_deref() {
        Some(password) => Some(AdminAccount::new(username, password)),
        None if cfg!(debug_assertions) => {
            warn!(username, "using default admin password (dev only)");
            Some(AdminAccount::new(username, DEV_ADMIN_PASSWORD))
        }
        None => {
            warn!(username, "no admin password configured; admin account not seeded");
            None
        }
    }
}
