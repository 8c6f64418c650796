use std::path::PathBuf;

use tower_http::services::ServeDir;
use time::Duration;
use tower_sessions::{cookie::{Key, SameSite}, Expiry, MemoryStore, SessionManagerLayer};
use axum::{routing::{get, post}, Router};

use crate::web::{handlers::{authenticate, register_product, serve_index, serve_login, serve_register}, AppState, WebLayerError};

pub struct RouterSettings {
    pub public_dir: PathBuf,
    pub session_key: Key,
    pub session_inactivity_minutes: i64
}

/// Signing key for the session cookie. Without a configured secret a random
/// key is generated, so cookies do not survive a restart (neither does the
/// in-memory store they point into).
pub fn session_key(secret: Option<&str>) -> Result<Key, WebLayerError> {
    match secret {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|err| WebLayerError::InvalidSessionSecret(err.to_string())),
        None => {
            log::warn!("No [session] secret configured, using a random key for this run.");
            Ok(Key::generate())
        }
    }
}

pub fn create_router(app_state: AppState, settings: RouterSettings) -> Router<()> {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(settings.session_inactivity_minutes)))
        .with_signed(settings.session_key);

    let app: Router<()> = Router::new()
        .route("/", get(serve_index))
        .route("/login", get(serve_login))
        .route("/register", get(serve_register).post(register_product))
        .route("/auth", post(authenticate))
        .nest_service("/resources", ServeDir::new(settings.public_dir))
        .layer(session_layer)
        .with_state(app_state);

    app
}
