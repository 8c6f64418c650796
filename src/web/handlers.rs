use axum::extract::State;
use serde::Deserialize;

use crate::{domain::notification::Notification, services::{authentication::AuthenticationService, registration::{ProductSubmission, RegistrationService}, AuthenticationError}, web::AppState};
use super::{extract::{optional_text_or_number, text_or_number, FormOrJson}, session::AuthSession, views::View};

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub id: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub nombre: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub marca: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub stock: String
}

impl From<RegisterForm> for ProductSubmission {
    fn from(form: RegisterForm) -> Self {
        Self {
            id: form.id,
            nombre: form.nombre,
            marca: form.marca,
            stock: form.stock
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthForm {
    #[serde(default, deserialize_with = "optional_text_or_number")]
    pub nombre: Option<String>,

    #[serde(default, deserialize_with = "optional_text_or_number")]
    pub id: Option<String>
}

pub async fn serve_index(session: AuthSession) -> View {
    let nombre = match session.get().await {
        Ok(data) if data.loggedin => data.nombre,
        Ok(_) => None,
        Err(err) => {
            log::warn!("Failed to read the session: {}", err);
            None
        }
    };

    View::index(nombre)
}

pub async fn serve_login() -> View {
    View::login(None)
}

pub async fn serve_register() -> View {
    View::register(None)
}

pub async fn register_product(State(state): State<AppState>, session: AuthSession, FormOrJson(form): FormOrJson<RegisterForm>) -> View {
    let submission = ProductSubmission::from(form);

    let product = match RegistrationService::new(&state.pool).register(&submission).await {
        Ok(product) => product,
        Err(err) => {
            log::warn!("Registration of '{}' failed: {}", submission.nombre, err);
            return View::register(Some(Notification::registration_failed()));
        }
    };

    if let Err(err) = session.set(product.nombre()).await {
        log::error!("Product '{}' was stored but the session could not be updated: {}", product.nombre(), err);
        return View::register(Some(Notification::registration_failed()));
    }

    View::login(Some(Notification::registration_succeeded()))
}

pub async fn authenticate(State(state): State<AppState>, session: AuthSession, FormOrJson(form): FormOrJson<AuthForm>) -> View {
    let service = AuthenticationService::new(&state.pool, state.identifier_check);

    let product = match service.authenticate(form.nombre.as_deref(), form.id.as_deref()).await {
        Ok(product) => product,
        Err(AuthenticationError::MissingCredentials) => {
            return View::login(Some(Notification::missing_credentials()));
        },
        Err(err) => {
            log::warn!("Authentication failed: {}", err);
            return View::login(Some(Notification::invalid_credentials()));
        }
    };

    if let Err(err) = session.set(product.nombre()).await {
        log::error!("Failed to store the session of '{}': {}", product.nombre(), err);
        return View::login(Some(Notification::invalid_credentials()));
    }

    View::login(Some(Notification::login_succeeded()))
}
