use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::domain::notification::Notification;
use super::WebLayerError;

pub const WELCOME_MESSAGE: &str = "que bendicion, el inventario de productos varios";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub msg: &'static str,
    pub nombre: Option<String>
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub alert: Option<Notification>
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub alert: Option<Notification>
}

/// The page a handler picked, rendered only when turned into a response.
pub enum View {
    Index(IndexTemplate),
    Login(LoginTemplate),
    Register(RegisterTemplate)
}

impl View {
    pub fn index(nombre: Option<String>) -> Self {
        Self::Index(IndexTemplate { msg: WELCOME_MESSAGE, nombre })
    }

    pub fn login(alert: Option<Notification>) -> Self {
        Self::Login(LoginTemplate { alert })
    }

    pub fn register(alert: Option<Notification>) -> Self {
        Self::Register(RegisterTemplate { alert })
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            View::Index(_) => None,
            View::Login(template) => template.alert.as_ref(),
            View::Register(template) => template.alert.as_ref()
        }
    }

    pub fn render(&self) -> Result<String, WebLayerError> {
        let html = match self {
            View::Index(template) => template.render()?,
            View::Login(template) => template.render()?,
            View::Register(template) => template.render()?
        };

        Ok(html)
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        // logical failures still render with 200, the alert carries the outcome
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => err.into_response()
        }
    }
}
