use axum::{extract::FromRequestParts, http::{request::Parts, StatusCode}};
use tower_sessions::{session::Error as SessionError, Session};

pub const LOGGED_IN_KEY: &str = "loggedin";
pub const NOMBRE_KEY: &str = "nombre";

/// What a session knows about its browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub loggedin: bool,
    pub nombre: Option<String>
}

/// Per request handle on the session store.
///
/// Handlers only see these three operations, the underlying
/// [`tower_sessions::Session`] stays private.
#[derive(Debug, Clone)]
pub struct AuthSession {
    session: Session
}

impl AuthSession {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn get(&self) -> Result<SessionData, SessionError> {
        let loggedin = self.session.get::<bool>(LOGGED_IN_KEY).await?.unwrap_or(false);
        let nombre = self.session.get::<String>(NOMBRE_KEY).await?;

        Ok(SessionData { loggedin, nombre })
    }

    /// Marks the session as logged in under `nombre`.
    pub async fn set(&self, nombre: &str) -> Result<(), SessionError> {
        self.session.insert(LOGGED_IN_KEY, true).await?;
        self.session.insert(NOMBRE_KEY, nombre).await?;

        Ok(())
    }

    // no logout route, only the tests end a session by hand
    #[cfg(test)]
    pub async fn delete(&self) -> Result<(), SessionError> {
        self.session.flush().await
    }
}

impl<S> FromRequestParts<S> for AuthSession
where S: Send + Sync
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;

        Ok(Self::new(session))
    }
}
