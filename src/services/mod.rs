pub mod registration;
pub mod authentication;

use crate::domain::ValidationError;
use crate::repository::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    RepositoryError(#[from] RepositoryError),

    #[error("Validation error has occured: {0}")]
    DomainStructValidationError(#[from] ValidationError),
}

#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Name and/or identifier is missing.")]
    MissingCredentials,

    #[error("No product is named '{0}'.")]
    UnknownName(String),

    #[error("Identifier does not match the product named '{0}'.")]
    IdentifierMismatch(String),

    #[error(transparent)]
    RepositoryError(#[from] RepositoryError),
}
