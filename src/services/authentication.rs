use sqlx::AnyPool;

use crate::{domain::product::Product, repository::ProductsRepository, utils::config::IdentifierCheck};
use super::AuthenticationError;

pub struct AuthenticationService<'a> {
    products_repo: ProductsRepository,
    pool: &'a AnyPool,
    identifier_check: IdentifierCheck
}

impl<'a> AuthenticationService<'a> {
    pub fn new(pool: &'a AnyPool, identifier_check: IdentifierCheck) -> Self {
        Self {
            products_repo: ProductsRepository::new(),
            pool,
            identifier_check
        }
    }

    /// Finds the product a login form refers to.
    ///
    /// Empty or absent values are rejected before the database is queried.
    /// With [`IdentifierCheck::NameOnly`] the submitted `id` is never compared,
    /// any non-empty value is accepted once the name matches.
    pub async fn authenticate(&self, nombre: Option<&str>, id: Option<&str>) -> Result<Product, AuthenticationError> {
        let (nombre, id) = match (nombre, id) {
            (Some(nombre), Some(id)) if !nombre.is_empty() && !id.is_empty() => (nombre, id),
            _ => return Err(AuthenticationError::MissingCredentials)
        };

        let product = self.products_repo.by_name_fetch(self.pool, nombre).await?
            .ok_or_else(|| AuthenticationError::UnknownName(nombre.to_string()))?;

        match self.identifier_check {
            IdentifierCheck::NameOnly => {},
            IdentifierCheck::NameAndId => {
                if product.id() != id {
                    return Err(AuthenticationError::IdentifierMismatch(nombre.to_string()));
                }
            }
        }

        log::info!("Product '{}' logged in", product.nombre());

        Ok(product)
    }
}
