use sqlx::AnyPool;

use crate::{domain::product::Product, repository::ProductsRepository};
use super::RegistrationError;

/// Raw values of the register form, exactly as the browser sent them.
#[derive(Debug, Default, Clone)]
pub struct ProductSubmission {
    pub id: String,
    pub nombre: String,
    pub marca: String,
    pub stock: String
}

pub struct RegistrationService<'a> {
    products_repo: ProductsRepository,
    pool: &'a AnyPool
}

impl<'a> RegistrationService<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self {
            products_repo: ProductsRepository::new(),
            pool
        }
    }

    /// Stores the submitted product.
    ///
    /// Apart from `stock` having to be an integer nothing is validated: empty
    /// strings and duplicate ids go straight to the database, which decides.
    /// Any failure is returned as is, there is no retry.
    pub async fn register(&self, submission: &ProductSubmission) -> Result<Product, RegistrationError> {
        let product = Product::from_raw(
            submission.id.as_str(),
            submission.nombre.as_str(),
            submission.marca.as_str(),
            &submission.stock
        )?;

        let saved = self.products_repo.save(self.pool, &product).await?;
        log::info!("Registered product '{}' (id '{}')", saved.nombre(), saved.id());

        Ok(saved)
    }
}
