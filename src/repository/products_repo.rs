use sqlx::{Any, Executor, FromRow};

use crate::domain::product::Product;
use super::RepositoryError;

#[derive(FromRow)]
struct DbProduct {
    id: String,
    nombre: String,
    marca: String,
    stock: i64
}

impl From<DbProduct> for Product {
    fn from(db_product: DbProduct) -> Self {
        Self::new(db_product.id, db_product.nombre, db_product.marca, db_product.stock)
    }
}

pub struct ProductsRepository;

impl ProductsRepository {
    pub fn new() -> Self {
        Self {}
    }
}

impl ProductsRepository {
    /// Inserts one row. Nothing stops two rows from sharing an `id`.
    pub async fn save<'e, E, P>(&self, executor: E, product: P) -> Result<Product, RepositoryError>
    where
        E: Executor<'e, Database = Any>,
        P: AsRef<Product> + Sync
    {
        let product = product.as_ref();

        sqlx::query(
            "INSERT INTO productos(id, nombre, marca, stock)
            VALUES (?, ?, ?, ?);")
            .bind(product.id())
            .bind(product.nombre())
            .bind(product.marca())
            .bind(product.stock())
            .execute(executor)
            .await
            .map_err(RepositoryError::from_sqlx_error)?;

        Ok(product.clone())
    }

    pub async fn by_name_fetch<'e, E, S>(&self, executor: E, nombre: S) -> Result<Option<Product>, RepositoryError>
    where
        E: Executor<'e, Database = Any>,
        S: Into<String>
    {
        let nombre = nombre.into();
        let db_product = sqlx::query_as::<_, DbProduct>(
            "SELECT id, nombre, marca, stock FROM productos WHERE nombre = ? LIMIT 1;")
            .bind(nombre)
            .fetch_optional(executor)
            .await
            .map_err(RepositoryError::from_sqlx_error)?;

        Ok(db_product.map(Product::from))
    }

    #[cfg(test)]
    pub async fn count_by_id<'e, E, S>(&self, executor: E, id: S) -> Result<u64, RepositoryError>
    where
        E: Executor<'e, Database = Any>,
        S: Into<String>
    {
        let id = id.into();
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM productos WHERE id = ?;")
            .bind(id)
            .fetch_one(executor)
            .await
            .map_err(RepositoryError::from_sqlx_error)?;

        Ok(u64::try_from(count)?)
    }
}

#[cfg(test)]
mod tests {

    use sqlx::{AnyPool, Transaction};

    use super::*;
    use crate::repository::test_helpers::{prepare_broken_db, prepare_db, TestSetupError};

    struct TestContext {
        pool: AnyPool,
        repo: ProductsRepository,
        entities: Vec<Product>,
    }

    impl TestContext {
        async fn new() -> Result<Self, TestSetupError> {
            Ok(
                Self {
                    pool: prepare_db().await?,
                    repo: ProductsRepository::new(),
                    entities: Vec::new()
                }
            )
        }

        async fn tx(&self) -> Result<Transaction<'static, Any>, TestSetupError> {
            self.pool.begin().await.map_err(TestSetupError::DbError)
        }

        fn with_entities(mut self, amount: u16) -> Self {
            self.entities.extend(create_products(amount));
            self
        }
    }

    fn create_products(amount: u16) -> Vec<Product> {
        (1..=amount)
            .map(|i| {
                Product::new(
                    format!("P-{:03}", i),
                    format!("Producto #{}", i),
                    format!("Marca #{}", i % 3),
                    i64::from(i) * 10
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn save_one_success() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?.with_entities(1);

        let saved = ctx.repo.save(&ctx.pool, &ctx.entities[0]).await?;

        assert_eq!(saved, ctx.entities[0]);
        assert_eq!(ctx.repo.count_by_id(&ctx.pool, saved.id()).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn save_then_fetch_by_name_round_trip() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?.with_entities(3);

        for product in &ctx.entities {
            ctx.repo.save(&ctx.pool, product).await?;
        }

        let fetched = ctx.repo.by_name_fetch(&ctx.pool, ctx.entities[1].nombre()).await?;

        assert_eq!(fetched, Some(ctx.entities[1].clone()));

        Ok(())
    }

    #[tokio::test]
    async fn none_by_name_fetch() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?;

        let fetched = ctx.repo.by_name_fetch(&ctx.pool, "no existe").await?;
        assert!(fetched.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn by_name_fetch_is_exact_match() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?.with_entities(1);
        ctx.repo.save(&ctx.pool, &ctx.entities[0]).await?;

        let fetched = ctx.repo.by_name_fetch(&ctx.pool, "Producto").await?;
        assert!(fetched.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_id_is_not_rejected() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?;
        let first = Product::new("DUP-1", "Martillo", "Acme", 5);
        let second = Product::new("DUP-1", "Martillo", "Acme", 5);

        ctx.repo.save(&ctx.pool, &first).await?;
        ctx.repo.save(&ctx.pool, &second).await?;

        assert_eq!(ctx.repo.count_by_id(&ctx.pool, "DUP-1").await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn save_inside_transaction() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?.with_entities(2);

        let mut tx = ctx.tx().await?;
        ctx.repo.save(&mut *tx, &ctx.entities[0]).await?;
        let fetched = ctx.repo.by_name_fetch(&mut *tx, ctx.entities[0].nombre()).await?;
        assert!(fetched.is_some());
        tx.rollback().await?;

        let fetched = ctx.repo.by_name_fetch(&ctx.pool, ctx.entities[0].nombre()).await?;
        assert!(fetched.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn count_by_unknown_id_is_zero() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?;
        assert_eq!(ctx.repo.count_by_id(&ctx.pool, "nada").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn failing_database_surfaces_error() -> Result<(), TestSetupError> {
        let pool = prepare_broken_db().await?;
        let repo = ProductsRepository::new();
        let product = Product::new("X", "Y", "Z", 1);

        assert!(repo.save(&pool, &product).await.is_err());
        assert!(repo.by_name_fetch(&pool, "Y").await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn closed_pool_is_a_connection_error() -> Result<(), TestSetupError> {
        let ctx = TestContext::new().await?.with_entities(1);
        ctx.pool.close().await;

        let outcome = ctx.repo.save(&ctx.pool, &ctx.entities[0]).await;
        assert!(matches!(outcome, Err(RepositoryError::ConnectionError(_))));

        Ok(())
    }
}
