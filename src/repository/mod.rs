pub mod products_repo;

pub use products_repo::ProductsRepository;

use sqlx::error::ErrorKind;

/* Database related errors */
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("A constraint was violated: {description}")]
    ConstraintViolation { description: String },

    #[error("Failed to decode database row: {0}")]
    RowDecodingError(String),

    // COUNT(*) came back negative, which only a broken driver does
    #[error("Integer conversion error: {0}")]
    IntConversion(#[from] std::num::TryFromIntError),

    #[error("Database error: {0}")]
    GenericDatabaseError(#[from] sqlx::Error)
}

impl RepositoryError {
    pub fn from_sqlx_error(sqlx_error: sqlx::Error) -> Self {
        match &sqlx_error {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::ConnectionError(sqlx_error.to_string()),

            sqlx::Error::Decode(decode_err) => Self::RowDecodingError(decode_err.to_string()),
            sqlx::Error::ColumnDecode { .. } => Self::RowDecodingError(sqlx_error.to_string()),

            sqlx::Error::Database(db_error) => {
                // driver independent, covers both the MySQL and the SQLite codes
                match db_error.kind() {
                    ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation => Self::ConstraintViolation {
                        description: db_error.message().to_string()
                    },
                    _ => Self::GenericDatabaseError(sqlx_error)
                }
            },

            _ => Self::GenericDatabaseError(sqlx_error)
        }
    }
}
