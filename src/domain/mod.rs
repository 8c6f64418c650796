pub mod product;
pub mod notification;

use thiserror;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Stock must be a whole number, got '{0}'.")]
    StockIsNotANumber(String)
}
