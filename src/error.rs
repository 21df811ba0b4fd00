//! Board Errors
//!
//! Guard failures. Handlers log these and carry on; nothing reaches the user.

use thiserror::Error;

use crate::models::OrderId;

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("order {0} not found")]
    NotFound(OrderId),
    #[error("invalid order id: {0:?}")]
    InvalidId(String),
    #[error("unknown column: {0:?}")]
    UnknownColumn(String),
    #[error("{0} is blank")]
    BlankField(&'static str),
}
