use crate::models::UserId;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("a user with id {0} already exists")]
    DuplicateKey(UserId),

    #[error("user with id {0} not found")]
    NotFound(UserId),
}
