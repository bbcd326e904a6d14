// User Service Library
// In-memory user directory behind the UserStore contract

pub mod error;
pub mod models;
pub mod store;

pub use error::{ServiceError, ServiceResult};
pub use models::{User, UserId};
pub use store::{InMemoryUserStore, UserStore};
