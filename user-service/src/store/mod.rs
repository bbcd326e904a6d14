// User Store
// Data-access contract over User records and its in-memory implementation

pub mod memory;

pub use memory::InMemoryUserStore;

use crate::error::ServiceResult;
use crate::models::{User, UserId};

/// CRUD access to User records keyed by id.
///
/// Lookups never fail: a missing id is reported as `None`. Mutations that
/// target a missing id, or an insert that collides with an existing one, are
/// rejected and leave the store unchanged.
pub trait UserStore {
    /// Returns the user with the given id, if present.
    fn get_by_id(&self, id: UserId) -> Option<&User>;

    /// Returns every stored user in insertion order.
    fn get_all(&self) -> Vec<&User>;

    /// Adds a new user. Fails with `DuplicateKey` if the id is taken.
    fn insert(&mut self, user: User) -> ServiceResult<()>;

    /// Replaces the stored record with the same id. Fails with `NotFound`
    /// if there is none.
    fn update(&mut self, user: User) -> ServiceResult<()>;

    /// Removes the record whose id matches `user.id`. Fails with `NotFound`
    /// if there is none.
    fn delete(&mut self, user: &User) -> ServiceResult<()>;

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
