use crate::error::{ServiceError, ServiceResult};
use crate::models::{User, UserId};
use crate::store::UserStore;

use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug)]
struct Entry {
    seq: u64,
    user: User,
}

/// `UserStore` backed by a `HashMap`.
///
/// Each entry remembers the sequence number it was inserted with, so
/// `get_all` can hand records back in insertion order. Updates keep the
/// original sequence number.
#[derive(Debug)]
pub struct InMemoryUserStore {
    users: HashMap<UserId, Entry>,
    next_seq: u64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn get_by_id(&self, id: UserId) -> Option<&User> {
        self.users.get(&id).map(|entry| &entry.user)
    }

    fn get_all(&self) -> Vec<&User> {
        let mut entries: Vec<&Entry> = self.users.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries.into_iter().map(|entry| &entry.user).collect()
    }

    fn insert(&mut self, user: User) -> ServiceResult<()> {
        if self.users.contains_key(&user.id) {
            warn!(id = user.id, "insert rejected, id already present");
            return Err(ServiceError::DuplicateKey(user.id));
        }

        let id = user.id;
        let seq = self.next_seq;
        self.users.insert(id, Entry { seq, user });
        self.next_seq += 1;
        debug!(id, seq, "inserted user");
        Ok(())
    }

    fn update(&mut self, user: User) -> ServiceResult<()> {
        match self.users.get_mut(&user.id) {
            Some(entry) => {
                debug!(id = user.id, "replaced user");
                entry.user = user;
                Ok(())
            }
            None => {
                warn!(id = user.id, "update rejected, no such user");
                Err(ServiceError::NotFound(user.id))
            }
        }
    }

    fn delete(&mut self, user: &User) -> ServiceResult<()> {
        if self.users.remove(&user.id).is_none() {
            warn!(id = user.id, "delete rejected, no such user");
            return Err(ServiceError::NotFound(user.id));
        }

        debug!(id = user.id, "deleted user");
        Ok(())
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
