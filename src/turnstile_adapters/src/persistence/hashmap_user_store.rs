use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use turnstile_core::{Email, NewUser, User, UserId, UserRepository, UserRepositoryError};

#[derive(Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for HashMapUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = user.with_id(id);
        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }
}
