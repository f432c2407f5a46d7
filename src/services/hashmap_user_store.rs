use std::collections::HashMap;

use crate::domain::{User, UserStore, UserStoreError};

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<String, User>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
        }
    }

    pub fn get_user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        if self.users.contains_key(&user.name) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.users.insert(user.name.clone(), user);
        Ok(())
    }

    async fn get_user(&self, name: &str) -> Result<User, UserStoreError> {
        self.users
            .get(name)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(&self, name: &str, password: &str) -> Result<(), UserStoreError> {
        let user = self.users.get(name).ok_or(UserStoreError::UserNotFound)?;
        if user.password == password {
            return Ok(());
        }
        Err(UserStoreError::InvalidCredentials)
    }
}
