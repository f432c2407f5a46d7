use crate::domain::User;

#[derive(Debug, PartialEq)]
pub enum UserStoreError {
    UserAlreadyExists,
    UserNotFound,
    InvalidCredentials,
    UnexpectedError,
}

/// Collaborator contract for the principal store. The core never persists
/// principals itself; any backing store only has to answer lookups and
/// credential comparisons.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, name: &str) -> Result<User, UserStoreError>;
    async fn validate_user(&self, name: &str, password: &str) -> Result<(), UserStoreError>;
}
