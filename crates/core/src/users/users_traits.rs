use crate::errors::Result;
use crate::users::users_model::{NewUser, User};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_email(&self, email: &str) -> Result<Option<User>>;
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
    async fn update_subscription_code(&self, user_id: String, code: Option<String>)
        -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, email: &str, password_hash: String) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    /// True when `email` belongs to a user whose stored code equals `code`.
    fn verify_subscription_code(&self, email: &str, code: &str) -> Result<bool>;
    async fn set_subscription_code(&self, user_id: &str, code: Option<String>) -> Result<User>;
}
