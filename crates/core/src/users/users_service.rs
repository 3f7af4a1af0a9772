use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Emails are compared case-insensitively and stored lowercase.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, email: &str, password_hash: String) -> Result<User> {
        let email = Self::normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if password_hash.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }
        if self.repository.get_by_email(&email)?.is_some() {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "user {} already exists",
                email
            ))));
        }

        let user = self
            .repository
            .create(NewUser {
                email,
                password_hash,
            })
            .await?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.get_by_email(&Self::normalize_email(email))
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.get_by_id(user_id)
    }

    fn verify_subscription_code(&self, email: &str, code: &str) -> Result<bool> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(false);
        }
        let verified = self
            .find_by_email(email)?
            .and_then(|user| user.subscription_code)
            .is_some_and(|stored| stored == code);
        debug!("Subscription code check for {}: {}", email, verified);
        Ok(verified)
    }

    async fn set_subscription_code(&self, user_id: &str, code: Option<String>) -> Result<User> {
        let code = code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self.repository
            .update_subscription_code(user_id.to_string(), code)
            .await
    }
}
