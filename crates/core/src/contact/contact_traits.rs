use async_trait::async_trait;

use crate::contact::contact_model::{ContactMessage, ContactRequest, DeliveryStatus};
use crate::errors::Result;

/// Outbound mail transport
#[async_trait]
pub trait MailerTrait: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

/// Trait for contact service operations
#[async_trait]
pub trait ContactServiceTrait: Send + Sync {
    async fn submit(&self, request: ContactRequest) -> Result<DeliveryStatus>;
}
