use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use crate::contact::contact_model::{ContactMessage, ContactRequest, DeliveryStatus};
use crate::contact::contact_traits::{ContactServiceTrait, MailerTrait};
use crate::errors::{Result, ValidationError};

pub struct ContactService {
    mailer: Option<Arc<dyn MailerTrait>>,
}

impl ContactService {
    pub fn new(mailer: Option<Arc<dyn MailerTrait>>) -> Self {
        Self { mailer }
    }

    fn validate(request: ContactRequest) -> Result<ContactMessage> {
        let field = |value: Option<String>, name: &str| -> Result<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ValidationError::MissingField(name.to_string()).into())
        };
        Ok(ContactMessage {
            name: field(request.name, "name")?,
            email: field(request.email, "email")?,
            message: field(request.message, "message")?,
        })
    }
}

#[async_trait]
impl ContactServiceTrait for ContactService {
    async fn submit(&self, request: ContactRequest) -> Result<DeliveryStatus> {
        let message = Self::validate(request)?;

        let Some(mailer) = self.mailer.as_ref() else {
            warn!("No mailer configured; contact message from {} queued", message.email);
            return Ok(DeliveryStatus::Queued);
        };

        match mailer.send(&message).await {
            Ok(()) => {
                info!("Contact message from {} sent", message.email);
                Ok(DeliveryStatus::Sent)
            }
            Err(e) => {
                warn!("Unable to send contact message: {}", e);
                Ok(DeliveryStatus::Queued)
            }
        }
    }
}
