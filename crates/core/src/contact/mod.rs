//! Contact module - contact form submissions and their delivery.

mod contact_model;
mod contact_service;
mod contact_traits;

pub use contact_model::{ContactMessage, ContactRequest, DeliveryStatus};
pub use contact_service::ContactService;
pub use contact_traits::{ContactServiceTrait, MailerTrait};
