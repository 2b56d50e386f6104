//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions with the
//! store. They provide a clean boundary between the HTTP handlers and the
//! data access layer.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};

// Re-export common types used by services
pub use crate::models::{Contact, ContactData};
