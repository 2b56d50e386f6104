//! Contacts API - an HTTP server for managing address-book contacts.
//!
//! This library provides a small CRUD service: contact records with name,
//! email, and postal address fields, stored behind a swappable store trait
//! and exposed over REST with a `{success, data?, error?}` JSON envelope.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact ids and email addresses
//! - **models**: Contact entity, wire-input form, and country reference data
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: The `ContactStore` trait and its in-memory backend
//! - **services**: The `ContactService` validation/orchestration layer
//! - **server**: axum HTTP adapter (router, handlers, CORS)

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, ContactApiError, ContactResult};
pub use models::{Contact, ContactData, Country};
pub use repositories::{ContactStore, MemoryContactStore};
pub use server::{build_router, AppState};
pub use services::{ContactService, ContactServiceImpl};
