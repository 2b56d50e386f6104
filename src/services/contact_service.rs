//! Contact service layer.
//!
//! Business logic for contact CRUD: validates input, assigns ids, and
//! orchestrates calls to the store. Transport adapters talk to this trait
//! and never to a store directly.

use crate::domain::{ContactId, EmailAddress, ValidationError};
use crate::error::ContactResult;
use crate::models::{Contact, ContactData};
use crate::repositories::ContactStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Get all contacts.
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// Get a single contact by id. `None` when absent; the adapter turns
    /// that into a 404.
    async fn get_contact(&self, id: &str) -> ContactResult<Option<Contact>>;

    /// Validate the input, assign an id when none is supplied, and persist
    /// a new contact. Invalid input never reaches the store.
    async fn create_contact(&self, data: ContactData) -> ContactResult<Contact>;

    /// Validate the input and replace the contact with the given id. The id
    /// argument always wins over any id embedded in the body.
    async fn update_contact(&self, id: &str, data: ContactData) -> ContactResult<Contact>;

    /// Delete a contact. Returns whether a record existed and was removed.
    async fn delete_contact(&self, id: &str) -> ContactResult<bool>;
}

/// Default implementation of [`ContactService`] over an injected store.
pub struct ContactServiceImpl {
    store: Arc<dyn ContactStore>,
}

impl ContactServiceImpl {
    /// Create a new contact service backed by the given store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Require a field to be present and non-empty, returning its value.
    fn require_field<'a>(
        name: &'static str,
        value: &'a Option<String>,
    ) -> Result<&'a str, ValidationError> {
        match value.as_deref() {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ValidationError::MissingField(name)),
        }
    }

    /// Validate the six required fields in fixed order, then the email
    /// syntax, and assemble a contact with the given id.
    ///
    /// Reports only the first failure. Accepted values are carried through
    /// exactly as submitted.
    fn build_contact(id: String, data: &ContactData) -> Result<Contact, ValidationError> {
        let first_name = Self::require_field("first_name", &data.first_name)?;
        let last_name = Self::require_field("last_name", &data.last_name)?;
        let email = Self::require_field("email", &data.email)?;
        let street_address = Self::require_field("street_address", &data.street_address)?;
        let city = Self::require_field("city", &data.city)?;
        let country = Self::require_field("country", &data.country)?;

        // Email syntax is checked only after every field passed the
        // presence check
        let email = EmailAddress::new(email)?;

        Ok(Contact {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.into_inner(),
            street_address: street_address.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        })
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        self.store.list_all().await
    }

    async fn get_contact(&self, id: &str) -> ContactResult<Option<Contact>> {
        self.store.get_by_id(id).await
    }

    async fn create_contact(&self, data: ContactData) -> ContactResult<Contact> {
        let id = match data.id.as_deref() {
            Some(id) if !id.is_empty() => ContactId::new(id)?,
            _ => ContactId::generate(),
        };

        let contact = Self::build_contact(id.into_inner(), &data)?;
        debug!(id = %contact.id, "creating contact");
        self.store.create(contact).await
    }

    async fn update_contact(&self, id: &str, data: ContactData) -> ContactResult<Contact> {
        // The path id always wins over any id in the body
        let contact = Self::build_contact(id.to_string(), &data)?;
        debug!(id = %contact.id, "updating contact");
        self.store.update(contact).await
    }

    async fn delete_contact(&self, id: &str) -> ContactResult<bool> {
        debug!(id = %id, "deleting contact");
        self.store.delete(id).await
    }
}
