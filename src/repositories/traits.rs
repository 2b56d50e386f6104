use crate::error::ContactResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Store for contact records.
///
/// Provides abstraction over contact persistence, enabling different
/// backing implementations (in-memory, durable database) without changing
/// the service layer.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Retrieve every stored contact in insertion order.
    ///
    /// The order is stable within a run but is not an API guarantee.
    async fn list_all(&self) -> ContactResult<Vec<Contact>>;

    /// Retrieve a single contact by id. `None` when absent; a missing id is
    /// never an error.
    async fn get_by_id(&self, id: &str) -> ContactResult<Option<Contact>>;

    /// Insert a new contact, assigning a generated id when `contact.id` is
    /// empty. Fails with `Conflict` when the id is already taken. Returns
    /// the stored contact with its final id.
    async fn create(&self, contact: Contact) -> ContactResult<Contact>;

    /// Replace the stored record with this id wholesale. Fails with
    /// `NotFound` when no such record exists.
    async fn update(&self, contact: Contact) -> ContactResult<Contact>;

    /// Remove the record if present. Returns whether a record was removed;
    /// a missing id is never an error.
    async fn delete(&self, id: &str) -> ContactResult<bool>;
}
