//! In-memory contact store.
//!
//! The reference backend: an id-keyed map plus an insertion-order index,
//! guarded by a single mutex. Suitable for development and tests; a durable
//! backend would implement the same trait.

use crate::domain::ContactId;
use crate::error::{ContactApiError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

struct StoreInner {
    contacts: HashMap<String, Contact>,
    /// Ids in insertion order; `list_all` walks this so iteration is stable
    order: Vec<String>,
}

/// In-memory implementation of [`ContactStore`].
///
/// All operations take the one lock for the duration of their
/// read/modify/write sequence, so each call is atomic and reads observe a
/// consistent snapshot. No await happens while the lock is held.
pub struct MemoryContactStore {
    inner: Mutex<StoreInner>,
}

impl MemoryContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                contacts: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Create a store pre-populated with the three reference contacts
    /// (ids "1", "2", "3").
    pub fn with_seed_data() -> Self {
        let mut contacts = HashMap::new();
        let mut order = Vec::new();
        for contact in seed_contacts() {
            order.push(contact.id.clone());
            contacts.insert(contact.id.clone(), contact);
        }
        Self {
            inner: Mutex::new(StoreInner { contacts, order }),
        }
    }

    fn lock(&self) -> ContactResult<std::sync::MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|_| ContactApiError::Internal("contact store lock poisoned".to_string()))
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        let inner = self.lock()?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.contacts.get(id).cloned())
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> ContactResult<Option<Contact>> {
        let inner = self.lock()?;
        Ok(inner.contacts.get(id).cloned())
    }

    async fn create(&self, mut contact: Contact) -> ContactResult<Contact> {
        let mut inner = self.lock()?;

        if contact.id.is_empty() {
            contact.id = ContactId::generate().into_inner();
        }

        if inner.contacts.contains_key(&contact.id) {
            return Err(ContactApiError::Conflict(contact.id));
        }

        inner.order.push(contact.id.clone());
        inner.contacts.insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }

    async fn update(&self, contact: Contact) -> ContactResult<Contact> {
        let mut inner = self.lock()?;

        if !inner.contacts.contains_key(&contact.id) {
            return Err(ContactApiError::NotFound(contact.id));
        }

        // Wholesale replacement; the insertion-order slot stays put
        inner.contacts.insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }

    async fn delete(&self, id: &str) -> ContactResult<bool> {
        let mut inner = self.lock()?;

        if inner.contacts.remove(id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|stored| stored != id);
        Ok(true)
    }
}

/// The reference data set used for development and the seeded test store.
fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            street_address: "123 Main St".to_string(),
            city: "New York".to_string(),
            country: "United States".to_string(),
        },
        Contact {
            id: "2".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            street_address: "456 Oak Ave".to_string(),
            city: "Los Angeles".to_string(),
            country: "United States".to_string(),
        },
        Contact {
            id: "3".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Johnson".to_string(),
            email: "bob.johnson@example.com".to_string(),
            street_address: "789 Pine Rd".to_string(),
            city: "Chicago".to_string(),
            country: "United States".to_string(),
        },
    ]
}
