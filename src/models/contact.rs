//! Contact model: the stored entity and its wire-input form.

use serde::{Deserialize, Serialize};

/// A single address-book record.
///
/// Every stored contact has a unique, immutable `id` and six non-empty
/// fields; those invariants are enforced by the service layer before a
/// `Contact` ever reaches a store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, opaque to clients
    pub id: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address (validated `local@domain.tld` shape)
    pub email: String,

    /// Street address
    pub street_address: String,

    /// City
    pub city: String,

    /// Country
    pub country: String,
}

/// Wire-input payload for create and update requests.
///
/// Every field is optional at the deserialization layer so that validation,
/// not serde, reports the first missing field with its name. Values are
/// carried through exactly as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactData {
    /// Optional client-supplied id; ignored on update, generated when
    /// absent or empty on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ContactData {
    /// Build the wire form of an existing contact, id included.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: Some(contact.id.clone()),
            first_name: Some(contact.first_name.clone()),
            last_name: Some(contact.last_name.clone()),
            email: Some(contact.email.clone()),
            street_address: Some(contact.street_address.clone()),
            city: Some(contact.city.clone()),
            country: Some(contact.country.clone()),
        }
    }
}
