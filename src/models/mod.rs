//! Data models for the contacts API.
//!
//! This module contains the data structures representing contacts and the
//! country reference list, plus the wire-input form used by create/update
//! requests.

pub mod contact;
pub mod country;

pub use contact::{Contact, ContactData};
pub use country::{all_countries, Country};
