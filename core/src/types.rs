//! Domain DTOs for the item-catalog API.
//!
//! # Design
//! These types mirror the backend's wire schema but are defined
//! independently of the mock-server crate; integration tests catch any
//! schema drift. `Item::id` is not optional: an `Item` only exists once
//! the backend has assigned it an id, and everything still being composed
//! in a form is an `ItemDraft`.

use serde::{Deserialize, Serialize};

/// A catalog record as returned by the backend.
///
/// `price` is `f64` because the wire contract is a bare JSON number; no
/// currency/decimal semantics are layered on top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Request body for create and update: an `Item` minus its id.
///
/// Also the shape of the dialog form; `Default` is the empty/zero form a
/// fresh create dialog starts from. Both operations send every field, so
/// there is no partial-update variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ItemDraft {
    /// Copy a row's current field values, as the edit dialog does when it
    /// opens.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
        }
    }
}
