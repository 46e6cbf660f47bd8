//! Custom line item total and list operations.
//!
//! Custom items are free-form package components owned by the caller's UI
//! state. The operations here are pure: each returns a new slice value and
//! leaves the input untouched. Items are addressed by their stable id, not
//! by position, since positions shift as items come and go.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{CompensationSlice, CustomLineItem};

/// A single-field change to a custom line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomItemPatch {
    /// Replace the item's label.
    Label(String),
    /// Replace the item's amount.
    Amount(Decimal),
}

/// Returns the sum of all custom line item amounts.
///
/// The sum is order-independent; an empty list yields zero.
pub fn calculate_custom_items_value(items: &[CustomLineItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}

/// Returns a new slice with `item` appended, preserving display order.
pub fn add_custom_line_item(slice: &CompensationSlice, item: CustomLineItem) -> CompensationSlice {
    let mut updated = slice.clone();
    updated.custom_line_items.push(item);
    updated
}

/// Returns a new slice without the item identified by `id`.
///
/// An unknown id leaves the slice unchanged; removing something already
/// gone is not a failure.
pub fn remove_custom_line_item(slice: &CompensationSlice, id: Uuid) -> CompensationSlice {
    let mut updated = slice.clone();
    updated.custom_line_items.retain(|item| item.id != id);
    updated
}

/// Returns a new slice with one field of the item identified by `id`
/// replaced. Item order is preserved; an unknown id leaves the slice
/// unchanged.
pub fn update_custom_line_item(
    slice: &CompensationSlice,
    id: Uuid,
    patch: CustomItemPatch,
) -> CompensationSlice {
    let mut updated = slice.clone();
    if let Some(item) = updated.custom_line_items.iter_mut().find(|i| i.id == id) {
        match patch {
            CustomItemPatch::Label(label) => item.label = label,
            CustomItemPatch::Amount(amount) => item.amount = amount,
        }
    }
    updated
}
