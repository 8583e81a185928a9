//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::Item;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items known locally; the store is the only owner of this list
    pub items: Vec<Item>,
    /// Current search text, applied at render time and never persisted
    pub search: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection (successful initial load)
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    store.items().set(items);
}

/// Append a server-created item
pub fn store_add_item(store: &AppStore, item: Item) {
    store.items().write().push(item);
}

/// Optimistically flip an item's checked flag; returns the new value
pub fn store_toggle_item(store: &AppStore, id: &str) -> Option<bool> {
    list::toggle_checked(&mut *store.items().write(), id)
}

/// Optimistically remove an item
pub fn store_remove_item(store: &AppStore, id: &str) {
    list::remove_item(&mut *store.items().write(), id);
}
