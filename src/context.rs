//! Application Context
//!
//! Request-status signals shared by the app's load and mutation handlers.

use leptos::prelude::*;

/// App-wide status signals owned by the `App` coordinator
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the initial load is still in flight - read
    pub is_loading: ReadSignal<bool>,
    /// Whether the initial load is still in flight - write
    set_is_loading: WriteSignal<bool>,
    /// Message from the most recent failed request - read
    pub fetch_error: ReadSignal<Option<String>>,
    /// Message from the most recent failed request - write
    set_fetch_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        is_loading: (ReadSignal<bool>, WriteSignal<bool>),
        fetch_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            is_loading: is_loading.0,
            set_is_loading: is_loading.1,
            fetch_error: fetch_error.0,
            set_fetch_error: fetch_error.1,
        }
    }

    /// Mark the initial load as finished, success or not
    pub fn finish_loading(&self) {
        self.set_is_loading.set(false);
    }

    /// Record a failed request
    pub fn report_error(&self, message: String) {
        self.set_fetch_error.set(Some(message));
    }

    /// Clear the error after a successful request
    pub fn clear_error(&self) {
        self.set_fetch_error.set(None);
    }
}
