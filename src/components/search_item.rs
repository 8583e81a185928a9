//! Search Item Component
//!
//! Search box driving the render-time filter.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Search input for narrowing the visible list
#[component]
pub fn SearchItem() -> impl IntoView {
    let store = use_app_store();

    view! {
        <form class="search-form" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
            <label class="offscreen" for="search">"Search"</label>
            <input
                type="text"
                id="search"
                role="searchbox"
                placeholder="Search Items"
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
        </form>
    }
}
