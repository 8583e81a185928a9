//! Item List Component
//!
//! Renders the visible (already filtered) list, or an empty-state note.

use leptos::prelude::*;

use crate::components::LineItem;
use crate::models::Item;

/// The main list area
#[component]
pub fn ItemList(
    items: Signal<Vec<Item>>,
    #[prop(into)] handle_check: Callback<String>,
    #[prop(into)] handle_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !items.get().is_empty()
            fallback=|| view! { <p class="empty-note">"Your list is empty."</p> }
        >
            <ul class="item-list">
                <For
                    each=move || items.get()
                    // checked is part of the key so a toggle re-renders the row
                    key=|item| (item.id.clone(), item.checked)
                    children=move |item| {
                        view! {
                            <LineItem
                                item=item
                                handle_check=handle_check
                                handle_delete=handle_delete
                            />
                        }
                    }
                />
            </ul>
        </Show>
    }
}
