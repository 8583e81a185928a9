//! Line Item Component
//!
//! A single grocery row: checkbox, label, delete button.

use leptos::prelude::*;

use crate::models::Item;

/// One row of the list
#[component]
pub fn LineItem(
    item: Item,
    #[prop(into)] handle_check: Callback<String>,
    #[prop(into)] handle_delete: Callback<String>,
) -> impl IntoView {
    let checked = item.checked;
    let name = item.item.clone();
    let aria_label = format!("Delete {}", name);

    let check_id = item.id.clone();
    let dblclick_id = item.id.clone();
    let delete_id = item.id.clone();

    view! {
        <li class="item">
            <input
                type="checkbox"
                checked=checked
                on:change=move |_| handle_check.run(check_id.clone())
            />
            <label
                class=if checked { "item-label checked" } else { "item-label" }
                on:dblclick=move |_| handle_check.run(dblclick_id.clone())
            >
                {name}
            </label>
            <button
                class="delete"
                aria-label=aria_label
                on:click=move |_| handle_delete.run(delete_id.clone())
            >
                "delete"
            </button>
        </li>
    }
}
