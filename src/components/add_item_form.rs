//! Add Item Form Component
//!
//! Form for creating new grocery items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Form for adding a new item to the list
///
/// The input is controlled by the `new_item` signal owned by the app, so
/// the coordinator can clear it once the create call succeeds. A name
/// that trims to nothing is rejected without any call.
#[component]
pub fn AddItemForm(
    new_item: ReadSignal<String>,
    set_new_item: WriteSignal<String>,
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_item.get();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        on_submit.run(name.to_string());
    };

    view! {
        <form class="add-form" on:submit=handle_submit>
            <label class="offscreen" for="add-item">"Add Item"</label>
            <input
                type="text"
                id="add-item"
                placeholder="Add Item"
                autocomplete="off"
                prop:value=move || new_item.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_item.set(input.value());
                }
            />
            <button type="submit" aria-label="Add Item">"Add"</button>
        </form>
    }
}
