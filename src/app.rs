//! Grocery List App
//!
//! Main application component: owns the item collection and the four
//! remote operations (load, create, toggle, delete). Mutations update
//! local state first and mirror to the remote store best-effort.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AddItemForm, Footer, Header, ItemList, SearchItem};
use crate::context::AppContext;
use crate::list::filter_items;
use crate::store::{self, AppState, AppStateStoreFields};

/// Delay before the initial fetch
const INITIAL_FETCH_DELAY_MS: u32 = 1_000;

#[component]
pub fn App() -> impl IntoView {
    // State
    let app_store = Store::new(AppState::default());
    provide_context(app_store);

    let (new_item, set_new_item) = signal(String::new());
    let (is_loading, set_is_loading) = signal(true);
    let (has_loaded, set_has_loaded) = signal(false);
    let (fetch_error, set_fetch_error) = signal::<Option<String>>(None);

    let ctx = AppContext::new((is_loading, set_is_loading), (fetch_error, set_fetch_error));

    // Load items on mount, after a fixed delay
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(INITIAL_FETCH_DELAY_MS).await;
            match api::list_items().await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[App] Loaded {} items", items.len()).into());
                    store::store_set_items(&app_store, items);
                    set_has_loaded.set(true);
                    ctx.clear_error();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[App] Load failed: {}", e).into());
                    ctx.report_error(e);
                }
            }
            ctx.finish_loading();
        });
    });

    // Create: POST, then append the server-returned record
    let add_item = move |name: String| {
        spawn_local(async move {
            match api::create_item(&name).await {
                Ok(created) => {
                    web_sys::console::log_1(&format!("[App] Added item {}", created.id).into());
                    store::store_add_item(&app_store, created);
                    set_new_item.set(String::new());
                    ctx.clear_error();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[App] {}", e).into());
                    ctx.report_error(e);
                }
            }
        });
    };

    // Toggle: flip locally first, then best-effort PUT. No rollback on
    // failure; the error only surfaces in the status area.
    let handle_check = move |id: String| {
        let Some(checked) = store::store_toggle_item(&app_store, &id) else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = api::set_item_checked(&id, checked).await {
                web_sys::console::error_1(&format!("[App] {}", e).into());
                ctx.report_error(e);
            }
        });
    };

    // Remove: drop locally first, then best-effort DELETE. No restore on
    // failure.
    let handle_delete = move |id: String| {
        store::store_remove_item(&app_store, &id);
        spawn_local(async move {
            if let Err(e) = api::delete_item(&id).await {
                web_sys::console::error_1(&format!("[App] {}", e).into());
                ctx.report_error(e);
            }
        });
    };

    // Render-time filter; the search text is never persisted
    let visible_items =
        Signal::derive(move || filter_items(&app_store.items().get(), &app_store.search().get()));
    let total = Signal::derive(move || app_store.items().get().len());

    view! {
        <div class="app">
            <Header title="Grocery List" />
            <AddItemForm new_item=new_item set_new_item=set_new_item on_submit=add_item />
            <SearchItem />
            <main>
                <Show when=move || is_loading.get()>
                    <p class="status">"Loading Items..."</p>
                </Show>
                {move || {
                    fetch_error
                        .get()
                        .map(|e| view! { <p class="status error">{format!("Error: {}", e)}</p> })
                }}
                // The list renders only once the initial load has succeeded;
                // later mutation errors keep it visible alongside the banner.
                <Show when=move || !is_loading.get() && has_loaded.get()>
                    <ItemList
                        items=visible_items
                        handle_check=handle_check
                        handle_delete=handle_delete
                    />
                </Show>
            </main>
            <Footer length=total />
        </div>
    }
}
