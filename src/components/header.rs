//! Header Component

use leptos::prelude::*;

/// Application title bar
#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{title}</h1>
        </header>
    }
}
