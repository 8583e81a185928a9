//! Footer Component
//!
//! Shows the total item count, independent of the search filter.

use leptos::prelude::*;

#[component]
pub fn Footer(length: Signal<usize>) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>
                {move || {
                    let n = length.get();
                    if n == 1 {
                        "1 List Item".to_string()
                    } else {
                        format!("{} List Items", n)
                    }
                }}
            </p>
        </footer>
    }
}
