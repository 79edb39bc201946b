//! Stats Footer Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Footer with item count and stored percentage
#[component]
pub fn StatsFooter() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <footer class="stats">
            <p>{move || ctx.stats().summary()}</p>
        </footer>
    }
}
