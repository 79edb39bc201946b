//! Item Row Component
//!
//! Single checklist entry.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;

/// A single item row with stored checkbox and delete button
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let stored = item.stored;
    let label = item.label();

    view! {
        <li>
            <input
                type="checkbox"
                prop:checked=stored
                on:change=move |_| ctx.toggle_stored(id)
            />
            <span class=if stored { "line-through" } else { "" }>{label}</span>
            <button on:click=move |_| ctx.remove(id)>"❌"</button>
        </li>
    }
}
