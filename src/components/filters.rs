//! Filters Component
//!
//! Sort/filter mode select and the clear-all button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::SortMode;

#[component]
pub fn Filters() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="actions">
            <select
                prop:value=move || ctx.mode().as_str()
                on:change=move |ev| ctx.set_mode(SortMode::from_value(&event_target_value(&ev)))
            >
                {SortMode::ALL.iter().map(|mode| view! {
                    <option value=mode.as_str()>{mode.label()}</option>
                }).collect_view()}
            </select>
            <button on:click=move |_| ctx.clear()>"Limpar lista"</button>
        </div>
    }
}
