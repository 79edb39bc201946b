//! Add Item Form Component
//!
//! Quantity select plus name input for appending items.

use leptos::prelude::*;

use crate::config::{DEFAULT_QUANTITY, QUANTITY_CHOICES};
use crate::context::use_app_context;

/// Form for adding a new item to the end of the list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // empty names are allowed
        ctx.add(name.get(), quantity.get());
        set_name.set(String::new());
        set_quantity.set(DEFAULT_QUANTITY);
    };

    view! {
        <form class="add-form" on:submit=submit>
            <h3>"O que você precisa guardar?"</h3>

            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse() {
                        set_quantity.set(value);
                    }
                }
            >
                {QUANTITY_CHOICES.map(|n| view! {
                    <option value=n.to_string()>{n}</option>
                }).collect_view()}
            </select>

            <input
                type="text"
                placeholder="Manda aqui"
                autofocus=true
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Adicionar"</button>
        </form>
    }
}
