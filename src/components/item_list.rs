//! Item List Component
//!
//! Renders the store's derived view (current sort/filter mode applied).

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul>
            <For
                each=move || ctx.view_items()
                // stored is part of the key so toggled rows re-render
                key=|item| (item.id, item.stored)
                children=|item| view! { <ItemRow item=item /> }
            />
        </ul>
    }
}
