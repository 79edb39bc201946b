//! Guarda Coisas App
//!
//! Root component: provides the item store and hydrates it once on mount.

use leptos::prelude::*;

use crate::components::{AddItemForm, Filters, Header, ItemList, StatsFooter};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(signal(0u32));

    // Provide context to all children
    provide_context(ctx);

    // Exactly one read from storage per session
    Effect::new(move |_| {
        ctx.hydrate();
    });

    view! {
        <div class="store-things">
            <Header />
            <AddItemForm />
            <div class="list">
                <ItemList />
                <Filters />
            </div>
            <StatsFooter />
        </div>
    }
}
