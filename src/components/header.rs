//! Header Component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <img class="img-logo" src="logo-espaco-mulher.png" alt="Logo Espaço Mulher" />
            <h1>"Espaço Mulher"</h1>
        </header>
    }
}
