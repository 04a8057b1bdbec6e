//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

/// Links to the three dashboard pages
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav style="display: flex; gap: 1.5rem; align-items: baseline; padding: 0.5rem 0; border-bottom: 2px solid #dee2e6; margin-bottom: 1rem;">
            <A href="/">"Config"</A>
            <A href="/log">"Log Temperature"</A>
            <A href="/logs">"View Logs"</A>
        </nav>
    }
}
