//! Light state badge component

use leptos::prelude::*;

/// A colored badge showing the drone light state: on (green), off (gray),
/// anything else (amber)
#[component]
pub fn LightBadge(state: String) -> impl IntoView {
    let (color, bg) = match state.as_str() {
        "on" => ("#155724", "#d4edda"),
        "off" => ("#383d41", "#e2e3e5"),
        _ => ("#856404", "#fff3cd"),
    };

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span style=style>{state.to_uppercase()}</span>
    }
}
