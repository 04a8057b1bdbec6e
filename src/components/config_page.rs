//! Drone configuration page
//!
//! Fetches the configuration for the fixed drone identifier, caches it in
//! the shared store, and displays it.

use leptos::prelude::*;

use crate::api::{ApiClient, DroneConfig};
use crate::components::light_badge::LightBadge;
use crate::config::AppConfig;
use crate::store::ConfigStore;

#[derive(Debug, Clone, PartialEq)]
enum ConfigState {
    Loading,
    Loaded(DroneConfig),
    Failed(String),
}

/// Fetches /configs/{drone_id} once on mount and renders the result
#[component]
pub fn ConfigPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<ConfigStore>();
    let app_config = expect_context::<AppConfig>();

    let (state, set_state) = signal(ConfigState::Loading);

    Effect::new(move |_| {
        let api = api.clone();
        let store = store.clone();
        let drone_id = app_config.drone_id.clone();
        leptos::task::spawn_local(async move {
            match api.fetch_config(&drone_id).await {
                Ok(config) => {
                    store.set(config.clone());
                    set_state.try_set(ConfigState::Loaded(config));
                }
                Err(e) => {
                    set_state.try_set(ConfigState::Failed(e.to_string()));
                }
            }
        });
    });

    view! {
        <section>
            <h2>"Drone Configuration"</h2>
            {move || match state.get() {
                ConfigState::Loading => view! { <p>"Loading configuration..."</p> }.into_any(),
                ConfigState::Failed(message) => view! {
                    <p style="display: inline-block; padding: 0.5rem 1rem; border-radius: 0.25rem; color: #721c24; background-color: #f8d7da;">
                        {message}
                    </p>
                }.into_any(),
                ConfigState::Loaded(config) => view! {
                    <table style="border-collapse: collapse;">
                        <tbody>
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <th style="padding: 0.5rem 1.5rem 0.5rem 0; text-align: left;">"Drone ID"</th>
                                <td style="padding: 0.5rem;"><code>{config.drone_id}</code></td>
                            </tr>
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <th style="padding: 0.5rem 1.5rem 0.5rem 0; text-align: left;">"Drone Name"</th>
                                <td style="padding: 0.5rem;">{config.drone_name}</td>
                            </tr>
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <th style="padding: 0.5rem 1.5rem 0.5rem 0; text-align: left;">"Light"</th>
                                <td style="padding: 0.5rem;">
                                    <LightBadge state=config.light />
                                </td>
                            </tr>
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <th style="padding: 0.5rem 1.5rem 0.5rem 0; text-align: left;">"Country"</th>
                                <td style="padding: 0.5rem;">{config.country}</td>
                            </tr>
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}
