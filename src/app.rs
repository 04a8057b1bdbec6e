//! Main App component and composition root
//!
//! Builds the startup configuration, the config store, and the API client,
//! provides them through context, and mounts the router.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::config_page::ConfigPage;
use crate::components::log_form::LogForm;
use crate::components::logs_page::LogsPage;
use crate::components::navigation::Navigation;
use crate::config::AppConfig;
use crate::io::default_http_client;
use crate::store::{default_storage, ConfigStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_config = AppConfig::from_env();
    let store = ConfigStore::new(default_storage());
    let api = ApiClient::new(app_config.api_url.clone(), default_http_client());

    provide_context(store);
    provide_context(api);
    provide_context(app_config);

    view! {
        <Title text="Drone Temperature Dashboard" />
        <Router>
            <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                <h1>"Drone Temperature Dashboard"</h1>
                <Navigation />
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=ConfigPage />
                    <Route path=path!("/log") view=LogForm />
                    <Route path=path!("/logs") view=LogsPage />
                </Routes>
            </main>
        </Router>
    }
}
