//! Temperature submission form
//!
//! Validates preconditions locally before issuing the write request: a cached
//! configuration must exist and the input must parse as a finite number.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::{ApiClient, LogSubmission};
use crate::store::ConfigStore;

fn parse_celsius(raw: &str) -> crate::Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|celsius| celsius.is_finite())
        .ok_or(crate::DashboardError::InvalidTemperature)
}

/// Check preconditions in order, then submit one reading.
///
/// No network request is issued unless a configuration is cached and the
/// input is a finite temperature.
pub async fn submit_reading(
    store: &ConfigStore,
    api: &ApiClient,
    raw_celsius: &str,
) -> crate::Result<()> {
    let config = store.get().ok_or(crate::DashboardError::MissingConfig)?;
    let celsius = parse_celsius(raw_celsius)?;

    api.submit_log(&LogSubmission {
        drone_id: config.drone_id,
        drone_name: config.drone_name,
        country: config.country,
        celsius,
    })
    .await
}

/// Pause long enough for the success indicator to be seen before navigation
async fn redirect_delay() {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        const REDIRECT_DELAY_MS: u32 = 1500;
        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
    }
}

/// Form that submits one temperature reading and then navigates to the list
#[component]
pub fn LogForm() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<ConfigStore>();
    let navigate = use_navigate();

    let (celsius, set_celsius) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(false);

        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        let raw = celsius.get_untracked();

        set_submitting.set(true);
        leptos::task::spawn_local(async move {
            match submit_reading(&store, &api, &raw).await {
                Ok(()) => {
                    set_submitting.try_set(false);
                    set_success.try_set(true);
                    set_celsius.try_set(String::new());
                    redirect_delay().await;
                    navigate("/logs", Default::default());
                }
                Err(e) => {
                    set_submitting.try_set(false);
                    set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <section>
            <h2>"Log Temperature"</h2>
            <form on:submit=on_submit style="display: flex; flex-direction: column; gap: 0.75rem; max-width: 24rem;">
                <label style="display: flex; flex-direction: column; gap: 0.5rem;">
                    "Temperature reading (\u{00b0}C)"
                    <input
                        id="celsius"
                        type="number"
                        step="0.1"
                        placeholder="25.5"
                        prop:value=celsius
                        on:input=move |ev| set_celsius.set(event_target_value(&ev))
                        style="padding: 0.5rem; font-size: 1.25rem;"
                    />
                </label>
                <button type="submit" prop:disabled=submitting style="padding: 0.5rem;">
                    {move || if submitting.get() { "Submitting..." } else { "Submit Temperature" }}
                </button>
            </form>
            {move || error.get().map(|message| view! {
                <p style="display: inline-block; padding: 0.5rem 1rem; border-radius: 0.25rem; color: #721c24; background-color: #f8d7da;">
                    {message}
                </p>
            })}
            {move || success.get().then(|| view! {
                <p style="display: inline-block; padding: 0.5rem 1rem; border-radius: 0.25rem; color: #155724; background-color: #d4edda;">
                    "Temperature logged successfully! Redirecting..."
                </p>
            })}
        </section>
    }
}
