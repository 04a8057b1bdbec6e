//! Paginated log history page
//!
//! Fetches one page of readings per page-number change and renders the table
//! with pagination controls.

use leptos::prelude::*;

use crate::api::{ApiClient, LogPage};
use crate::pagination::{Pagination, LOGS_PER_PAGE};
use crate::store::ConfigStore;

#[derive(Debug, Clone, PartialEq)]
enum LogsState {
    Loading,
    Loaded(LogPage),
    Failed(String),
}

/// Load one page of history for the cached drone.
///
/// Fails without a network call when no configuration is cached.
pub async fn load_page(
    store: &ConfigStore,
    api: &ApiClient,
    page: u32,
) -> crate::Result<LogPage> {
    let config = store.get().ok_or(crate::DashboardError::MissingConfig)?;
    api.fetch_logs(&config.drone_id, page, LOGS_PER_PAGE).await
}

/// Render an RFC 3339 timestamp as e.g. "Aug 01, 2026 10:30", falling back
/// to the raw string when it does not parse
fn format_created(created: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| created.to_string())
}

/// Table of historical readings with one fetch per page-number change
#[component]
pub fn LogsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<ConfigStore>();

    let (page, set_page) = signal(1u32);
    let (state, set_state) = signal(LogsState::Loading);

    Effect::new(move |_| {
        let current = page.get();
        let api = api.clone();
        let store = store.clone();
        set_state.set(LogsState::Loading);
        leptos::task::spawn_local(async move {
            match load_page(&store, &api, current).await {
                Ok(logs) => {
                    set_state.try_set(LogsState::Loaded(logs));
                }
                Err(e) => {
                    set_state.try_set(LogsState::Failed(e.to_string()));
                }
            }
        });
    });

    view! {
        <section>
            <h2>"Temperature Logs"</h2>
            {move || match state.get() {
                LogsState::Loading => view! { <p>"Loading logs..."</p> }.into_any(),
                LogsState::Failed(message) => view! {
                    <p style="display: inline-block; padding: 0.5rem 1rem; border-radius: 0.25rem; color: #721c24; background-color: #f8d7da;">
                        {message}
                    </p>
                }.into_any(),
                LogsState::Loaded(logs) if logs.items.is_empty() => view! {
                    <p style="color: #6c757d;">
                        "No logs found. Start by logging a temperature reading."
                    </p>
                }.into_any(),
                LogsState::Loaded(logs) => {
                    let pagination = Pagination::new(page.get(), LOGS_PER_PAGE, logs.total_items);
                    view! {
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr style="border-bottom: 2px solid #dee2e6;">
                                    <th style="padding: 0.5rem; text-align: left;">"Created"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Country"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Drone ID"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Drone Name"</th>
                                    <th style="padding: 0.5rem; text-align: right;">"Celsius"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {logs.items.into_iter().map(|log| {
                                    view! {
                                        <tr style="border-bottom: 1px solid #dee2e6;">
                                            <td style="padding: 0.5rem;">{format_created(&log.created)}</td>
                                            <td style="padding: 0.5rem;">{log.country}</td>
                                            <td style="padding: 0.5rem;"><code>{log.drone_id}</code></td>
                                            <td style="padding: 0.5rem;">{log.drone_name}</td>
                                            <td style="padding: 0.5rem; text-align: right; font-weight: 600;">
                                                {format!("{:.1}\u{00b0}C", log.celsius)}
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                        <PaginationControls pagination=pagination set_page=set_page />
                    }.into_any()
                }
            }}
        </section>
    }
}

/// Previous/next plus one numbered button per page
#[component]
fn PaginationControls(pagination: Pagination, set_page: WriteSignal<u32>) -> impl IntoView {
    let current = pagination.page();
    let total_pages = pagination.total_pages();
    let summary = format!(
        "Showing {} to {} of {} logs",
        pagination.start_item(),
        pagination.end_item(),
        pagination.total_items()
    );

    view! {
        <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 1rem;">
            <span style="color: #6c757d; font-size: 0.9em;">{summary}</span>
            <div style="display: flex; gap: 0.25rem;">
                <button
                    prop:disabled={!pagination.has_prev()}
                    on:click=move |_| set_page.set(current.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                {pagination.pages().map(|p| {
                    let style = if p == current {
                        "font-weight: 700; text-decoration: underline;"
                    } else {
                        ""
                    };
                    view! {
                        <button style=style on:click=move |_| set_page.set(p)>{p}</button>
                    }
                }).collect::<Vec<_>>()}
                <button
                    prop:disabled={!pagination.has_next()}
                    on:click=move |_| set_page.set((current + 1).min(total_pages))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::api::DroneConfig;
    use crate::io::{HttpResponse, MockHttpClient};
    use crate::store::MemoryStorage;
    use crate::DashboardError;

    fn loaded_store() -> ConfigStore {
        let store = ConfigStore::new(Arc::new(MemoryStorage::new()));
        store.set(DroneConfig {
            drone_id: "drone-7".to_string(),
            drone_name: "Kestrel".to_string(),
            light: "on".to_string(),
            country: "NO".to_string(),
        });
        store
    }

    #[tokio::test]
    async fn missing_config_aborts_before_any_request() {
        // a mock with no expectations panics on any call
        let store = ConfigStore::new(Arc::new(MemoryStorage::new()));
        let api = ApiClient::new("https://api.example.com", Arc::new(MockHttpClient::new()));

        let err = load_page(&store, &api, 1).await.unwrap_err();
        assert!(matches!(err, DashboardError::MissingConfig));
    }

    #[tokio::test]
    async fn fetches_requested_page_with_fixed_size() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "https://api.example.com/logs/drone-7?page=3&perPage=12")
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        body: r#"{"totalItems": 25, "items": []}"#.to_string(),
                    })
                })
            });

        let api = ApiClient::new("https://api.example.com", Arc::new(mock));
        let page = load_page(&loaded_store(), &api, 3).await.unwrap();
        assert_eq!(page.total_items, 25);
    }

    #[tokio::test]
    async fn fetch_failure_is_surfaced() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 503,
                    body: "unavailable".to_string(),
                })
            })
        });

        let api = ApiClient::new("https://api.example.com", Arc::new(mock));
        let err = load_page(&loaded_store(), &api, 1).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn format_created_renders_rfc3339() {
        assert_eq!(
            format_created("2026-08-01T10:30:00Z"),
            "Aug 01, 2026 10:30"
        );
    }

    #[test]
    fn format_created_falls_back_to_raw_string() {
        assert_eq!(format_created("yesterday"), "yesterday");
    }
}
