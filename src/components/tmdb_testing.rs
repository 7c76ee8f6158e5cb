use futures::future::join3;
use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::models::{Show, SyncRunSummary, TmdbPage};

/// Diagnostic page for the TMDB ingestion pipeline. Not linked from the
/// navbar; reachable at /tmdb-testing by URL only.
#[component]
pub fn TmdbTesting() -> impl IntoView {
    let client = ApiClient::new();
    let client_feeds = client.clone();
    let client_sync = client.clone();

    let (trigger, set_trigger) = create_signal(0);

    // Fetch all three feeds the daily sync ingests, concurrently
    let feeds = create_local_resource(
        move || trigger.get(),
        move |_| {
            let client = client_feeds.clone();
            async move {
                join3(
                    client.get_tmdb_popular(),
                    client.get_tmdb_trending(),
                    client.get_tmdb_airing_today(),
                )
                .await
            }
        },
    );

    // Latest pipeline run summary
    let sync_run = create_local_resource(
        move || trigger.get(),
        move |_| {
            let client = client_sync.clone();
            async move { client.get_sync_latest().await }
        },
    );

    let rerun = move |_| {
        set_trigger.update(|n| *n += 1);
    };

    view! {
        <div class="tmdb-testing-page">
            <div class="tmdb-testing-header">
                <h2>"TMDB Testing"</h2>
                <button class="refresh-button" on:click=rerun>
                    "Run Checks"
                </button>
            </div>

            <p class="diagnostic-note">
                "Checks the feeds the daily sync ingests and the latest pipeline run."
            </p>

            <Suspense fallback=move || view! {
                <div class="loading">"Checking feeds..."</div>
            }>
                {move || {
                    feeds.get().map(|(popular, trending, airing)| {
                        view! {
                            <div class="feed-grid">
                                <FeedCard name="Popular" data=popular />
                                <FeedCard name="Trending (week)" data=trending />
                                <FeedCard name="Airing Today" data=airing />
                            </div>
                        }
                    })
                }}
            </Suspense>

            <Suspense fallback=move || view! {
                <div class="loading">"Loading last sync run..."</div>
            }>
                {move || {
                    sync_run.get().map(|result| {
                        view! { <SyncRunCard data=result /> }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Result card for a single TMDB feed
#[component]
fn FeedCard(name: &'static str, data: Result<TmdbPage<Show>, ApiError>) -> impl IntoView {
    match data {
        Ok(page) => {
            let sample = page
                .results
                .first()
                .and_then(|show| serde_json::to_string_pretty(show).ok())
                .unwrap_or_else(|| "(empty feed)".to_string());
            let first_title = page
                .results
                .first()
                .map(|show| show.title.clone())
                .unwrap_or_else(|| "-".to_string());

            view! {
                <div class="card feed-card">
                    <h3>{name}</h3>
                    <div class="feed-stats">
                        <span>{format!("{} results on page {}", page.results.len(), page.page)}</span>
                        <span>{format!("{} total", page.total_results)}</span>
                        <span>"First: " {first_title}</span>
                    </div>
                    <details class="feed-sample">
                        <summary>"Raw sample"</summary>
                        <pre>{sample}</pre>
                    </details>
                </div>
            }.into_view()
        }
        Err(e) => {
            view! {
                <div class="card card-error">
                    <h3>{name}</h3>
                    <div class="error-message">
                        {format!("Error: {}", e)}
                    </div>
                </div>
            }.into_view()
        }
    }
}

/// Summary card for the latest daily sync run
#[component]
fn SyncRunCard(data: Result<SyncRunSummary, ApiError>) -> impl IntoView {
    match data {
        Ok(run) => {
            view! {
                <div class="card sync-card">
                    <h3>"Last Sync Run"</h3>
                    <div class="sync-details">
                        <div>{run.message.clone()}</div>
                        <div>"Date: " {run.date.clone()}</div>
                        <div>"Execution: " {run.execution_id.clone()}</div>
                        <div>{format!("{} shows across {} files", run.total_shows, run.files_stored.len())}</div>
                    </div>
                    <ul class="sync-files">
                        {run
                            .files_stored
                            .into_iter()
                            .map(|key| view! { <li class="sync-file">{key}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }.into_view()
        }
        Err(e) => {
            view! {
                <div class="card card-error">
                    <h3>"Last Sync Run"</h3>
                    <div class="error-message">
                        {format!("Error: {}", e)}
                    </div>
                </div>
            }.into_view()
        }
    }
}
